mod config_cmd;
mod dish;

pub use config_cmd::ConfigCommand;
pub use dish::DishCommand;
