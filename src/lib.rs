//! Menu Sync
//!
//! Keeps a local list of dishes in step with a remote dish collection.

pub mod api;
pub mod config;
pub mod controller;
pub mod models;
pub mod server;
pub mod store;

pub use api::{ApiError, DishApi, HttpDishApi, Operation};
pub use config::{Config, ConfigError, ConfigSource, ConfigValue};
pub use controller::{EditState, MenuState, Outcome, SyncController};
pub use models::{Dish, DishDraft, DishEdit, DishField, DishId, NewDish};
pub use store::DishStore;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
