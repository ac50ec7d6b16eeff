//! Reference dish collection service used by the `menu-server` binary.

pub mod repository;
pub mod routes;

pub use repository::MenuRepository;
pub use routes::router;
