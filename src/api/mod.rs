//! The remote dish collection, as seen by the controller.
//!
//! The controller only needs four capabilities from the collection service.
//! [`DishApi`] names them; [`HttpDishApi`] implements them over HTTP.

mod http;

use std::fmt;
use std::future::Future;

use crate::models::{Dish, DishId, NewDish};

pub use http::HttpDishApi;

/// The collaborator capability that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::List => write!(f, "list"),
            Operation::Create => write!(f, "create"),
            Operation::Update => write!(f, "update"),
            Operation::Delete => write!(f, "delete"),
        }
    }
}

/// A remote operation failed.
///
/// Network failures, non-success statuses and malformed responses all end up
/// here; callers are not expected to tell them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub operation: Operation,
    pub message: String,
}

impl ApiError {
    pub fn new(operation: Operation, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Remote {} failed: {}", self.operation, self.message)
    }
}

impl std::error::Error for ApiError {}

/// CRUD access to the remote dish collection.
pub trait DishApi {
    /// Fetches every dish in the collection.
    fn list(&self) -> impl Future<Output = Result<Vec<Dish>, ApiError>> + Send;

    /// Creates a dish; the service assigns its id.
    fn create(&self, dish: &NewDish) -> impl Future<Output = Result<Dish, ApiError>> + Send;

    /// Overwrites every field of the dish with `id`.
    fn update(&self, id: DishId, dish: &Dish)
        -> impl Future<Output = Result<(), ApiError>> + Send;

    fn delete(&self, id: DishId) -> impl Future<Output = Result<(), ApiError>> + Send;
}
