//! Access to the remote todo collection.
//!
//! Components only see [`TodoStore`]; [`HttpStore`] is the one that talks to
//! a real collection endpoint.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NewTodo, Todo};

pub mod http;

#[cfg(test)]
pub mod fake;

pub use http::HttpStore;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The endpoint answered with a non-success status.
    #[error("Failed to {action}: {status}")]
    Status { action: &'static str, status: u16 },
    /// Connection failure or an unreadable body.
    #[error("{0}")]
    Http(#[from] reqwest::Error),
}

#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    async fn list(&self) -> Result<Vec<Todo>, StoreError>;
    async fn create(&self, new: &NewTodo) -> Result<(), StoreError>;
    async fn update(&self, todo: &Todo) -> Result<(), StoreError>;
    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}
