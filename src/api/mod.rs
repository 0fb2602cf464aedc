// Todo API module.
// Provides the client and wire types for the task-tracking REST API.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::ApiClient;
pub use types::*;
