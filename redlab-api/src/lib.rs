mod client;
mod error;
pub mod models;
pub mod retry;

pub use client::{Client, ClientBuilder};
pub use error::ApiError;
pub use models::{PostQuery, PostsResponse, Token};
pub use retry::RetryPolicy;
