//! Posts API client for postcheck
//!
//! This crate sends requests against the `posts` resource of a JSONPlaceholder
//! style service and hands back the raw status code and decoded body:
//! - Collection and item URLs built from [`ApiConfig`](postcheck_shared_config::ApiConfig)
//! - JSON, plain-text or empty request bodies with arbitrary headers
//! - Empty or non-JSON response bodies decoded as `{}`
//!
//! # Example
//!
//! ```rust,no_run
//! use postcheck_client::PostsClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PostsClient::with_url("https://jsonplaceholder.typicode.com")?;
//!
//! let response = client.get_post(1).await?;
//! assert_eq!(response.status, 200);
//! println!("{}", response.body["title"]);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod models;

pub use client::PostsClient;
pub use error::{ClientError, ClientResult};
pub use models::{decode_body, ApiResponse, Post, PostRequest, RequestBody};
pub use reqwest::Method;
