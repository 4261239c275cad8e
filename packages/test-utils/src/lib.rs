//! Shared test utilities for the postcheck workspace
//!
//! This crate provides a local stand-in for the public posts service so the
//! suite can run without network access.
//!
//! # Mock Services
//!
//! - [`MockPostsServer`] - Mock JSONPlaceholder `posts` resource, quirks included
//!
//! # Example
//!
//! ```rust,ignore
//! use postcheck_test_utils::MockPostsServer;
//!
//! #[tokio::test]
//! async fn test_with_mock() {
//!     let server = MockPostsServer::start().await;
//!
//!     // Use server.url() as the base URL of your client
//! }
//! ```

mod posts;

pub use posts::{seeded_post, MockPostsServer, CREATED_POST_ID, SEEDED_POST_COUNT};
