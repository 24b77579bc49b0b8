//! Common test infrastructure
//!
//! Spawns a dashboard server over temporary CSV tables. Tests should only
//! import from this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::TestServer;
//! use reqwest::StatusCode;
//!
//! #[tokio::test]
//! async fn test_get_graphs() {
//!     let server = TestServer::spawn().await;
//!
//!     let response = server.get("/get_graphs").await;
//!     assert_eq!(response.status(), StatusCode::OK);
//! }
//! ```

mod constants;
mod fixtures;
mod server;

pub use constants::*;
pub use server::TestServer;

#[allow(unused_imports)]
pub(crate) use fixtures::{create_test_tables, write_test_tables};
