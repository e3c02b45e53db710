//! Typed async client for the Markbook exam-marking API.
//!
//! The base URL is read once from `MARKBOOK_API_BASE_URL`, falling back to
//! the local development server at `http://127.0.0.1:8000/api/`. Construct
//! a client explicitly with [`ApiClient::with_config`] (the testable path),
//! or grab the process-wide instance:
//!
//! ```no_run
//! # async fn demo() -> Result<(), markbook_client::ApiError> {
//! let client = markbook_client::ApiClient::shared();
//! let classes = client.list_classes().await?;
//! # Ok(())
//! # }
//! ```

mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod models;

pub use config::ClientConfig;
pub use error::ApiError;
pub use http::client::ApiClient;
