//! Rust client library for the IBM Blockchain Platform management REST API.
//!
//! Public API layers:
//! - [`IbpClient`]: configuration plus one async method per REST operation.
//! - Options records (for example [`GetComponentOptions`]): typed inputs,
//!   one per operation.
//! - [`models`]: the request/response model catalog, re-exported at the
//!   crate root.
//! - [`ClientError`]: unified error type used by every operation.
//!
//! Each operation is a single HTTP round-trip awaited by the caller and
//! returns a [`ServiceResponse`] pairing the decoded result with response
//! status and headers. Server and decoding failures keep the
//! [`RawResponse`] accessible through [`ClientError::response`].
//!
//! ```no_run
//! use ibp_client::{ClientOptions, GetComponentOptions, IbpClient};
//!
//! # async fn run() -> Result<(), ibp_client::ClientError> {
//! let client = IbpClient::new(ClientOptions {
//!     url: Some("https://blockchainv2.example.com/api".to_owned()),
//!     ..ClientOptions::default()
//! })?;
//!
//! let component = client
//!     .get_component(&GetComponentOptions::new("component-1"))
//!     .await?;
//! println!("{:?}", component.result.display_name);
//! # Ok(())
//! # }
//! ```

mod auth;
mod catalog;
mod client;
mod error;
pub mod models;
mod operations;
mod response;

/// Credential scheme variants and the accepted auth type label.
pub use auth::{AUTH_TYPE_NOAUTH, Authenticator};
/// Static registry of every REST operation.
pub use catalog::{OPERATIONS, OperationDefinition};
/// Client, construction options, and environment variable names.
pub use client::{ClientOptions, ENV_AUTH_TYPE, ENV_URL, IbpClient};
/// Error type returned by all client operations.
pub use error::ClientError;
/// Model catalog, also available namespaced via [`models`].
pub use models::*;
/// Options records and query-flag constants, one module-flat namespace.
pub use operations::*;
/// Response wrappers shared by every operation.
pub use response::{RawResponse, ServiceResponse};
