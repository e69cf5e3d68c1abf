//! Corkboard API Client Package
//!
//! Typed request wrapper over the Corkboard HTTP API plus the bearer-token
//! credential store. Translates domain operations into HTTP calls and maps
//! non-2xx responses to a uniform error carrying the server's detail
//! message.

pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use client::ApiClient;
pub use config::ClientConfig;
pub use credentials::CredentialStore;
pub use error::{ClientError, ClientResult};
pub use types::*;
