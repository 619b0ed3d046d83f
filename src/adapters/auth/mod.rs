//! Login gate adapters.

mod static_credentials;

pub use static_credentials::{StaticCredentialVerifier, DEFAULT_PASSWORD, DEFAULT_USERNAME};
