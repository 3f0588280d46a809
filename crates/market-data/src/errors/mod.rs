//! Error types for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: errors raised by upstream providers (Yahoo, mfapi.in)
//! - [`LookupError`]: errors raised by the lookup client, shaped for display
//!   next to the search control

use thiserror::Error;

/// Errors that can occur while talking to an upstream price or NAV source.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol or scheme code was not found by the provider.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The provider answered, but reported a logical error in its payload.
    #[error("{provider} reported an error: {message}")]
    Rejected {
        /// The provider that rejected the request
        provider: String,
        /// The error message from the provider payload
        message: String,
    },

    /// The provider answered with a non-success HTTP status.
    #[error("{provider} returned status code {status}")]
    UpstreamStatus {
        /// The provider that returned the status
        provider: String,
        /// The HTTP status code
        status: u16,
    },

    /// The provider answered with a body that could not be decoded.
    #[error("Invalid response from {provider}: {message}")]
    InvalidResponse {
        /// The provider that returned the body
        provider: String,
        /// Why decoding failed
        message: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Errors returned by the lookup client.
///
/// The `Display` output of each variant is the message shown to the user.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The endpoint answered 404.
    #[error("{0}")]
    NotFound(String),

    /// The endpoint answered 500.
    #[error("Server error. Please try again later.")]
    Server,

    /// The endpoint answered with any other non-success status.
    #[error("Server responded with status: {0}")]
    Status(u16),

    /// The endpoint answered with something other than JSON.
    #[error("Server returned non-JSON response")]
    NonJson,

    /// The endpoint answered 2xx with an `error` field in the body.
    #[error("{0}")]
    Logical(String),

    /// The JSON body did not have the expected shape.
    #[error("Unexpected response from lookup service: {0}")]
    InvalidPayload(String),

    /// The request never produced a response.
    #[error("Failed to reach lookup service: {0}")]
    Network(#[from] reqwest::Error),
}

impl LookupError {
    /// True for the "not found" family: a 404 or a logical `error` field.
    ///
    /// Both cases are reported the same way to the user.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Logical(_))
    }
}
