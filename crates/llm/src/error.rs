//! Provider failure taxonomy.

use compact_str::CompactString;
use std::time::Duration;
use thiserror::Error;

/// A failed adapter call, tagged with the vendor that produced it.
#[derive(Debug, Error)]
#[error("{provider}: {kind}")]
pub struct ProviderError {
    /// Vendor name.
    pub provider: CompactString,
    /// What went wrong.
    pub kind: ErrorKind,
}

impl ProviderError {
    /// Create a new error for `provider`.
    pub fn new(provider: impl Into<CompactString>, kind: ErrorKind) -> Self {
        Self {
            provider: provider.into(),
            kind,
        }
    }

    /// Shorthand for a [`ErrorKind::Malformed`] error.
    pub fn malformed(provider: impl Into<CompactString>, detail: impl Into<String>) -> Self {
        Self::new(provider, ErrorKind::Malformed(detail.into()))
    }
}

/// Runtime failure kinds. Unconfigured vendors never get this far; the
/// registry drops them before any call.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// No response within the adapter timeout.
    #[error("timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// DNS, connection or body transfer failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The vendor answered with a non-2xx status.
    #[error("http {status}: {body}")]
    Http {
        /// Response status code.
        status: u16,
        /// Response body, as reported by the vendor.
        body: String,
    },

    /// 2xx status but the expected text field is missing or unparsable.
    #[error("malformed response: {0}")]
    Malformed(String),
}
