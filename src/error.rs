//! Error type shared by the driver, codec and transport layers.

use thiserror::Error;

/// Errors surfaced by driver operations.
///
/// The driver performs no retries on its own. A failed image upload is safe
/// to re-issue in full, the controller-side memory write is idempotent per
/// target region.
#[derive(Debug, Error)]
pub enum Error {
    /// The device handle could not be opened.
    #[error("device transport unavailable: {0}")]
    TransportUnavailable(String),

    /// A command exchange failed at the transport layer.
    #[error("command exchange failed: {0}")]
    Protocol(String),

    /// A caller-supplied argument violates a driver precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
