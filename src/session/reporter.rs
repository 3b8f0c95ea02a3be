//! Error reporter seam
//!
//! Chat service failures are surfaced out-of-band through this trait rather
//! than being appended to the message log. Fire-and-forget: nothing consumes
//! a return value.

use crate::services::ServiceError;
use tracing::error;

/// Sink for chat service failures
pub trait ErrorReporter: Send + Sync {
    /// Report a failed chat round trip
    fn report(&self, session_id: &str, error: &ServiceError);
}

/// Default reporter backed by structured logging
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, session_id: &str, error: &ServiceError) {
        error!(
            session_id = %session_id,
            error = %error,
            "Chat service request failed"
        );
    }
}
