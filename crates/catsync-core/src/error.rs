use thiserror::Error;

/// Failure taxonomy for a sync run.
///
/// Any variant aborts the whole invocation: the engine never retries,
/// never falls back to previously known state, and never reports a
/// partial result. Diagnostic detail (status codes, response bodies)
/// is preserved verbatim for operator visibility but not interpreted.
#[derive(Debug, Error)]
pub enum SyncError {
    /// No response was received from either system (connect/timeout).
    #[error("no response from upstream: {0}")]
    UpstreamUnreachable(String),

    /// A response was received with a non-success status code.
    #[error("upstream rejected request with status {status}: {body}")]
    UpstreamRejected { status: u16, body: String },

    /// The outgoing request could not even be constructed or sent.
    #[error("request could not be sent: {0}")]
    RequestMalformed(String),

    /// Anything else: decode failures, unexpected response shapes.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl SyncError {
    /// Create a new UpstreamRejected error
    pub fn upstream_rejected(status: u16, body: impl Into<String>) -> Self {
        Self::UpstreamRejected {
            status,
            body: body.into(),
        }
    }

    /// Create a new RequestMalformed error
    pub fn request_malformed(message: impl Into<String>) -> Self {
        Self::RequestMalformed(message.into())
    }

    /// Create a new Unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }

    /// Check if the failure happened before any response arrived
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::UpstreamUnreachable(_) | Self::RequestMalformed(_)
        )
    }

    /// Get error category for logging/monitoring
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UpstreamUnreachable(_) => ErrorCategory::Unreachable,
            Self::UpstreamRejected { .. } => ErrorCategory::Rejected,
            Self::RequestMalformed(_) => ErrorCategory::Malformed,
            Self::Unexpected(_) => ErrorCategory::Unexpected,
        }
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        // Connect errors also report is_request(), so transport checks
        // must come first.
        if err.is_connect() || err.is_timeout() {
            Self::UpstreamUnreachable(err.to_string())
        } else if err.is_builder() || err.is_request() {
            Self::RequestMalformed(err.to_string())
        } else if let Some(status) = err.status() {
            // Status errors surfaced this way have already consumed the
            // response; the transports capture bodies at the call site
            // instead, so this arm mostly covers error_for_status users.
            Self::UpstreamRejected {
                status: status.as_u16(),
                body: String::new(),
            }
        } else {
            Self::Unexpected(err.to_string())
        }
    }
}

/// Error categories for monitoring and classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Unreachable,
    Rejected,
    Malformed,
    Unexpected,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreachable => write!(f, "unreachable"),
            Self::Rejected => write!(f, "rejected"),
            Self::Malformed => write!(f, "malformed"),
            Self::Unexpected => write!(f, "unexpected"),
        }
    }
}

/// Convenience result type for sync operations
pub type Result<T> = std::result::Result<T, SyncError>;
