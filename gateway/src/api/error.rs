use thiserror::Error;

/// Gateway errors, one variant per failure class
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The mapping configuration is unusable: a required field path is
    /// blank, a credential is missing, an alias is unknown, or a resolved
    /// terminal node was not the scalar the mapping promised. Points at the
    /// config, never worth retrying.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The HTTP exchange itself failed. Propagated from the transport with
    /// no interpretation.
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider answered with a non-success status.
    #[error("provider error (HTTP {status}): {message}")]
    Provider {
        status: u16,
        /// Text found at the configured error path, or the raw response
        /// body when that path is absent or does not resolve.
        message: String,
    },

    /// The provider reported success but the body is not valid JSON.
    #[error("response parse error: {message}")]
    Parse {
        message: String,
        /// Raw body, kept for diagnostics.
        body: String,
    },
}

impl GatewayError {
    /// Check if a caller-side retry could plausibly succeed
    ///
    /// Transport failures and throttling or server-side provider statuses
    /// are transient. Configuration and parse failures are not: the same
    /// request will fail the same way until the config changes.
    pub fn is_retryable(&self) -> bool {
        match self {
            GatewayError::Transport(_) => true,
            GatewayError::Provider { status, .. } => {
                *status == 429 || (500..=599).contains(status)
            }
            GatewayError::Configuration(_) | GatewayError::Parse { .. } => false,
        }
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_and_server_errors_are_retryable() {
        assert!(GatewayError::Transport("connection reset".into()).is_retryable());
        assert!(GatewayError::Provider { status: 429, message: "slow down".into() }.is_retryable());
        assert!(GatewayError::Provider { status: 503, message: "overloaded".into() }.is_retryable());
    }

    #[test]
    fn config_and_client_errors_are_not() {
        assert!(!GatewayError::Configuration("missing path".into()).is_retryable());
        assert!(!GatewayError::Provider { status: 401, message: "bad key".into() }.is_retryable());
        assert!(!GatewayError::Parse { message: "eof".into(), body: "not json".into() }.is_retryable());
    }
}
