//! Framework-level connection error
//!
//! Every connector probe in dashq reports failures through this one type, so
//! callers can handle connectivity problems uniformly regardless of which
//! service was probed. The underlying error always stays chained as `source`.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Normalized connectivity/credential failure raised when a connection probe
/// fails.
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// The service itself rejected the call: bad credentials, missing
    /// permissions, an invalid account id, or synchronous throttling.
    #[error("Connection error for {client}: {detail}. Check the connection details.")]
    Provider {
        /// String form of the client the probe ran against
        client: String,
        /// Provider-reported error text
        detail: String,
        #[source]
        source: Option<BoxError>,
    },

    /// Anything the provider did not report itself: transport failures,
    /// malformed responses, programming errors.
    #[error("Unknown error connecting with {client}: {detail}.")]
    Unknown {
        client: String,
        detail: String,
        #[source]
        source: Option<BoxError>,
    },
}

impl ConnectionError {
    /// Wrap a provider-reported error.
    pub fn provider(
        client: impl fmt::Display,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::Provider {
            client: client.to_string(),
            detail: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// Wrap an unrecognized error.
    pub fn unknown(
        client: impl fmt::Display,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::Unknown {
            client: client.to_string(),
            detail: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// Unknown failure with no underlying error object, for responses that
    /// are missing expected data.
    pub fn malformed(client: impl fmt::Display, detail: impl Into<String>) -> Self {
        Self::Unknown {
            client: client.to_string(),
            detail: detail.into(),
            source: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("AccessDeniedException: not authorized to ListDashboards")]
    struct FakeServiceError;

    #[test]
    fn test_provider_message_shape() {
        let err = ConnectionError::provider("QuickSight client (account 123456789012)", FakeServiceError);
        let msg = err.to_string();
        assert!(msg.starts_with("Connection error for QuickSight client (account 123456789012):"));
        assert!(msg.contains("AccessDeniedException"));
        assert!(msg.ends_with("Check the connection details."));
    }

    #[test]
    fn test_unknown_message_shape() {
        let err = ConnectionError::unknown("QuickSight client (account 123456789012)", FakeServiceError);
        let msg = err.to_string();
        assert!(msg.starts_with("Unknown error connecting with"));
        assert!(msg.contains("AccessDeniedException"));
        assert!(msg.ends_with("."));
    }

    #[test]
    fn test_source_is_preserved() {
        let err = ConnectionError::provider("client", FakeServiceError);
        let source = std::error::Error::source(&err).expect("source should be chained");
        assert!(source.to_string().contains("not authorized"));
    }

    #[test]
    fn test_malformed_has_no_source() {
        let err = ConnectionError::malformed("client", "response contained no dashboard");
        assert!(std::error::Error::source(&err).is_none());
        assert!(err.to_string().contains("response contained no dashboard"));
    }
}
