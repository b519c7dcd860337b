//! Client error types.

use thiserror::Error;

use crate::transport::TransportError;

/// Errors from driving a session.
///
/// Advisory strings inside a successful response never surface here: the
/// session logs them and the loop continues with whatever the snapshot
/// actually contains.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The exchange with the service failed. Fatal — the session cannot
    /// continue without a valid snapshot.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A submission was attempted after the server reported termination.
    #[error("session already terminated")]
    SessionOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_display_is_transparent() {
        let err = ClientError::from(TransportError::Status { status: 502 });
        assert_eq!(err.to_string(), "server returned HTTP 502");
    }

    #[test]
    fn session_over_display() {
        assert_eq!(ClientError::SessionOver.to_string(), "session already terminated");
    }
}
