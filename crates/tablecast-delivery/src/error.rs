//! Error types for delivery collaborators

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised by delivery collaborators.
///
/// Which variants propagate depends on the delivery path: sink errors
/// surface to the caller, while settings, session, and transport errors are
/// absorbed by [`crate::DeliverySelector`]'s log-and-continue policy.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The settings reader failed to produce the relay-mode flag
    #[error("settings read failed: {0}")]
    Settings(#[source] BoxError),

    /// The session store failed while looking up the requesting peer
    #[error("session store read failed: {0}")]
    Session(#[source] BoxError),

    /// The relay transport failed to send to a peer
    #[error("relay send to '{peer}' failed: {source}")]
    Transport {
        peer: String,
        #[source]
        source: BoxError,
    },

    /// The file sink failed to persist the payload
    #[error("file save failed: {0}")]
    Sink(#[source] BoxError),
}

impl DeliveryError {
    /// Wrap a collaborator error as a settings failure
    pub fn settings<E: Into<BoxError>>(err: E) -> Self {
        DeliveryError::Settings(err.into())
    }

    /// Wrap a collaborator error as a session failure
    pub fn session<E: Into<BoxError>>(err: E) -> Self {
        DeliveryError::Session(err.into())
    }

    /// Wrap a collaborator error as a transport failure
    pub fn transport<E: Into<BoxError>>(peer: impl Into<String>, err: E) -> Self {
        DeliveryError::Transport {
            peer: peer.into(),
            source: err.into(),
        }
    }

    /// Wrap a collaborator error as a sink failure
    pub fn sink<E: Into<BoxError>>(err: E) -> Self {
        DeliveryError::Sink(err.into())
    }
}
