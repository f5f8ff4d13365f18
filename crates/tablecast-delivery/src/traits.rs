//! Async collaborator seams
//!
//! Each trait covers one external collaborator of the delivery step. The
//! reads are semantically quick lookups but exposed as awaited operations,
//! matching the host environments these collaborators live in.

use async_trait::async_trait;

use crate::error::DeliveryError;

/// Read-only access to the process configuration.
#[async_trait]
pub trait SettingsReader: Send + Sync {
    /// Read a boolean flag; `None` when the key is unset.
    async fn get_bool(&self, key: &str) -> Result<Option<bool>, DeliveryError>;
}

/// Per-request session storage.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read a session value; `None` when the key is unset.
    async fn get(&self, key: &str) -> Result<Option<String>, DeliveryError>;
}

/// Message transport to a companion process.
#[async_trait]
pub trait RelayTransport: Send + Sync {
    /// Send a payload to a single destination peer.
    async fn send(&self, payload: &str, destination: &str) -> Result<(), DeliveryError>;
}

/// Persists a payload to storage under a filename.
#[async_trait]
pub trait FileSink: Send + Sync {
    /// Save the payload under the given filename.
    async fn save(&self, payload: &str, filename: &str) -> Result<(), DeliveryError>;
}
