//! # tablecast-delivery
//!
//! Chooses how exported CSV text leaves the process: saved to disk under a
//! fixed filename, or relayed to a companion process whose identifier must
//! appear on an injected whitelist.
//!
//! Collaborators (settings, session store, relay transport, file sink) sit
//! behind async traits so the policy in [`DeliverySelector`] stays
//! deterministic under test. Relay-path failures never propagate: they are
//! logged and folded into the returned [`DeliveryOutcome`]. Save-path
//! failures propagate to the caller.

pub mod error;
pub mod fs_sink;
pub mod selector;
pub mod traits;
pub mod whitelist;

pub use error::DeliveryError;
pub use fs_sink::DirectorySink;
pub use selector::{
    DeliveryOutcome, DeliverySelector, WithholdReason, EXPORT_FILENAME, RELAY_MODE_KEY,
    REQUESTING_PEER_KEY,
};
pub use traits::{FileSink, RelayTransport, SessionStore, SettingsReader};
pub use whitelist::Whitelist;
