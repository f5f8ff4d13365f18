//! Delivery-channel selection

use crate::error::DeliveryError;
use crate::traits::{FileSink, RelayTransport, SessionStore, SettingsReader};
use crate::whitelist::Whitelist;

/// Settings key for the relay-mode flag.
pub const RELAY_MODE_KEY: &str = "relay_mode";

/// Session key holding the requesting peer's identifier.
pub const REQUESTING_PEER_KEY: &str = "requesting_peer";

/// Filename used for direct-save delivery.
pub const EXPORT_FILENAME: &str = "amazon_order_history.csv";

/// How an export left (or failed to leave) the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// Saved to the file sink under [`EXPORT_FILENAME`]
    Saved { filename: &'static str },
    /// Relayed to exactly one whitelisted peer
    Relayed { peer: String },
    /// Broadcast to the whole whitelist (best effort)
    Broadcast { sent: usize, failed: usize },
    /// Delivered to nobody
    Withheld(WithholdReason),
}

/// Why a relay-mode export was delivered to nobody.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WithholdReason {
    /// The requesting peer identifier is not on the whitelist.
    ///
    /// Treated as a security event: the stored identifier may have been
    /// tampered with to impersonate an authorized peer.
    UnlistedPeer { peer: String },
    /// The session store failed while reading the peer identifier
    SessionUnavailable,
    /// The relay send to the requesting peer failed
    SendFailed { peer: String },
}

/// Chooses between direct file delivery and whitelisted message relay.
///
/// The relay path is best-effort: collaborator failures there are logged and
/// folded into the returned [`DeliveryOutcome`] rather than propagated. The
/// save path has no fallback, so its failures surface to the caller.
pub struct DeliverySelector<'a> {
    settings: &'a dyn SettingsReader,
    session: &'a dyn SessionStore,
    transport: &'a dyn RelayTransport,
    sink: &'a dyn FileSink,
    whitelist: Whitelist,
}

impl<'a> DeliverySelector<'a> {
    /// Create a selector over the given collaborators and whitelist
    pub fn new(
        settings: &'a dyn SettingsReader,
        session: &'a dyn SessionStore,
        transport: &'a dyn RelayTransport,
        sink: &'a dyn FileSink,
        whitelist: Whitelist,
    ) -> Self {
        Self {
            settings,
            session,
            transport,
            sink,
            whitelist,
        }
    }

    /// The injected whitelist
    pub fn whitelist(&self) -> &Whitelist {
        &self.whitelist
    }

    /// Deliver CSV text via the configured channel.
    ///
    /// Reads the relay-mode flag; when unset or unreadable the export is
    /// saved to the file sink. In relay mode the requesting peer decides the
    /// destination: a whitelisted peer receives the payload alone, an
    /// unlisted peer withholds delivery, and an absent peer identifier falls
    /// back to broadcasting to every whitelist member.
    ///
    /// # Errors
    ///
    /// Only save-path failures return an error; every relay-path failure is
    /// logged and reported through the outcome.
    pub async fn deliver(&self, csv_text: &str) -> Result<DeliveryOutcome, DeliveryError> {
        let relay_mode = match self.settings.get_bool(RELAY_MODE_KEY).await {
            Ok(flag) => flag.unwrap_or(false),
            Err(err) => {
                tracing::debug!(error = %err, "relay-mode flag unreadable, falling back to save");
                false
            }
        };

        if !relay_mode {
            self.sink.save(csv_text, EXPORT_FILENAME).await?;
            return Ok(DeliveryOutcome::Saved {
                filename: EXPORT_FILENAME,
            });
        }

        Ok(self.relay(csv_text).await)
    }

    /// Relay-mode delivery: single peer, broadcast fallback, or withhold.
    async fn relay(&self, csv_text: &str) -> DeliveryOutcome {
        let peer = match self.session.get(REQUESTING_PEER_KEY).await {
            Ok(peer) => peer,
            Err(err) => {
                tracing::error!(error = %err, "failed to read requesting peer identifier");
                return DeliveryOutcome::Withheld(WithholdReason::SessionUnavailable);
            }
        };

        match peer {
            Some(peer) if self.whitelist.contains(&peer) => {
                match self.transport.send(csv_text, &peer).await {
                    Ok(()) => {
                        tracing::info!(%peer, "relayed export to requesting peer");
                        DeliveryOutcome::Relayed { peer }
                    }
                    Err(err) => {
                        tracing::error!(%peer, error = %err, "relay send failed");
                        DeliveryOutcome::Withheld(WithholdReason::SendFailed { peer })
                    }
                }
            }
            Some(peer) => {
                tracing::warn!(
                    %peer,
                    "data not sent: requesting peer is not on the whitelist"
                );
                DeliveryOutcome::Withheld(WithholdReason::UnlistedPeer { peer })
            }
            None => {
                tracing::warn!("no requesting peer identifier, broadcasting to whitelist");
                let mut sent = 0;
                let mut failed = 0;
                for peer in self.whitelist.iter() {
                    match self.transport.send(csv_text, peer).await {
                        Ok(()) => sent += 1,
                        Err(err) => {
                            tracing::error!(%peer, error = %err, "broadcast send failed");
                            failed += 1;
                        }
                    }
                }
                DeliveryOutcome::Broadcast { sent, failed }
            }
        }
    }
}
