//! Peer whitelist

/// The set of peer identifiers authorized to receive relayed exports.
///
/// Supplied by the embedding application and injected into
/// [`crate::DeliverySelector`]; never mutated during an export. Order is
/// preserved so broadcast delivery is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Whitelist {
    peers: Vec<String>,
}

impl Whitelist {
    /// Create a whitelist from peer identifiers
    pub fn new<I, S>(peers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            peers: peers.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the given peer identifier is authorized
    pub fn contains(&self, peer: &str) -> bool {
        self.peers.iter().any(|p| p == peer)
    }

    /// Iterate over the authorized peers in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.peers.iter().map(String::as_str)
    }

    /// Number of authorized peers
    pub fn len(&self) -> usize {
        self.peers.len()
    }

    /// Whether the whitelist is empty
    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Whitelist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
