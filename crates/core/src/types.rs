//! Gemeinsame Identifikationstypen fuer Stillepost
//!
//! Alle IDs verwenden das Newtype-Pattern um Verwechslungen zwischen
//! verschiedenen ID-Arten zur Compilezeit auszuschliessen.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Eindeutige Peer-ID
///
/// Identifiziert einen Teilnehmer im Netz. In einem serverlosen Netz gibt
/// es keine zentrale Vergabestelle; jeder Client erzeugt seine ID selbst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeerId(pub Uuid);

impl PeerId {
    /// Erstellt eine neue zufaellige PeerId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Gibt die innere UUID zurueck
    pub fn inner(&self) -> Uuid {
        self.0
    }
}

impl Default for PeerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PeerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "peer:{}", self.0)
    }
}

/// Eindeutige Raum-ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(pub Uuid);

impl RoomId {
    /// Erstellt eine neue zufaellige RoomId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Gibt die innere UUID zurueck
    pub fn inner(&self) -> Uuid {
        self.0
    }
}

impl Default for RoomId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "room:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peer_id_eindeutig() {
        let a = PeerId::new();
        let b = PeerId::new();
        assert_ne!(a, b, "Zwei neue PeerIds muessen verschieden sein");
    }

    #[test]
    fn room_id_eindeutig() {
        let a = RoomId::new();
        let b = RoomId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn peer_id_display() {
        let id = PeerId(Uuid::nil());
        assert!(id.to_string().starts_with("peer:"));
    }

    #[test]
    fn ids_sind_serde_kompatibel() {
        let pid = PeerId::new();
        let json = serde_json::to_string(&pid).unwrap();
        let pid2: PeerId = serde_json::from_str(&json).unwrap();
        assert_eq!(pid, pid2);
    }
}
