//! Session-Schluessel-Tabelle (ein Schluessel pro Peer)
//!
//! Jeder Session-Schluessel ist nur ueber seine Peer-ID erreichbar.
//! Erneutes Einfuegen fuer dieselbe Peer-ID ersetzt den alten Schluessel
//! vollstaendig (Re-Key), es wird nie gemischt. Gleichzeitige Ableitungen
//! fuer verschiedene Peers laufen unabhaengig; Schreibzugriffe auf
//! denselben Eintrag serialisiert die DashMap, sodass Leser nie einen
//! halb-aktualisierten Eintrag sehen.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use stillepost_core::PeerId;

use crate::error::{CryptoError, CryptoResult};
use crate::types::CipherKey;

/// Tabelle der Session-Schluessel aller aktiven Peer-Sessions
#[derive(Debug, Default)]
pub struct SessionKeyTable {
    keys: DashMap<PeerId, Arc<CipherKey>>,
}

impl SessionKeyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hinterlegt den Session-Schluessel fuer einen Peer
    ///
    /// Ein vorhandener Schluessel wird ersetzt. Laufende Entschluesselungen,
    /// die den alten `Arc` halten, beenden ihre Arbeit mit dem alten
    /// Schluessel; neue Zugriffe sehen nur noch den neuen.
    pub fn insert(&self, peer: PeerId, key: CipherKey) {
        let ersetzt = self.keys.insert(peer, Arc::new(key)).is_some();
        debug!(%peer, ersetzt, "Session-Schluessel hinterlegt");
    }

    /// Gibt den Session-Schluessel fuer einen Peer zurueck
    pub fn get(&self, peer: &PeerId) -> CryptoResult<Arc<CipherKey>> {
        self.keys
            .get(peer)
            .map(|entry| Arc::clone(&*entry))
            .ok_or(CryptoError::KeinSchluessel { peer: *peer })
    }

    /// Entfernt den Session-Schluessel eines Peers (Session-Ende)
    pub fn remove(&self, peer: &PeerId) {
        if self.keys.remove(peer).is_some() {
            debug!(%peer, "Session-Schluessel entfernt");
        }
    }

    /// Prueft ob fuer einen Peer ein Session-Schluessel existiert
    pub fn contains(&self, peer: &PeerId) -> bool {
        self.keys.contains_key(peer)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
