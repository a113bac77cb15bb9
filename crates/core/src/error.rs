//! Fehlertypen fuer Stillepost
//!
//! Zentraler Fehler-Enum der alle moeglichen Fehlerzustaende abdeckt.
//! Untermodule koennen eigene Fehler definieren und via `#[from]` konvertieren.

use thiserror::Error;

/// Globaler Result-Alias fuer Stillepost
pub type Result<T> = std::result::Result<T, StillepostError>;

/// Alle moeglichen Fehler im Stillepost-System
#[derive(Debug, Error)]
pub enum StillepostError {
    // --- Verbindung & Netzwerk ---
    #[error("Verbindung fehlgeschlagen: {0}")]
    Verbindung(String),

    #[error("Verbindung getrennt: {0}")]
    Getrennt(String),

    #[error("Zeitlimit ueberschritten: {0}")]
    Zeitlimit(String),

    // --- Protokoll ---
    #[error("Ungueltige Nachricht: {0}")]
    UngueltigeNachricht(String),

    #[error("Protokollversion nicht unterstuetzt: erwartet={erwartet}, erhalten={erhalten}")]
    ProtokollVersion { erwartet: u16, erhalten: u16 },

    // --- Ressourcen ---
    #[error("Raum nicht gefunden: {0}")]
    RaumNichtGefunden(String),

    #[error("Peer nicht gefunden: {0}")]
    PeerNichtGefunden(String),

    // --- Kryptografie ---
    // Entschluesselungsfehler sind ein Sicherheitsereignis (moegliche
    // Manipulation oder desynchronisierte Schluessel) und muessen dem
    // Benutzer als Vertrauenswarnung angezeigt werden, nie stumm verworfen.
    #[error("Kryptografie-Fehler: {0}")]
    Krypto(String),

    // --- Konfiguration ---
    #[error("Konfigurationsfehler: {0}")]
    Konfiguration(String),

    // --- Intern ---
    #[error("Interner Fehler: {0}")]
    Intern(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl StillepostError {
    /// Erstellt einen internen Fehler aus einer beliebigen Nachricht
    pub fn intern(msg: impl Into<String>) -> Self {
        Self::Intern(msg.into())
    }

    /// Gibt true zurueck wenn der Fehler wiederholbar sein koennte
    ///
    /// Kryptografie-Fehler sind nie wiederholbar: ein fehlgeschlagener
    /// Auth-Tag wird durch einen zweiten Versuch nicht gueltig.
    pub fn ist_wiederholbar(&self) -> bool {
        matches!(
            self,
            Self::Zeitlimit(_) | Self::Verbindung(_) | Self::Getrennt(_)
        )
    }
}
