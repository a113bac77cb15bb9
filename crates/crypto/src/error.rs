//! Fehlertypen fuer das Kryptografie-Subsystem
//!
//! Kein Fehler wird intern wiederholt: kryptografische Fehlschlaege sind
//! nicht transient. Alle Operationen reichen Fehler an den Aufrufer durch.

use stillepost_core::PeerId;
use thiserror::Error;

/// Fehler im Kryptografie-Subsystem
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Schluessel-Generierung fehlgeschlagen: {0}")]
    SchluesselGenerierung(String),

    #[error("Schluessel-Import fehlgeschlagen: {0}")]
    SchluesselImport(String),

    #[error("Schluessel-Ableitung fehlgeschlagen: {0}")]
    Ableitung(String),

    #[error("Verschluesselung fehlgeschlagen: {0}")]
    Verschluesselung(String),

    // Ein Entschluesselungs-Fehler bedeutet: manipulierter Ciphertext,
    // falscher Schluessel oder korrupte Nonce. Der Aufrufer muss das als
    // Sicherheitsereignis behandeln, nicht als normalen Datenfehler.
    #[error("Entschluesselung fehlgeschlagen: {0}")]
    Entschluesselung(String),

    #[error("Gruppenschluessel-Import fehlgeschlagen: erwartet {erwartet} Bytes, erhalten {erhalten}")]
    GruppenSchluesselImport { erwartet: usize, erhalten: usize },

    #[error("Kein Session-Schluessel fuer {peer}")]
    KeinSchluessel { peer: PeerId },

    #[error("Ungueltige Daten: {0}")]
    UngueltigeDaten(String),

    #[error("Base64-Dekodierung fehlgeschlagen: {0}")]
    Base64(#[from] base64::DecodeError),
}

pub type CryptoResult<T> = Result<T, CryptoError>;
