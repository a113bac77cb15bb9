//! Langzeit-Identitaetsschluessel (P-256, nur Key Agreement)
//!
//! Jeder Teilnehmer erzeugt einmalig ein P-256-Schluessel-Paar. Der
//! oeffentliche Schluessel wird ueber den Transport an die Peers verteilt,
//! der private Schluessel verbleibt im Prozess und wird nie exportiert.
//!
//! Die Schluessel koennen ausschliesslich fuer ECDH verwendet werden;
//! Signieren ist bewusst nicht moeglich. Identitaets-Pruefung laeuft
//! stattdessen manuell ueber den Fingerprint (siehe [`crate::fingerprint`]).

use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::{PublicKey, SecretKey};
use rand::rngs::OsRng;
use tracing::debug;

use crate::error::{CryptoError, CryptoResult};
use crate::types::PUBLIC_KEY_LEN;

/// Oeffentlicher Agreement-Schluessel eines Teilnehmers
///
/// Entsteht entweder lokal (aus dem eigenen Schluessel-Paar) oder durch
/// Import der Rohbytes eines Peers. Importierte Bytes sind nicht
/// vertrauenswuerdig und werden beim Import vollstaendig validiert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgreementPublicKey(PublicKey);

impl AgreementPublicKey {
    /// Exportiert den Schluessel als SEC1-unkomprimierten Punkt (65 Bytes),
    /// geeignet fuer die Uebertragung an Peers.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LEN] {
        let point = self.0.to_encoded_point(false);
        let mut out = [0u8; PUBLIC_KEY_LEN];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// Importiert einen oeffentlichen Schluessel aus Rohbytes.
    ///
    /// Schlaegt fehl bei falscher Laenge, falschem Format-Marker oder wenn
    /// der Punkt nicht auf der Kurve liegt. Ein Import-Fehler bricht den
    /// Session-Aufbau mit diesem Peer ab; es gibt keinen unverschluesselten
    /// Fallback.
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() != PUBLIC_KEY_LEN {
            return Err(CryptoError::SchluesselImport(format!(
                "ungueltige Laenge: erwartet {}, erhalten {}",
                PUBLIC_KEY_LEN,
                bytes.len()
            )));
        }
        let key = PublicKey::from_sec1_bytes(bytes)
            .map_err(|e| CryptoError::SchluesselImport(e.to_string()))?;
        Ok(Self(key))
    }

    pub(crate) fn inner(&self) -> &PublicKey {
        &self.0
    }
}

/// Langzeit-Identitaet eines Teilnehmers (P-256-Schluessel-Paar)
pub struct IdentityKeyPair {
    secret: SecretKey,
    public: AgreementPublicKey,
}

impl IdentityKeyPair {
    /// Generiert ein neues P-256-Schluessel-Paar aus dem OS-Zufallsgenerator
    pub fn generate() -> CryptoResult<Self> {
        let secret = SecretKey::random(&mut OsRng);
        let public = AgreementPublicKey(secret.public_key());
        debug!("Neues Identitaets-Schluesselpaar erzeugt");
        Ok(Self { secret, public })
    }

    /// Gibt den oeffentlichen Schluessel zurueck
    pub fn public_key(&self) -> &AgreementPublicKey {
        &self.public
    }

    pub(crate) fn secret(&self) -> &SecretKey {
        &self.secret
    }
}

impl std::fmt::Debug for IdentityKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IdentityKeyPair {{ public: {:?}, secret: [REDACTED] }}", self.public)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
