//! Gemeinsame Typen und Konstanten fuer das Kryptografie-Subsystem
//!
//! Die Algorithmus-Wahl ist bewusst fest verdrahtet (P-256, HKDF-SHA256,
//! AES-256-GCM): alle Implementierungen des Protokolls muessen dieselben
//! Parameter verwenden, sonst sind die abgeleiteten Schluessel nicht
//! kompatibel. Es gibt keine Laufzeit-Konfiguration.

use zeroize::Zeroize;

use crate::error::{CryptoError, CryptoResult};

/// Laenge eines exportierten oeffentlichen Schluessels:
/// SEC1-unkomprimierter P-256-Punkt (1 Byte Marker + 2x 32 Byte Koordinaten)
pub const PUBLIC_KEY_LEN: usize = 65;

/// Laenge symmetrischer Schluessel (AES-256-GCM)
pub const KEY_LEN: usize = 32;

/// Laenge der AEAD-Nonce (96 Bit)
pub const NONCE_LEN: usize = 12;

/// Laenge des GCM-Auth-Tags (an den Ciphertext angehaengt)
pub const TAG_LEN: usize = 16;

/// HKDF-Kontext-String. Bindet abgeleitete Session-Schluessel an dieses
/// Protokoll und muss in allen Implementierungen identisch sein.
pub const HKDF_CONTEXT: &[u8] = b"chat-e2ee";

/// Anzahl Digest-Bytes im Fingerprint (ergibt 16 Hex-Zeichen)
pub const FINGERPRINT_BYTES: usize = 8;

/// Sicherer Schluessel-Container (wird beim Drop genullt)
#[derive(Clone)]
pub struct SecretBytes(Vec<u8>);

impl Drop for SecretBytes {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl std::fmt::Debug for SecretBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretBytes([REDACTED] {} bytes)", self.0.len())
    }
}

impl SecretBytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Symmetrischer AEAD-Schluessel (AES-256-GCM)
///
/// Ein Handle fuer genau eine Faehigkeit: Nachrichten ver- und
/// entschluesseln. Session-Schluessel (pro Peer) und Gruppen-Schluessel
/// (pro Raum) teilen sich diesen Typ, weil beide denselben Cipher-Vertrag
/// erfuellen. Die Rohbytes verlassen das Crate nur ueber den Gruppen-Export.
#[derive(Debug, Clone)]
pub struct CipherKey(SecretBytes);

impl CipherKey {
    /// Erstellt einen Schluessel aus genau [`KEY_LEN`] Bytes.
    /// Nur crate-intern: Aufrufer gehen ueber Ableitung oder Import.
    pub(crate) fn from_secret(secret: SecretBytes) -> Self {
        debug_assert_eq!(secret.len(), KEY_LEN);
        Self(secret)
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

/// Verschluesselte Nachricht (Nonce + Ciphertext inkl. Auth-Tag)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedMessage {
    /// Frische 96-Bit-Zufallsnonce, pro Verschluesselung neu erzeugt
    pub nonce: [u8; NONCE_LEN],
    /// Verschluesselter Inhalt inkl. 16 Bytes Auth-Tag (angehaengt)
    pub ciphertext: Vec<u8>,
}

impl EncryptedMessage {
    /// Serialisiert zu Bytes: [nonce(12)] + [ciphertext + tag]
    ///
    /// Die Framing-Entscheidung (laengen-praefixiert oder fester Offset)
    /// liegt beim Transport; dies ist die feste-Offset-Variante.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(NONCE_LEN + self.ciphertext.len());
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Deserialisiert aus Bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < NONCE_LEN + TAG_LEN {
            return None;
        }
        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(&bytes[0..NONCE_LEN]);
        let ciphertext = bytes[NONCE_LEN..].to_vec();
        Some(Self { nonce, ciphertext })
    }
}

/// Ephemeres Ergebnis des ECDH-Schluesselaustauschs (32 Bytes)
///
/// Wird sofort von der Schluessel-Ableitung konsumiert, nie persistiert
/// und beim Drop genullt.
#[derive(Debug)]
pub struct SharedSecret(SecretBytes);

impl SharedSecret {
    pub(crate) fn new(bytes: Vec<u8>) -> CryptoResult<Self> {
        if bytes.len() != KEY_LEN {
            return Err(CryptoError::Ableitung(format!(
                "Shared Secret hat {} Bytes, erwartet {}",
                bytes.len(),
                KEY_LEN
            )));
        }
        Ok(Self(SecretBytes::new(bytes)))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
