//! # stillepost-crypto
//!
//! E2E-Verschluesselungs-Kern fuer Stillepost.
//!
//! Stellt den Session-Layer eines serverlosen Chat-Clients bereit:
//! Schluessel-Vereinbarung pro Peer (P-256 ECDH + HKDF-SHA256),
//! authentifizierte Nachrichten-Verschluesselung (AES-256-GCM), einen
//! geteilten Gruppen-Schluessel fuer Broadcasts und Fingerprints fuer die
//! manuelle Identitaets-Pruefung. Transport, Raum-Verwaltung und UI sind
//! externe Mitspieler: sie liefern Bytes an und holen Bytes ab.
//!
//! ## Module
//! - `e2e` - Key Agreement, Session-Tabelle, Nachrichten- und Gruppen-Krypto
//! - `identity` - P-256 Langzeit-Identitaetsschluessel
//! - `fingerprint` - Kurz-Fingerprint fuer den Out-of-band-Vergleich
//! - `types` - Gemeinsame Typen und Protokoll-Konstanten
//! - `error` - Fehlertypen

pub mod e2e;
pub mod error;
pub mod fingerprint;
pub mod identity;
pub mod types;

// Bequeme Re-Exports
pub use error::{CryptoError, CryptoResult};
pub use fingerprint::compute_fingerprint;
pub use identity::{AgreementPublicKey, IdentityKeyPair};
pub use types::{
    CipherKey, EncryptedMessage, SecretBytes, SharedSecret, FINGERPRINT_BYTES, HKDF_CONTEXT,
    KEY_LEN, NONCE_LEN, PUBLIC_KEY_LEN, TAG_LEN,
};

pub use e2e::{
    create_group_key, decrypt_message, decrypt_message_bytes, derive_session_key,
    derive_shared_secret, distribute_group_key, encrypt_message, export_group_key,
    import_group_key, receive_group_key, SessionKeyTable,
};
