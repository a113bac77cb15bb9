//! Nachrichten-Verschluesselung (AES-256-GCM)
//!
//! Verschluesselt den UTF-8-Text einer Nachricht unter einem symmetrischen
//! Schluessel. Pro Aufruf wird eine frische 96-Bit-Zufallsnonce aus dem
//! OS-Zufallsgenerator gezogen; eine Nonce darf unter demselben Schluessel
//! nie wiederverwendet werden.
//!
//! ## Format
//! ```text
//! [nonce(12)] [ciphertext + auth_tag(16)]
//! ```

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Key, Nonce,
};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::{CryptoError, CryptoResult};
use crate::types::{CipherKey, EncryptedMessage, NONCE_LEN};

/// Verschluesselt eine Textnachricht unter einem Session- oder Gruppen-Schluessel
pub fn encrypt_message(key: &CipherKey, plaintext: &str) -> CryptoResult<EncryptedMessage> {
    let mut nonce_bytes = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce_bytes);

    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext.as_bytes())
        .map_err(|e| CryptoError::Verschluesselung(e.to_string()))?;

    Ok(EncryptedMessage {
        nonce: nonce_bytes,
        ciphertext,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
