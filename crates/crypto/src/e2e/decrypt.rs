//! Nachrichten-Entschluesselung (AES-256-GCM)
//!
//! Entschluesselung ist alles-oder-nichts: schlaegt die Tag-Pruefung fehl
//! oder ist der Klartext kein gueltiges UTF-8, gibt es keinen Teil-Klartext.
//! Ein Fehlschlag deutet auf Manipulation, einen falschen Schluessel oder
//! eine korrupte Nonce hin und wird als Sicherheitsereignis geloggt.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Key, Nonce,
};
use tracing::warn;

use crate::error::{CryptoError, CryptoResult};
use crate::types::{CipherKey, EncryptedMessage};

/// Entschluesselt eine Nachricht und verifiziert dabei den Auth-Tag
pub fn decrypt_message(key: &CipherKey, message: &EncryptedMessage) -> CryptoResult<String> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));
    let nonce = Nonce::from_slice(&message.nonce);

    let plaintext = cipher
        .decrypt(nonce, message.ciphertext.as_slice())
        .map_err(|e| {
            warn!("Entschluesselung fehlgeschlagen: Auth-Tag ungueltig");
            CryptoError::Entschluesselung(e.to_string())
        })?;

    String::from_utf8(plaintext)
        .map_err(|e| CryptoError::Entschluesselung(format!("kein gueltiges UTF-8: {e}")))
}

/// Entschluesselt rohe Bytes (ohne EncryptedMessage-Wrapper)
///
/// Nuetzlich wenn die Bytes direkt vom Transport kommen.
pub fn decrypt_message_bytes(key: &CipherKey, data: &[u8]) -> CryptoResult<String> {
    let message = EncryptedMessage::from_bytes(data)
        .ok_or_else(|| CryptoError::UngueltigeDaten("Zu kurze Nachricht".to_string()))?;
    decrypt_message(key, &message)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
