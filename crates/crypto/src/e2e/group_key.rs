//! Gruppen-Schluessel fuer Broadcast-Nachrichten
//!
//! Ein Raum-Mitglied erzeugt den Schluessel und verteilt die exportierten
//! Rohbytes an alle anderen Mitglieder; jedes importiert sie unabhaengig in
//! ein gleichwertiges Handle. Die Vertraulichkeit der Verteilung kommt vom
//! jeweiligen Session-Kanal: der exportierte Schluessel reist als normale
//! verschluesselte Direktnachricht.
//!
//! Ein importierter Gruppen-Schluessel nutzt dieselben Cipher-Operationen
//! wie ein Session-Schluessel ([`crate::e2e::encrypt_message`] /
//! [`crate::e2e::decrypt_message`]).

use std::collections::HashMap;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::debug;
use zeroize::Zeroize;

use stillepost_core::PeerId;

use crate::e2e::decrypt::decrypt_message;
use crate::e2e::encrypt::encrypt_message;
use crate::e2e::session_table::SessionKeyTable;
use crate::error::{CryptoError, CryptoResult};
use crate::types::{CipherKey, EncryptedMessage, SecretBytes, KEY_LEN};

/// Erzeugt einen neuen Gruppen-Schluessel (unabhaengig von jedem Key Agreement)
pub fn create_group_key() -> CryptoResult<CipherKey> {
    let mut key_bytes = vec![0u8; KEY_LEN];
    OsRng.fill_bytes(&mut key_bytes);
    Ok(CipherKey::from_secret(SecretBytes::new(key_bytes)))
}

/// Exportiert den Gruppen-Schluessel als rohe 32 Bytes (fuer die Verteilung)
pub fn export_group_key(key: &CipherKey) -> [u8; KEY_LEN] {
    let mut out = [0u8; KEY_LEN];
    out.copy_from_slice(key.as_bytes());
    out
}

/// Importiert einen Gruppen-Schluessel aus rohen Bytes
pub fn import_group_key(bytes: &[u8]) -> CryptoResult<CipherKey> {
    if bytes.len() != KEY_LEN {
        return Err(CryptoError::GruppenSchluesselImport {
            erwartet: KEY_LEN,
            erhalten: bytes.len(),
        });
    }
    Ok(CipherKey::from_secret(SecretBytes::new(bytes.to_vec())))
}

/// Verpackt den Gruppen-Schluessel fuer eine Liste von Empfaengern
///
/// Der exportierte Schluessel wird Base64-kodiert und unter dem jeweiligen
/// Session-Schluessel verschluesselt. Fehlt fuer einen Empfaenger der
/// Session-Schluessel, bricht die Verteilung ab.
pub fn distribute_group_key(
    group_key: &CipherKey,
    sessions: &SessionKeyTable,
    recipients: &[PeerId],
) -> CryptoResult<HashMap<PeerId, EncryptedMessage>> {
    let encoded = BASE64.encode(export_group_key(group_key));

    let mut result = HashMap::new();
    for peer in recipients {
        let session_key = sessions.get(peer)?;
        let message = encrypt_message(&session_key, &encoded)?;
        result.insert(*peer, message);
    }

    debug!(empfaenger = recipients.len(), "Gruppen-Schluessel verteilt");
    Ok(result)
}

/// Entpackt einen ueber den Session-Kanal empfangenen Gruppen-Schluessel
pub fn receive_group_key(
    session_key: &CipherKey,
    message: &EncryptedMessage,
) -> CryptoResult<CipherKey> {
    let encoded = decrypt_message(session_key, message)?;
    let mut key_bytes = BASE64.decode(encoded.as_bytes())?;

    let key = import_group_key(&key_bytes);
    key_bytes.zeroize();
    key
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
