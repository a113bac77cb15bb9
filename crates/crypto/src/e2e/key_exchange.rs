//! P-256 Diffie-Hellman Key Agreement + Session-Schluessel-Ableitung
//!
//! Beide Seiten berechnen aus (eigener privater Schluessel, fremder
//! oeffentlicher Schluessel) dasselbe Shared Secret, ohne dass es je
//! uebertragen wird. Daraus wird per HKDF-SHA256 mit einem pro Session
//! vereinbarten Salt der symmetrische Session-Schluessel abgeleitet.
//!
//! Das Salt muss auf beiden Seiten identisch sein, sonst passen die
//! abgeleiteten Schluessel nicht zusammen. Verschiedene Salts ueber
//! demselben Shared Secret ergeben garantiert verschiedene Schluessel.

use hkdf::Hkdf;
use sha2::Sha256;
use tracing::debug;
use zeroize::Zeroize;

use crate::error::{CryptoError, CryptoResult};
use crate::identity::{AgreementPublicKey, IdentityKeyPair};
use crate::types::{CipherKey, SecretBytes, SharedSecret, HKDF_CONTEXT, KEY_LEN};

/// Fuehrt den ECDH-Austausch mit dem oeffentlichen Schluessel eines Peers durch
///
/// Symmetrie-Eigenschaft: `derive_shared_secret(a, b.public)` und
/// `derive_shared_secret(b, a.public)` liefern byte-identische Secrets.
pub fn derive_shared_secret(
    local: &IdentityKeyPair,
    peer_public_key: &AgreementPublicKey,
) -> CryptoResult<SharedSecret> {
    let shared = p256::ecdh::diffie_hellman(
        local.secret().to_nonzero_scalar(),
        peer_public_key.inner().as_affine(),
    );
    SharedSecret::new(shared.raw_secret_bytes().as_slice().to_vec())
}

/// Leitet aus Shared Secret und Salt den Session-Schluessel ab
///
/// HKDF-SHA256 mit dem festen Kontext-String [`HKDF_CONTEXT`]; der Kontext
/// bindet den Schluessel an dieses Protokoll und verhindert
/// Cross-Protocol-Wiederverwendung.
pub fn derive_session_key(
    shared_secret: &SharedSecret,
    salt: &[u8],
) -> CryptoResult<CipherKey> {
    let hk = Hkdf::<Sha256>::new(Some(salt), shared_secret.as_bytes());

    let mut okm = [0u8; KEY_LEN];
    hk.expand(HKDF_CONTEXT, &mut okm)
        .map_err(|e| CryptoError::Ableitung(e.to_string()))?;

    let key = CipherKey::from_secret(SecretBytes::new(okm.to_vec()));
    okm.zeroize();
    debug!("Session-Schluessel abgeleitet");
    Ok(key)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::e2e::decrypt::decrypt_message;
    use crate::e2e::encrypt::encrypt_message;

    #[test]
    fn key_agreement_ist_symmetrisch() {
        let alice = IdentityKeyPair::generate().unwrap();
        let bob = IdentityKeyPair::generate().unwrap();

        let secret_alice = derive_shared_secret(&alice, bob.public_key()).unwrap();
        let secret_bob = derive_shared_secret(&bob, alice.public_key()).unwrap();

        // Beide Seiten muessen dasselbe Secret berechnen
        assert_eq!(secret_alice.as_bytes(), secret_bob.as_bytes());
    }

    #[test]
    fn verschiedene_paare_ergeben_verschiedene_secrets() {
        let alice = IdentityKeyPair::generate().unwrap();
        let bob = IdentityKeyPair::generate().unwrap();
        let carol = IdentityKeyPair::generate().unwrap();

        let ab = derive_shared_secret(&alice, bob.public_key()).unwrap();
        let ac = derive_shared_secret(&alice, carol.public_key()).unwrap();
        assert_ne!(ab.as_bytes(), ac.as_bytes());
    }

    #[test]
    fn importierter_schluessel_liefert_dasselbe_secret() {
        let alice = IdentityKeyPair::generate().unwrap();
        let bob = IdentityKeyPair::generate().unwrap();

        let direkt = derive_shared_secret(&alice, bob.public_key()).unwrap();

        let importiert =
            AgreementPublicKey::from_bytes(&bob.public_key().to_bytes()).unwrap();
        let ueber_import = derive_shared_secret(&alice, &importiert).unwrap();

        assert_eq!(direkt.as_bytes(), ueber_import.as_bytes());
    }

    #[test]
    fn ableitung_ist_deterministisch() {
        let alice = IdentityKeyPair::generate().unwrap();
        let bob = IdentityKeyPair::generate().unwrap();
        let secret = derive_shared_secret(&alice, bob.public_key()).unwrap();

        let k1 = derive_session_key(&secret, b"salt-0123456789a").unwrap();
        let k2 = derive_session_key(&secret, b"salt-0123456789a").unwrap();
        assert_eq!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn verschiedene_salts_ergeben_verschiedene_schluessel() {
        let alice = IdentityKeyPair::generate().unwrap();
        let bob = IdentityKeyPair::generate().unwrap();
        let secret = derive_shared_secret(&alice, bob.public_key()).unwrap();

        let k1 = derive_session_key(&secret, b"session-salt-1").unwrap();
        let k2 = derive_session_key(&secret, b"session-salt-2").unwrap();
        assert_ne!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn alice_und_bob_komplett_szenario() {
        // Alice und Bob tauschen exportierte oeffentliche Schluessel und
        // ein festes 16-Byte-Salt aus, leiten unabhaengig Session-Schluessel
        // ab und koennen gegenseitig entschluesseln.
        let salt: [u8; 16] = *b"0123456789abcdef";

        let alice = IdentityKeyPair::generate().unwrap();
        let bob = IdentityKeyPair::generate().unwrap();

        let alice_pub = AgreementPublicKey::from_bytes(&alice.public_key().to_bytes()).unwrap();
        let bob_pub = AgreementPublicKey::from_bytes(&bob.public_key().to_bytes()).unwrap();

        let key_alice =
            derive_session_key(&derive_shared_secret(&alice, &bob_pub).unwrap(), &salt).unwrap();
        let key_bob =
            derive_session_key(&derive_shared_secret(&bob, &alice_pub).unwrap(), &salt).unwrap();

        let encrypted = encrypt_message(&key_alice, "hello").unwrap();
        let decrypted = decrypt_message(&key_bob, &encrypted).unwrap();
        assert_eq!(decrypted, "hello");
    }

    #[test]
    fn abweichendes_salt_bricht_die_session() {
        let alice = IdentityKeyPair::generate().unwrap();
        let bob = IdentityKeyPair::generate().unwrap();

        let key_alice = derive_session_key(
            &derive_shared_secret(&alice, bob.public_key()).unwrap(),
            b"salt-alice",
        )
        .unwrap();
        let key_bob = derive_session_key(
            &derive_shared_secret(&bob, alice.public_key()).unwrap(),
            b"salt-bob",
        )
        .unwrap();

        let encrypted = encrypt_message(&key_alice, "hello").unwrap();
        assert!(decrypt_message(&key_bob, &encrypted).is_err());
    }
}
