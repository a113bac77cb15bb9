//! Fingerprint-Berechnung fuer die manuelle Identitaets-Pruefung
//!
//! In einem serverlosen Netz gibt es keine Zertifikats-Autoritaet. Zwei
//! Teilnehmer vergleichen stattdessen out-of-band (vorlesen, abgleichen)
//! einen kurzen Fingerprint des oeffentlichen Schluessels, bevor sie der
//! Session vertrauen.

use sha2::{Digest, Sha256};

use crate::identity::AgreementPublicKey;
use crate::types::FINGERPRINT_BYTES;

/// Berechnet den Fingerprint eines oeffentlichen Schluessels
///
/// SHA-256 ueber die exportierten Rohbytes, davon die ersten 8 Bytes als
/// 16 Hex-Grossbuchstaben ohne Trennzeichen. Deterministisch: derselbe
/// Schluessel ergibt immer denselben Fingerprint.
pub fn compute_fingerprint(public_key: &AgreementPublicKey) -> String {
    let hash = Sha256::digest(public_key.to_bytes());
    hash[..FINGERPRINT_BYTES]
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::IdentityKeyPair;

    #[test]
    fn fingerprint_format() {
        let pair = IdentityKeyPair::generate().unwrap();
        let fp = compute_fingerprint(pair.public_key());

        assert_eq!(fp.len(), 16);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(fp, fp.to_uppercase());
    }

    #[test]
    fn fingerprint_ist_deterministisch() {
        let pair = IdentityKeyPair::generate().unwrap();
        let fp1 = compute_fingerprint(pair.public_key());
        let fp2 = compute_fingerprint(pair.public_key());
        assert_eq!(fp1, fp2);
    }

    #[test]
    fn verschiedene_schluessel_verschiedene_fingerprints() {
        let a = IdentityKeyPair::generate().unwrap();
        let b = IdentityKeyPair::generate().unwrap();
        assert_ne!(
            compute_fingerprint(a.public_key()),
            compute_fingerprint(b.public_key())
        );
    }

    #[test]
    fn importierter_schluessel_gleicher_fingerprint() {
        // Beide Seiten sehen denselben Fingerprint, egal ob der Schluessel
        // lokal erzeugt oder aus Rohbytes importiert wurde
        let pair = IdentityKeyPair::generate().unwrap();
        let imported =
            crate::identity::AgreementPublicKey::from_bytes(&pair.public_key().to_bytes())
                .unwrap();

        assert_eq!(
            compute_fingerprint(pair.public_key()),
            compute_fingerprint(&imported)
        );
    }
}
