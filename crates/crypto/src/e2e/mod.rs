//! E2E Verschluesselung (End-to-End)
//!
//! Client <-> Client Verschluesselung. Der Transport forwardet Pakete blind
//! und kann den Nachrichten-Inhalt nicht entschluesseln.
//!
//! ## Ablauf
//! 1. Jeder Teilnehmer erzeugt ein P-256-Identitaets-Schluesselpaar
//! 2. Oeffentliche Schluessel werden ueber den Transport ausgetauscht;
//!    Fingerprints vergleichen die Teilnehmer manuell (out-of-band)
//! 3. ECDH + HKDF (mit Session-Salt) -> ein Session-Schluessel pro Peer,
//!    abgelegt in der [`SessionKeyTable`]
//! 4. Direktnachrichten werden mit AES-256-GCM verschluesselt
//! 5. Fuer Broadcast erzeugt ein Mitglied einen Gruppen-Schluessel und
//!    verteilt ihn ueber die Session-Kanaele an alle anderen

pub mod decrypt;
pub mod encrypt;
pub mod group_key;
pub mod key_exchange;
pub mod session_table;

pub use decrypt::{decrypt_message, decrypt_message_bytes};
pub use encrypt::encrypt_message;
pub use group_key::{
    create_group_key, distribute_group_key, export_group_key, import_group_key,
    receive_group_key,
};
pub use key_exchange::{derive_session_key, derive_shared_secret};
pub use session_table::SessionKeyTable;
