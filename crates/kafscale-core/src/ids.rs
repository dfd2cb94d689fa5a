//! Stable topic identifiers.

use sha1::{Digest, Sha1};

/// A 16-byte Kafka topic ID, as it appears on the wire.
pub type TopicId = [u8; 16];

/// Derives a stable topic ID from a topic name: the first 16 bytes of
/// SHA-1(name). This must never change — seeded catalogs and existing
/// clients depend on a given name always producing the same ID, across
/// restarts and across replicas, without any coordination.
pub fn topic_id_for_name(name: &str) -> TopicId {
    let digest = Sha1::digest(name.as_bytes());
    let mut id = [0u8; 16];
    id.copy_from_slice(&digest[..16]);
    id
}
