//! Deserializing a [`ClusterState`] seed value.
//!
//! Process-level configuration (listen address, TLS, object-store
//! credentials) belongs to the broker binary hosting this core and is out of
//! scope here. What the core does own is the *shape* of the seed value used
//! to construct the initial catalog: [`ClusterState`] already mirrors that
//! shape, so seeding is just deserializing one from whatever format the host
//! process prefers.

#![cfg(feature = "serde")]

use crate::topology::ClusterState;

/// Deserializes a [`ClusterState`] seed from JSON.
///
/// A topic whose `topic_id` is all-zero in the seed is not special-cased
/// here: [`ClusterState::deep_clone`] (run by [`crate::MetadataAuthority::new`])
/// back-fills it from the topic name, per the topic-ID contract.
pub fn seed_from_json(bytes: &[u8]) -> serde_json::Result<ClusterState> {
    serde_json::from_slice(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_brokers_and_topics_from_json() {
        let seed = seed_from_json(
            br#"{
                "brokers": [{"node_id": 1, "host": "h", "port": 9092, "rack": null}],
                "controller_id": 1,
                "cluster_id": "test-cluster",
                "topics": []
            }"#,
        )
        .expect("valid seed JSON");
        assert_eq!(seed.brokers.len(), 1);
        assert_eq!(seed.controller_id, 1);
        assert_eq!(seed.cluster_id.as_deref(), Some("test-cluster"));
    }
}
