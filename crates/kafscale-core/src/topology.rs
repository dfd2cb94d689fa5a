//! Cluster state: brokers, the topic catalog, and partitions, plus the
//! deep-copy and filtering helpers [`crate::MetadataAuthority`] uses to hand
//! out snapshots that never alias its live state.

use std::collections::HashMap;

use crate::ids::{topic_id_for_name, TopicId};

/// UNKNOWN_TOPIC_OR_PARTITION, the only error code this crate itself sets on
/// a returned entity (stub topics produced by [`ClusterState::filter_topics`]).
pub const UNKNOWN_TOPIC_OR_PARTITION: i16 = 3;

/// A Kafka server node, addressable by (node ID, host, port).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Broker {
    pub node_id: i32,
    pub host: String,
    pub port: i32,
    pub rack: Option<String>,
}

/// One partition of a topic: its leader, replica set, and in-sync subset.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition {
    pub partition_index: i32,
    pub leader_id: i32,
    pub leader_epoch: i32,
    pub replica_nodes: Vec<i32>,
    pub isr_nodes: Vec<i32>,
    pub offline_replicas: Vec<i32>,
    pub error_code: i16,
}

/// A named, partitioned topic in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Topic {
    pub name: String,
    pub topic_id: TopicId,
    pub is_internal: bool,
    pub partitions: Vec<Partition>,
    pub error_code: i16,
    pub authorized_operations: i32,
}

impl Topic {
    /// The stub substituted for a requested-but-absent topic name in
    /// [`ClusterState::filter_topics`].
    fn stub(name: &str) -> Self {
        Topic {
            name: name.to_string(),
            topic_id: [0u8; 16],
            is_internal: false,
            partitions: Vec::new(),
            error_code: UNKNOWN_TOPIC_OR_PARTITION,
            authorized_operations: 0,
        }
    }

    /// Back-fills a zero topic ID from the name. External catalogs that seed
    /// an intentional all-zero sentinel ID lose it here; wire consumers need
    /// a non-zero ID more than they need that sentinel preserved.
    fn backfill_id(mut self) -> Self {
        if self.topic_id == [0u8; 16] {
            self.topic_id = topic_id_for_name(&self.name);
        }
        self
    }
}

/// The full in-memory cluster catalog: brokers, controller, optional cluster
/// ID, and every topic. `MetadataAuthority` is the only thing that mutates
/// this type in place; every value that crosses its API boundary is a deep
/// copy produced by [`ClusterState::filter_topics`] or [`ClusterState::deep_clone`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClusterState {
    pub brokers: Vec<Broker>,
    pub controller_id: i32,
    pub cluster_id: Option<String>,
    pub topics: Vec<Topic>,
}

impl ClusterState {
    /// A full, independent copy of `self`, including a freshly allocated
    /// `Vec` for every nested sequence. No interior slice is shared with
    /// `self`.
    pub(crate) fn deep_clone(&self) -> Self {
        ClusterState {
            brokers: self.brokers.clone(),
            controller_id: self.controller_id,
            cluster_id: self.cluster_id.clone(),
            topics: self.filter_topics(&[]),
        }
    }

    /// If `requested` is empty, a deep copy of every topic. Otherwise exactly
    /// `requested.len()` topics, one per name, in the caller's order —
    /// present names are deep-copied, absent names become error stubs.
    /// Duplicate names in `requested` produce duplicate outputs.
    pub(crate) fn filter_topics(&self, requested: &[String]) -> Vec<Topic> {
        if requested.is_empty() {
            return self
                .topics
                .iter()
                .cloned()
                .map(Topic::backfill_id)
                .collect();
        }
        let index: HashMap<&str, &Topic> =
            self.topics.iter().map(|t| (t.name.as_str(), t)).collect();
        requested
            .iter()
            .map(|name| match index.get(name.as_str()) {
                Some(topic) => (*topic).clone().backfill_id(),
                None => Topic::stub(name),
            })
            .collect()
    }

    pub(crate) fn topic(&self, name: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.name == name)
    }

    pub(crate) fn has_partition(&self, topic: &str, partition: i32) -> bool {
        self.topic(topic)
            .map(|t| t.partitions.iter().any(|p| p.partition_index == partition))
            .unwrap_or(false)
    }
}
