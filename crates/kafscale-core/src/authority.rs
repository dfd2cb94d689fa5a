//! The Metadata Authority: the single façade that serializes reads and
//! writes across the topic catalog, the offset ledger, and the consumer
//! offset ledger behind one readers-writer guard.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    context::Context,
    error::{Error, Result},
    ids::topic_id_for_name,
    offsets::{ConsumerOffsetLedger, OffsetLedger},
    store::MetadataStore,
    topology::{ClusterState, Partition, Topic},
};

/// A topic-creation request, as taken by [`MetadataAuthority::create_topic`].
#[derive(Debug, Clone)]
pub struct TopicSpec {
    pub name: String,
    pub num_partitions: i32,
    pub replication_factor: i16,
}

struct State {
    cluster: ClusterState,
    offsets: OffsetLedger,
    consumer_offsets: ConsumerOffsetLedger,
}

/// The authoritative topic catalog, partition leadership, produce offset
/// ledger, and consumer-group offset ledger for one Kafscale cluster.
///
/// Every operation takes a [`Context`] and checks it for cancellation once,
/// at entry. Reads acquire a shared guard; writes acquire an exclusive one.
/// The guard is held across validation, mutation, and the deep-copy of any
/// returned value, so a caller never observes a snapshot inconsistent with
/// the state that was validated against.
pub struct MetadataAuthority {
    state: RwLock<State>,
}

impl MetadataAuthority {
    /// Seeds a new authority from an initial cluster state. The seed is
    /// deep-copied in, so the caller's value is left untouched and can be
    /// reused (e.g. to compare against a later `Snapshot`).
    pub fn new(seed: ClusterState) -> Self {
        MetadataAuthority {
            state: RwLock::new(State {
                cluster: seed.deep_clone(),
                offsets: OffsetLedger::default(),
                consumer_offsets: ConsumerOffsetLedger::default(),
            }),
        }
    }
}

#[async_trait]
impl MetadataStore for MetadataAuthority {
    #[tracing::instrument(level = "debug", skip(self, ctx))]
    async fn snapshot(&self, ctx: &Context, topics: &[String]) -> Result<ClusterState> {
        ctx.check()?;
        let state = self.state.read().await;
        Ok(ClusterState {
            brokers: state.cluster.brokers.clone(),
            controller_id: state.cluster.controller_id,
            cluster_id: state.cluster.cluster_id.clone(),
            topics: state.cluster.filter_topics(topics),
        })
    }

    #[tracing::instrument(level = "debug", skip(self, ctx))]
    async fn next_offset(&self, ctx: &Context, topic: &str, partition: i32) -> Result<i64> {
        ctx.check()?;
        let state = self.state.read().await;
        if !state.cluster.has_partition(topic, partition) {
            return Err(Error::unknown_partition(topic, partition));
        }
        Ok(state.offsets.get(topic, partition))
    }

    #[tracing::instrument(level = "debug", skip(self, ctx))]
    async fn update_offsets(
        &self,
        ctx: &Context,
        topic: &str,
        partition: i32,
        last_offset: i64,
    ) -> Result<()> {
        ctx.check()?;
        let mut state = self.state.write().await;
        state.offsets.set_next(topic, partition, last_offset);
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self, ctx))]
    async fn create_topic(&self, ctx: &Context, spec: TopicSpec) -> Result<Topic> {
        ctx.check()?;

        if spec.name.is_empty() || spec.num_partitions <= 0 {
            return Err(Error::InvalidTopic(format!(
                "name must be non-empty and num_partitions must be positive, got name={:?} num_partitions={}",
                spec.name, spec.num_partitions
            )));
        }
        let replication_factor = if spec.replication_factor <= 0 {
            1
        } else {
            spec.replication_factor
        };

        let mut state = self.state.write().await;

        if state.cluster.topic(&spec.name).is_some() {
            return Err(Error::TopicExists(spec.name));
        }
        if replication_factor as usize > state.cluster.brokers.len() {
            return Err(Error::InvalidTopic(format!(
                "replication factor {replication_factor} exceeds broker count {}",
                state.cluster.brokers.len()
            )));
        }

        let leader_id = state
            .cluster
            .brokers
            .first()
            .map(|b| b.node_id)
            .unwrap_or(state.cluster.controller_id);

        let partitions: Vec<Partition> = (0..spec.num_partitions)
            .map(|partition_index| Partition {
                partition_index,
                leader_id,
                leader_epoch: 0,
                replica_nodes: vec![leader_id],
                isr_nodes: vec![leader_id],
                offline_replicas: Vec::new(),
                error_code: 0,
            })
            .collect();
        for (i, partition) in partitions.iter().enumerate() {
            debug_assert_eq!(partition.partition_index, i as i32);
        }

        let topic = Topic {
            name: spec.name.clone(),
            topic_id: topic_id_for_name(&spec.name),
            is_internal: false,
            partitions,
            error_code: 0,
            authorized_operations: 0,
        };
        state.cluster.topics.push(topic.clone());
        Ok(topic)
    }

    #[tracing::instrument(level = "debug", skip(self, ctx))]
    async fn delete_topic(&self, ctx: &Context, name: &str) -> Result<()> {
        ctx.check()?;
        let mut state = self.state.write().await;
        let index = state
            .cluster
            .topics
            .iter()
            .position(|t| t.name == name)
            .ok_or_else(|| Error::unknown_topic(name))?;
        state.cluster.topics.remove(index);
        state.offsets.remove_topic(name);
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self, ctx, metadata))]
    async fn commit_consumer_offset(
        &self,
        ctx: &Context,
        group: &str,
        topic: &str,
        partition: i32,
        offset: i64,
        metadata: String,
    ) -> Result<()> {
        ctx.check()?;
        let mut state = self.state.write().await;
        state
            .consumer_offsets
            .commit(group, topic, partition, offset, metadata);
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self, ctx))]
    async fn fetch_consumer_offset(
        &self,
        ctx: &Context,
        group: &str,
        topic: &str,
        partition: i32,
    ) -> Result<(i64, String)> {
        ctx.check()?;
        let state = self.state.read().await;
        Ok(state.consumer_offsets.get(group, topic, partition))
    }

    #[tracing::instrument(level = "debug", skip(self, ctx, new_state))]
    async fn replace(&self, ctx: &Context, new_state: ClusterState) -> Result<()> {
        ctx.check()?;
        let mut state = self.state.write().await;
        state.cluster = new_state.deep_clone();
        Ok(())
    }
}
