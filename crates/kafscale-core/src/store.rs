//! The `MetadataStore` capability set.
//!
//! Protocol handlers are written against this trait, not against
//! [`crate::MetadataAuthority`] directly, so that a future durable backend
//! (consistent external KV, say) can be swapped in without a handler-side
//! rewrite. The in-memory authority is the only implementation this crate
//! provides; it never returns [`Error::StoreUnavailable`], which is reserved
//! for implementations that can lose their backing store transiently.

use async_trait::async_trait;

use crate::{
    authority::TopicSpec,
    context::Context,
    error::Result,
    topology::{ClusterState, Topic},
};

#[async_trait]
pub trait MetadataStore: Send + Sync {
    async fn snapshot(&self, ctx: &Context, topics: &[String]) -> Result<ClusterState>;
    async fn next_offset(&self, ctx: &Context, topic: &str, partition: i32) -> Result<i64>;
    async fn update_offsets(
        &self,
        ctx: &Context,
        topic: &str,
        partition: i32,
        last_offset: i64,
    ) -> Result<()>;
    async fn create_topic(&self, ctx: &Context, spec: TopicSpec) -> Result<Topic>;
    async fn delete_topic(&self, ctx: &Context, name: &str) -> Result<()>;
    async fn commit_consumer_offset(
        &self,
        ctx: &Context,
        group: &str,
        topic: &str,
        partition: i32,
        offset: i64,
        metadata: String,
    ) -> Result<()>;
    async fn fetch_consumer_offset(
        &self,
        ctx: &Context,
        group: &str,
        topic: &str,
        partition: i32,
    ) -> Result<(i64, String)>;
    async fn replace(&self, ctx: &Context, new_state: ClusterState) -> Result<()>;
}
