//! The Kafscale metadata authority: the in-memory cluster metadata catalog,
//! produce-offset ledger, and consumer-group offset ledger backing a
//! Kafka-wire-protocol-compatible broker's control plane.
//!
//! This crate owns exactly the state a broker's `Metadata`, `Produce`
//! (offset-advancing half), `OffsetCommit`, and `OffsetFetch` handlers need
//! to consult and mutate. It does not speak the wire protocol itself, does
//! not run a network listener, and does not persist anything to disk — see
//! [`MetadataStore`] for the seam a durable implementation would fill.
//!
//! The entry point is [`MetadataAuthority`], constructed from a seed
//! [`ClusterState`] and driven through the [`MetadataStore`] trait.

mod authority;
mod context;
mod error;
mod ids;
mod offsets;
#[cfg(feature = "serde")]
mod seed;
mod store;
mod topology;

pub use authority::{MetadataAuthority, TopicSpec};
pub use context::Context;
pub use error::{Error, Result};
pub use ids::{topic_id_for_name, TopicId};
#[cfg(feature = "serde")]
pub use seed::seed_from_json;
pub use store::MetadataStore;
pub use topology::{Broker, ClusterState, Partition, Topic};
