//! The error taxonomy shared by every [`crate::MetadataAuthority`] operation.

use kafka_protocol::error::ResponseError;

/// Errors the metadata authority and offset ledgers can return.
///
/// This is the full taxonomy; there is no catch-all "internal error" variant.
/// A caught invariant violation inside the authority (a partition index that
/// doesn't match its position, say) is a bug in this crate, not a member of
/// this enum, and is guarded against with debug assertions instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No topic of this name has a partition at the given index (or the topic
    /// doesn't exist at all, for operations that don't take a partition).
    #[error("unknown topic or partition: {0}")]
    UnknownTopic(String),

    /// `CreateTopic` was called for a name that already exists.
    #[error("topic already exists: {0}")]
    TopicExists(String),

    /// The topic specification was malformed, or its replication factor
    /// exceeds the current broker count.
    #[error("invalid topic: {0}")]
    InvalidTopic(String),

    /// Reserved for durable backing-store implementations; the in-memory
    /// store never returns this.
    #[error("metadata store unavailable")]
    StoreUnavailable,

    /// The caller's context was already cancelled when the operation began.
    #[error("operation was cancelled")]
    Cancelled,
}

impl Error {
    pub(crate) fn unknown_topic(topic: &str) -> Self {
        Error::UnknownTopic(topic.to_string())
    }

    pub(crate) fn unknown_partition(topic: &str, partition: i32) -> Self {
        Error::UnknownTopic(format!("{topic}-{partition}"))
    }

    /// The Kafka wire error code a handler would map this onto.
    ///
    /// `Cancelled` has no wire analogue: a cancelled request never reaches
    /// the point of producing a response, so callers should treat it as a
    /// transport-level failure rather than forward it to a client.
    pub fn kafka_error(&self) -> ResponseError {
        match self {
            Error::UnknownTopic(_) => ResponseError::UnknownTopicOrPartition,
            Error::TopicExists(_) => ResponseError::TopicAlreadyExists,
            Error::InvalidTopic(_) => ResponseError::InvalidTopicException,
            Error::StoreUnavailable => ResponseError::CoordinatorNotAvailable,
            Error::Cancelled => ResponseError::UnknownServerError,
        }
    }
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;
