//! The Offset Ledger (next-offset-to-assign per partition) and the Consumer
//! Offset Ledger (committed offset + opaque metadata per group/topic/partition).
//!
//! Both are keyed on structured tuples rather than concatenated strings, so
//! that e.g. deleting topic `"orders"` can never stray into the entries of a
//! topic named `"orders-backup"`.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub(crate) struct OffsetLedger {
    next: HashMap<(String, i32), i64>,
}

impl OffsetLedger {
    /// The next offset to assign, or 0 if no entry has ever been written.
    pub(crate) fn get(&self, topic: &str, partition: i32) -> i64 {
        self.next
            .get(&(topic.to_string(), partition))
            .copied()
            .unwrap_or(0)
    }

    /// Upserts the next-offset-to-assign for `(topic, partition)` to
    /// `last_offset + 1`. Unconditional: a regression is not rejected here,
    /// callers are responsible for serializing per-partition appends.
    pub(crate) fn set_next(&mut self, topic: &str, partition: i32, last_offset: i64) {
        self.next
            .insert((topic.to_string(), partition), last_offset + 1);
    }

    /// Removes every entry whose topic equals `topic`, regardless of
    /// partition.
    pub(crate) fn remove_topic(&mut self, topic: &str) {
        self.next.retain(|(t, _), _| t != topic);
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct ConsumerOffsetLedger {
    committed: HashMap<(String, String, i32), (i64, String)>,
}

impl ConsumerOffsetLedger {
    /// The committed (offset, metadata) for a group/topic/partition triple,
    /// or `(0, "")` if nothing has ever been committed.
    pub(crate) fn get(&self, group: &str, topic: &str, partition: i32) -> (i64, String) {
        self.committed
            .get(&(group.to_string(), topic.to_string(), partition))
            .cloned()
            .unwrap_or_else(|| (0, String::new()))
    }

    /// Upserts the committed offset and metadata for a group/topic/partition
    /// triple. Accepts any offset, including Kafka's `-1` sentinel.
    pub(crate) fn commit(
        &mut self,
        group: &str,
        topic: &str,
        partition: i32,
        offset: i64,
        metadata: String,
    ) {
        self.committed.insert(
            (group.to_string(), topic.to_string(), partition),
            (offset, metadata),
        );
    }
}
