//! Turn pools keyed by agent role and utterance label.

use indexmap::IndexMap;
use std::sync::Arc;

use crate::domain::corpus::{AgentRole, Turn};

/// Key of a turn pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PoolKey {
    pub role: AgentRole,
    pub label: String,
}

impl PoolKey {
    pub fn new(role: AgentRole, label: impl Into<String>) -> Self {
        Self {
            role,
            label: label.into(),
        }
    }
}

/// Original turns observed per `(role, label)`, in encounter order.
///
/// A pool may hold the same utterance several times when it recurs across
/// dialogues. Pools are read-only once indexing is done.
#[derive(Debug, Clone, Default)]
pub struct TurnPools {
    pools: IndexMap<PoolKey, Vec<Arc<Turn>>>,
}

impl TurnPools {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, key: PoolKey, turn: Arc<Turn>) {
        self.pools.entry(key).or_default().push(turn);
    }

    /// Turns observed for `(role, label)`. Unknown keys yield an empty pool.
    pub fn get(&self, role: AgentRole, label: &str) -> &[Arc<Turn>] {
        self.pools
            .get(&PoolKey::new(role, label))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct `(role, label)` pools.
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}
