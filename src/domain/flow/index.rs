//! FlowIndex - Flow catalog and turn pools built from a seed corpus.

use indexmap::IndexMap;
use std::sync::Arc;

use super::{Flow, FlowCatalog, PoolKey, TurnPools};
use crate::domain::corpus::Dialogue;
use crate::domain::foundation::{DomainError, ValidationError};

/// Everything the sampler needs to know about a seed corpus.
#[derive(Debug, Clone, Default)]
pub struct FlowIndex {
    catalog: FlowCatalog,
    pools: TurnPools,
    label_counts: IndexMap<String, usize>,
}

impl FlowIndex {
    /// Indexes a seed corpus.
    ///
    /// # Algorithm
    /// For each turn, the role is picked by the parity of its `turn-num`
    /// (even: intent, odd: action) and the turn's label under that role is
    /// appended to the dialogue's flow. The turn itself joins the pool for
    /// `(role, label)`. Each dialogue's flow is added to the catalog unless
    /// an equal flow was seen before.
    ///
    /// # Errors
    /// A turn without the label its position requires is an input-format
    /// error and aborts indexing.
    pub fn build(dialogues: &[Dialogue]) -> Result<Self, DomainError> {
        let mut index = Self::default();

        for dialogue in dialogues {
            let mut labels = Vec::with_capacity(dialogue.turns.len());

            for turn in &dialogue.turns {
                let role = turn.role();
                let label = turn.label(role).ok_or_else(|| {
                    ValidationError::missing_field(
                        dialogue.id.as_str(),
                        turn.turn_num,
                        role.field_name(),
                    )
                })?;

                *index.label_counts.entry(label.to_string()).or_insert(0) += 1;
                labels.push(label.to_string());
                index
                    .pools
                    .push(PoolKey::new(role, label), Arc::new(turn.clone()));
            }

            index.catalog.insert(Flow::new(labels));
        }

        Ok(index)
    }

    pub fn catalog(&self) -> &FlowCatalog {
        &self.catalog
    }

    pub fn pools(&self) -> &TurnPools {
        &self.pools
    }

    /// How often each label occurred, least frequent first.
    ///
    /// Diagnostic only. Labels with equal counts keep first-seen order.
    pub fn label_frequencies(&self) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> = self
            .label_counts
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
            .collect();
        counts.sort_by_key(|(_, count)| *count);
        counts
    }
}
