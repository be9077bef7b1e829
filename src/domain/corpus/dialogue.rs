//! Dialogues and the dataset document that contains them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Turn;
use crate::domain::foundation::DialogueId;

/// An ordered sequence of turns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dialogue {
    pub id: DialogueId,
    pub turns: Vec<Turn>,
}

impl Dialogue {
    pub fn new(id: DialogueId, turns: Vec<Turn>) -> Self {
        Self { id, turns }
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

/// A dataset document: the dialogue collection plus any other top-level keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub dialogs: Vec<Dialogue>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Dataset {
    /// Returns a dataset with the same top-level keys and a new dialogue collection.
    pub fn with_dialogs(&self, dialogs: Vec<Dialogue>) -> Self {
        Self {
            dialogs,
            extra: self.extra.clone(),
        }
    }
}
