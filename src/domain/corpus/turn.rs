//! Turn records of a dialogue corpus.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Slot-values captured up to a turn, keyed by identity-field name.
pub type SlotValues = BTreeMap<String, Value>;

/// Who produced a turn.
///
/// `client` is the participant that initiates exchanges. Any other tag is the
/// responding participant and is written back exactly as it was read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Speaker {
    Client,
    Other(String),
}

impl Speaker {
    pub const CLIENT: &'static str = "client";

    /// Returns true for the initiating participant.
    pub fn is_client(&self) -> bool {
        matches!(self, Speaker::Client)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Speaker::Client => Self::CLIENT,
            Speaker::Other(tag) => tag,
        }
    }
}

impl From<String> for Speaker {
    fn from(tag: String) -> Self {
        if tag == Self::CLIENT {
            Speaker::Client
        } else {
            Speaker::Other(tag)
        }
    }
}

impl From<Speaker> for String {
    fn from(speaker: Speaker) -> Self {
        match speaker {
            Speaker::Client => Speaker::CLIENT.to_string(),
            Speaker::Other(tag) => tag,
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which label field describes a turn, decided by the parity of its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AgentRole {
    /// Even positions, labelled by `intent`.
    Intent,
    /// Odd positions, labelled by `action`.
    Action,
}

impl AgentRole {
    /// Role of the turn at `position` (zero-based).
    pub fn for_position(position: usize) -> Self {
        if position % 2 == 0 {
            AgentRole::Intent
        } else {
            AgentRole::Action
        }
    }

    /// Name of the turn field holding this role's label.
    pub fn field_name(&self) -> &'static str {
        match self {
            AgentRole::Intent => "intent",
            AgentRole::Action => "action",
        }
    }
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// One utterance record of a dialogue.
///
/// Turns read from the seed corpus are never mutated; synthesis works on
/// clones. Fields this crate does not interpret are kept in `extra` and
/// written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    #[serde(rename = "turn-num")]
    pub turn_num: usize,

    pub speaker: Speaker,

    /// Utterance with identity values replaced by placeholder tokens.
    pub utterance_delex: String,

    /// Display text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utterance: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    #[serde(
        rename = "slot-values",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub slot_values: Option<SlotValues>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Turn {
    /// Label of this turn under the given role, if present.
    pub fn label(&self, role: AgentRole) -> Option<&str> {
        match role {
            AgentRole::Intent => self.intent.as_deref(),
            AgentRole::Action => self.action.as_deref(),
        }
    }

    /// Role selected by this turn's own position.
    pub fn role(&self) -> AgentRole {
        AgentRole::for_position(self.turn_num)
    }

    /// Label selected by this turn's own position.
    pub fn own_label(&self) -> Option<&str> {
        self.label(self.role())
    }
}
