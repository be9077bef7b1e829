//! Flows and the deduplicated flow catalog.

use indexmap::IndexSet;
use std::fmt;

/// The shape of a dialogue: one utterance label per turn.
///
/// Labels alternate between the intent and action roles by position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Flow(Vec<String>);

impl Flow {
    pub fn new(labels: Vec<String>) -> Self {
        Self(labels)
    }

    pub fn labels(&self) -> &[String] {
        &self.0
    }

    /// Label at `depth`, if the flow is that long.
    pub fn label_at(&self, depth: usize) -> Option<&str> {
        self.0.get(depth).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(" -> "))
    }
}

impl<S: Into<String>> FromIterator<S> for Flow {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Distinct flows in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct FlowCatalog {
    flows: IndexSet<Flow>,
}

impl FlowCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a flow unless an equal one is already catalogued.
    ///
    /// Returns the catalog position of the flow and whether it was new.
    pub fn insert(&mut self, flow: Flow) -> (usize, bool) {
        self.flows.insert_full(flow)
    }

    pub fn get(&self, position: usize) -> Option<&Flow> {
        self.flows.get_index(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Flow> {
        self.flows.iter()
    }

    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow(labels: &[&str]) -> Flow {
        labels.iter().copied().collect()
    }

    #[test]
    fn label_at_returns_position() {
        let f = flow(&["greet", "greet_ack", "inform_cpf"]);
        assert_eq!(f.label_at(0), Some("greet"));
        assert_eq!(f.label_at(2), Some("inform_cpf"));
        assert_eq!(f.label_at(3), None);
    }

    #[test]
    fn catalog_deduplicates_equal_flows() {
        let mut catalog = FlowCatalog::new();
        assert_eq!(catalog.insert(flow(&["a", "b"])), (0, true));
        assert_eq!(catalog.insert(flow(&["a", "c"])), (1, true));
        assert_eq!(catalog.insert(flow(&["a", "b"])), (0, false));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn catalog_preserves_first_seen_order() {
        let mut catalog = FlowCatalog::new();
        catalog.insert(flow(&["z"]));
        catalog.insert(flow(&["a"]));
        catalog.insert(flow(&["z"]));

        let order: Vec<String> = catalog.iter().map(|f| f.to_string()).collect();
        assert_eq!(order, vec!["[z]", "[a]"]);
    }

    #[test]
    fn display_joins_labels() {
        assert_eq!(flow(&["greet", "bye"]).to_string(), "[greet -> bye]");
    }
}
