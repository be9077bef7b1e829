//! FlowSampler - Randomized breadth-first expansion of the flow catalog.

use rand::seq::index;
use rand::Rng;
use std::collections::VecDeque;
use std::sync::Arc;

use super::FlowIndex;
use crate::domain::corpus::{AgentRole, Turn};

/// Maximum number of pool turns tried at each expansion.
pub const DEFAULT_BRANCH_WIDTH: usize = 5;

/// Partial dialogues shorter than this are never pruned.
pub const DEFAULT_MIN_DEPTH: usize = 5;

/// Tuning of the sampler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerSettings {
    /// Pruning rate in (0, 1]. Branches survive a draw above `sqrt(pruning_rate)`.
    pub pruning_rate: f64,
    pub branch_width: usize,
    pub min_depth: usize,
    /// Log progress every this many completed skeletons. Zero disables it.
    pub progress_interval: usize,
}

impl SamplerSettings {
    pub fn with_pruning_rate(pruning_rate: f64) -> Self {
        Self {
            pruning_rate,
            ..Self::default()
        }
    }
}

impl Default for SamplerSettings {
    fn default() -> Self {
        Self {
            pruning_rate: 0.91,
            branch_width: DEFAULT_BRANCH_WIDTH,
            min_depth: DEFAULT_MIN_DEPTH,
            progress_interval: 1000,
        }
    }
}

/// A sampled dialogue: original turns realizing one catalogued flow.
#[derive(Debug, Clone, PartialEq)]
pub struct Skeleton {
    flow: usize,
    turns: Vec<Arc<Turn>>,
}

impl Skeleton {
    pub fn new(flow: usize, turns: Vec<Arc<Turn>>) -> Self {
        Self { flow, turns }
    }

    /// Catalog position of the flow this skeleton realizes.
    pub fn flow(&self) -> usize {
        self.flow
    }

    pub fn turns(&self) -> &[Arc<Turn>] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

/// Work-list entry: the flow being realized, how far, and the turns so far.
///
/// The remaining suffix is `flow[depth..]`.
struct PendingBranch {
    flow: usize,
    depth: usize,
    turns: Vec<Arc<Turn>>,
}

/// Generates dialogue skeletons from a [`FlowIndex`].
#[derive(Debug, Clone, Default)]
pub struct FlowSampler {
    settings: SamplerSettings,
}

impl FlowSampler {
    pub fn new(settings: SamplerSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &SamplerSettings {
        &self.settings
    }

    /// Threshold a uniform draw must exceed for a branch to survive.
    ///
    /// Exactly `sqrt(pruning_rate)`.
    pub fn survival_threshold(&self) -> f64 {
        self.settings.pruning_rate.sqrt()
    }

    /// Expands every catalogued flow breadth-first and returns all completed skeletons.
    ///
    /// # Algorithm
    /// The work list starts with one empty branch per flow, in catalog order.
    /// Popping a branch whose suffix is empty emits it. Otherwise the role is
    /// picked by depth parity and up to `branch_width` distinct turns are
    /// drawn from the `(role, label)` pool (the whole pool if it is not
    /// larger). Each drawn turn extends the branch if a fresh uniform draw
    /// exceeds the survival threshold, or unconditionally while the branch
    /// holds fewer than `min_depth` turns.
    ///
    /// # Edge Cases
    /// - Empty catalog: returns empty Vec
    /// - Empty or unknown pool: the branch dies silently
    /// - Empty flow: emits one empty skeleton
    ///
    /// The output depends only on the index and the state of `rng`.
    pub fn sample<R: Rng + ?Sized>(&self, index: &FlowIndex, rng: &mut R) -> Vec<Skeleton> {
        let survival = self.survival_threshold();
        let catalog = index.catalog();

        let mut queue: VecDeque<PendingBranch> = (0..catalog.len())
            .map(|flow| PendingBranch {
                flow,
                depth: 0,
                turns: Vec::new(),
            })
            .collect();
        let mut completed = Vec::new();

        while let Some(branch) = queue.pop_front() {
            let Some(flow) = catalog.get(branch.flow) else {
                continue;
            };

            let Some(label) = flow.label_at(branch.depth) else {
                completed.push(Skeleton::new(branch.flow, branch.turns));
                self.report_progress(completed.len());
                continue;
            };

            let role = AgentRole::for_position(branch.depth);
            let pool = index.pools().get(role, label);

            for turn in self.draw_candidates(pool, rng) {
                let draw: f64 = rng.gen();
                if draw > survival || branch.turns.len() < self.settings.min_depth {
                    let mut turns = Vec::with_capacity(branch.turns.len() + 1);
                    turns.extend(branch.turns.iter().cloned());
                    turns.push(Arc::clone(turn));
                    queue.push_back(PendingBranch {
                        flow: branch.flow,
                        depth: branch.depth + 1,
                        turns,
                    });
                }
            }
        }

        tracing::info!(
            flows = catalog.len(),
            skeletons = completed.len(),
            "Flow sampling finished"
        );
        completed
    }

    /// Draws `min(target, len)` skeletons uniformly without replacement.
    pub fn draw_batch<R: Rng + ?Sized>(
        skeletons: Vec<Skeleton>,
        target: usize,
        rng: &mut R,
    ) -> Vec<Skeleton> {
        let len = skeletons.len();
        let amount = target.min(len);
        let mut slots: Vec<Option<Skeleton>> = skeletons.into_iter().map(Some).collect();

        index::sample(rng, len, amount)
            .into_iter()
            .filter_map(|i| slots[i].take())
            .collect()
    }

    fn draw_candidates<'a, R: Rng + ?Sized>(
        &self,
        pool: &'a [Arc<Turn>],
        rng: &mut R,
    ) -> Vec<&'a Arc<Turn>> {
        if pool.len() > self.settings.branch_width {
            index::sample(rng, pool.len(), self.settings.branch_width)
                .into_iter()
                .map(|i| &pool[i])
                .collect()
        } else {
            pool.iter().collect()
        }
    }

    fn report_progress(&self, count: usize) {
        let interval = self.settings.progress_interval;
        if interval > 0 && count % interval == 0 {
            tracing::info!("Generated {} dialogues...", count);
        }
    }
}
