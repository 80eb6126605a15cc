//! Step traces for algorithm playback
//!
//! A [`StepSequence`] is the complete, precomputed trace of one algorithm run.
//! Each [`Step`] carries the indices to highlight, a deterministic description
//! and a snapshot of the data *after* the step, so any position can be drawn
//! without replaying from the start.
//!
//! - [`generator`]: the entry point, [`generate`]
//! - `sorts`: comparison sorts (bubble, insertion, selection, quick, merge)
//! - `search`: binary and linear search

pub mod generator;
mod search;
mod sorts;

pub use generator::generate;

use crate::algorithm::AlgorithmKind;
use serde::{Deserialize, Serialize};

/// What happened in a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    Compare,
    Swap,
    Info,
    Found,
    NotFound,
    Partition,
    Merge,
}

impl StepKind {
    pub fn label(self) -> &'static str {
        match self {
            StepKind::Compare => "compare",
            StepKind::Swap => "swap",
            StepKind::Info => "info",
            StepKind::Found => "found",
            StepKind::NotFound => "not found",
            StepKind::Partition => "partition",
            StepKind::Merge => "merge",
        }
    }
}

/// One observable event in an algorithm's execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub kind: StepKind,
    pub highlight_indices: Vec<usize>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_snapshot: Option<Vec<i64>>,
}

impl Step {
    pub fn new(kind: StepKind, highlight_indices: Vec<usize>, description: impl Into<String>) -> Self {
        Step {
            kind,
            highlight_indices,
            description: description.into(),
            data_snapshot: None,
        }
    }

    pub fn info(description: impl Into<String>) -> Self {
        Step::new(StepKind::Info, Vec::new(), description)
    }

    pub fn with_snapshot(mut self, data: &[i64]) -> Self {
        self.data_snapshot = Some(data.to_vec());
        self
    }
}

/// The full trace for one (algorithm, input, target) run.
///
/// Never empty, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSequence {
    kind: AlgorithmKind,
    input: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target: Option<i64>,
    steps: Vec<Step>,
}

impl StepSequence {
    /// Wrap generated steps; an empty trace gets `fallback` as its only step
    pub(crate) fn new(
        kind: AlgorithmKind,
        input: &[i64],
        target: Option<i64>,
        mut steps: Vec<Step>,
        fallback: impl FnOnce() -> Step,
    ) -> Self {
        if steps.is_empty() {
            steps.push(fallback());
        }
        StepSequence {
            kind,
            input: input.to_vec(),
            target,
            steps,
        }
    }

    pub fn kind(&self) -> AlgorithmKind {
        self.kind
    }

    /// The data the trace starts from
    pub fn input(&self) -> &[i64] {
        &self.input
    }

    pub fn target(&self) -> Option<i64> {
        self.target
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn last(&self) -> &Step {
        &self.steps[self.steps.len() - 1]
    }

    /// Data as it looks after the first `position` steps.
    ///
    /// Uses the nearest snapshot at or before `position`, falling back to the
    /// original input.
    pub fn data_at(&self, position: usize) -> &[i64] {
        let upto = position.min(self.steps.len());
        self.steps[..upto]
            .iter()
            .rev()
            .find_map(|step| step.data_snapshot.as_deref())
            .unwrap_or(&self.input)
    }

    /// Re-apply the mutating steps to the original input.
    ///
    /// A Swap exchanges its two highlighted positions and a Merge writes its
    /// snapshot value at its single highlighted position; every other kind
    /// leaves the data alone.
    pub fn replay(&self) -> Vec<i64> {
        let mut data = self.input.clone();
        for step in &self.steps {
            apply(&mut data, step);
        }
        data
    }
}

impl<'a> IntoIterator for &'a StepSequence {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

fn apply(data: &mut [i64], step: &Step) {
    match (step.kind, step.highlight_indices.as_slice()) {
        (StepKind::Swap, &[a, b]) if a < data.len() && b < data.len() => data.swap(a, b),
        (StepKind::Merge, &[k]) if k < data.len() => {
            if let Some(value) = step.data_snapshot.as_ref().and_then(|snap| snap.get(k)) {
                data[k] = *value;
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(steps: Vec<Step>) -> StepSequence {
        StepSequence::new(AlgorithmKind::BubbleSort, &[3, 1, 2], None, steps, || {
            Step::info("empty")
        })
    }

    #[test]
    fn test_empty_trace_gets_fallback() {
        let seq = sequence(Vec::new());
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.last().kind, StepKind::Info);
        assert_eq!(seq.last().description, "empty");
    }

    #[test]
    fn test_replay_applies_swaps_and_merges() {
        let seq = sequence(vec![
            Step::new(StepKind::Compare, vec![0, 1], "Comparing 3 and 1"),
            Step::new(StepKind::Swap, vec![0, 1], "Swapping 3 and 1"),
            Step::new(StepKind::Merge, vec![2], "Placing 9 at index 2").with_snapshot(&[1, 3, 9]),
        ]);
        assert_eq!(seq.replay(), vec![1, 3, 9]);
    }

    #[test]
    fn test_data_at_uses_latest_snapshot() {
        let seq = sequence(vec![
            Step::new(StepKind::Swap, vec![0, 1], "swap").with_snapshot(&[1, 3, 2]),
            Step::info("no snapshot"),
        ]);
        assert_eq!(seq.data_at(0), &[3, 1, 2]);
        assert_eq!(seq.data_at(1), &[1, 3, 2]);
        assert_eq!(seq.data_at(2), &[1, 3, 2]);
        assert_eq!(seq.data_at(99), &[1, 3, 2]);
    }

    #[test]
    fn test_json_shape() {
        let step = Step::new(StepKind::NotFound, Vec::new(), "99 not found");
        let json = serde_json::to_string(&step).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"not-found","highlight_indices":[],"description":"99 not found"}"#
        );
    }
}
