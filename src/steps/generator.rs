//! Step generation entry point
//!
//! [`generate`] is pure: it copies the input, runs the algorithm on the copy
//! and records every event. Equal arguments always give equal sequences.

use super::{search, sorts, Step, StepSequence};
use crate::algorithm::AlgorithmKind;
use crate::constants::MAX_INPUT_LEN;
use crate::error::VizError;
use tracing::debug;

/// Produce the complete step trace for `kind` over `input`.
///
/// `target` is only read by the search kinds. Kinds without step logic, and
/// searches without a target, yield a single Info step rather than an error.
///
/// # Errors
///
/// [`VizError::InvalidInput`] when `input` is empty, and
/// [`VizError::InputTooLarge`] when it is longer than [`MAX_INPUT_LEN`].
pub fn generate(
    kind: AlgorithmKind,
    input: &[i64],
    target: Option<i64>,
) -> Result<StepSequence, VizError> {
    if input.is_empty() {
        return Err(VizError::InvalidInput);
    }
    // Every step snapshots the whole input, so quadratic sorts grow cubically
    if input.len() > MAX_INPUT_LEN {
        return Err(VizError::InputTooLarge {
            len: input.len(),
            max: MAX_INPUT_LEN,
        });
    }

    let steps = match (kind, target) {
        (AlgorithmKind::BubbleSort, _) => sorts::bubble_sort(input),
        (AlgorithmKind::InsertionSort, _) => sorts::insertion_sort(input),
        (AlgorithmKind::SelectionSort, _) => sorts::selection_sort(input),
        (AlgorithmKind::QuickSort, _) => sorts::quick_sort(input),
        (AlgorithmKind::MergeSort, _) => sorts::merge_sort(input),
        (AlgorithmKind::BinarySearch, Some(t)) => search::binary_search(input, t),
        (AlgorithmKind::LinearSearch, Some(t)) => search::linear_search(input, t),
        (AlgorithmKind::BinarySearch | AlgorithmKind::LinearSearch, None) => {
            vec![Step::info("No search target given; pick a value to search for")
                .with_snapshot(input)]
        }
        (AlgorithmKind::BreadthFirstSearch, _) => {
            vec![Step::info(
                "Breadth-First Search step-by-step visualization is not available yet",
            )
            .with_snapshot(input)]
        }
        (AlgorithmKind::DepthFirstSearch, _) => {
            vec![Step::info(
                "Depth-First Search step-by-step visualization is not available yet",
            )
            .with_snapshot(input)]
        }
    };

    let sequence = StepSequence::new(kind, input, target, steps, || {
        Step::info("Only one element; already sorted").with_snapshot(input)
    });
    debug!(
        algorithm = %kind,
        input_len = input.len(),
        steps = sequence.len(),
        "generated step sequence"
    );
    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::StepKind;

    #[test]
    fn test_empty_input_rejected() {
        for kind in AlgorithmKind::ALL {
            assert_eq!(generate(kind, &[], Some(1)), Err(VizError::InvalidInput));
        }
    }

    #[test]
    fn test_oversized_input_rejected() {
        let input: Vec<i64> = (0..=MAX_INPUT_LEN as i64).rev().collect();
        for kind in AlgorithmKind::ALL {
            assert_eq!(
                generate(kind, &input, Some(1)),
                Err(VizError::InputTooLarge {
                    len: MAX_INPUT_LEN + 1,
                    max: MAX_INPUT_LEN
                })
            );
        }
        let at_limit = &input[1..];
        let seq = generate(AlgorithmKind::BubbleSort, at_limit, None).unwrap();
        assert_eq!(seq.replay(), (0..MAX_INPUT_LEN as i64).collect::<Vec<_>>());
    }

    #[test]
    fn test_graph_kinds_fall_back_to_info() {
        for kind in [AlgorithmKind::BreadthFirstSearch, AlgorithmKind::DepthFirstSearch] {
            let seq = generate(kind, &[0, 1, 2], None).unwrap();
            assert_eq!(seq.len(), 1);
            assert_eq!(seq.last().kind, StepKind::Info);
            assert!(seq.last().highlight_indices.is_empty());
        }
    }

    #[test]
    fn test_search_without_target_falls_back_to_info() {
        let seq = generate(AlgorithmKind::BinarySearch, &[1, 2, 3], None).unwrap();
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.last().kind, StepKind::Info);
    }

    #[test]
    fn test_single_element_sort_is_not_empty() {
        for kind in [
            AlgorithmKind::BubbleSort,
            AlgorithmKind::InsertionSort,
            AlgorithmKind::SelectionSort,
            AlgorithmKind::QuickSort,
            AlgorithmKind::MergeSort,
        ] {
            let seq = generate(kind, &[42], None).unwrap();
            assert_eq!(seq.len(), 1, "{kind}");
            assert_eq!(seq.last().description, "Only one element; already sorted");
            assert_eq!(seq.replay(), vec![42]);
        }
    }

    #[test]
    fn test_input_is_not_mutated() {
        let input = vec![5, 4, 3, 2, 1];
        let _ = generate(AlgorithmKind::QuickSort, &input, None).unwrap();
        assert_eq!(input, vec![5, 4, 3, 2, 1]);
    }
}
