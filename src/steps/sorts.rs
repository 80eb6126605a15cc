// Comparison sorts, each recording its events on a private working copy

use super::{Step, StepKind};

/// Working copy plus the events recorded against it
struct Trace {
    data: Vec<i64>,
    steps: Vec<Step>,
}

impl Trace {
    fn new(input: &[i64]) -> Self {
        Trace {
            data: input.to_vec(),
            steps: Vec::new(),
        }
    }

    fn record(&mut self, kind: StepKind, highlight: Vec<usize>, description: String) {
        let step = Step::new(kind, highlight, description).with_snapshot(&self.data);
        self.steps.push(step);
    }

    fn compare(&mut self, a: usize, b: usize) {
        let description = format!("Comparing {} and {}", self.data[a], self.data[b]);
        self.record(StepKind::Compare, vec![a, b], description);
    }

    fn swap(&mut self, a: usize, b: usize) {
        let description = format!("Swapping {} and {}", self.data[a], self.data[b]);
        self.data.swap(a, b);
        self.record(StepKind::Swap, vec![a, b], description);
    }

    fn write(&mut self, k: usize, value: i64) {
        self.data[k] = value;
        self.record(
            StepKind::Merge,
            vec![k],
            format!("Placing {} at index {}", value, k),
        );
    }

    fn finish(self) -> Vec<Step> {
        self.steps
    }
}

/// Adjacent compare-exchange passes, `n - i - 1` comparisons in pass `i`
pub(super) fn bubble_sort(input: &[i64]) -> Vec<Step> {
    let mut trace = Trace::new(input);
    let n = trace.data.len();

    for i in 0..n {
        for j in 0..n - i - 1 {
            trace.compare(j, j + 1);
            if trace.data[j] > trace.data[j + 1] {
                trace.swap(j, j + 1);
            }
        }
    }

    trace.finish()
}

/// Sinks each new element left by adjacent swaps until it is in place
pub(super) fn insertion_sort(input: &[i64]) -> Vec<Step> {
    let mut trace = Trace::new(input);
    let n = trace.data.len();

    for i in 1..n {
        let mut j = i;
        while j > 0 {
            trace.compare(j - 1, j);
            if trace.data[j - 1] <= trace.data[j] {
                break;
            }
            trace.swap(j - 1, j);
            j -= 1;
        }
    }

    trace.finish()
}

pub(super) fn selection_sort(input: &[i64]) -> Vec<Step> {
    let mut trace = Trace::new(input);
    let n = trace.data.len();

    for i in 0..n {
        let mut min = i;
        for j in i + 1..n {
            trace.compare(min, j);
            if trace.data[j] < trace.data[min] {
                min = j;
            }
        }
        if min != i {
            trace.swap(i, min);
        }
    }

    trace.finish()
}

/// Lomuto partition with the rightmost element as pivot; left part is
/// sorted before the right part.
pub(super) fn quick_sort(input: &[i64]) -> Vec<Step> {
    let mut trace = Trace::new(input);
    let n = trace.data.len();
    quick_sort_range(&mut trace, 0, n - 1);
    trace.finish()
}

fn quick_sort_range(trace: &mut Trace, lo: usize, hi: usize) {
    if lo >= hi {
        return;
    }

    let pivot = trace.data[hi];
    trace.record(
        StepKind::Partition,
        (lo..=hi).collect(),
        format!("Partitioning [{}..={}] around pivot {}", lo, hi, pivot),
    );

    let mut store = lo;
    for j in lo..hi {
        let description = format!("Comparing {} with pivot {}", trace.data[j], pivot);
        trace.record(StepKind::Compare, vec![j, hi], description);
        if trace.data[j] <= pivot {
            if store != j {
                trace.swap(store, j);
            }
            store += 1;
        }
    }
    if store != hi {
        trace.swap(store, hi);
    }
    trace.record(
        StepKind::Info,
        vec![store],
        format!("Pivot {} placed at index {}", pivot, store),
    );

    if store > lo {
        quick_sort_range(trace, lo, store - 1);
    }
    quick_sort_range(trace, store + 1, hi);
}

/// Top-down merge sort over half-open ranges, left half first.
///
/// Ties take the left element, so equal values keep their order.
pub(super) fn merge_sort(input: &[i64]) -> Vec<Step> {
    let mut trace = Trace::new(input);
    let n = trace.data.len();
    merge_sort_range(&mut trace, 0, n);
    trace.finish()
}

fn merge_sort_range(trace: &mut Trace, lo: usize, hi: usize) {
    if hi - lo < 2 {
        return;
    }

    let mid = lo + (hi - lo) / 2;
    trace.record(
        StepKind::Partition,
        (lo..hi).collect(),
        format!(
            "Dividing [{}..={}] into [{}..={}] and [{}..={}]",
            lo,
            hi - 1,
            lo,
            mid - 1,
            mid,
            hi - 1
        ),
    );

    merge_sort_range(trace, lo, mid);
    merge_sort_range(trace, mid, hi);
    merge(trace, lo, mid, hi);
}

fn merge(trace: &mut Trace, lo: usize, mid: usize, hi: usize) {
    trace.record(
        StepKind::Merge,
        (lo..hi).collect(),
        format!(
            "Merging [{}..={}] with [{}..={}]",
            lo,
            mid - 1,
            mid,
            hi - 1
        ),
    );

    let left = trace.data[lo..mid].to_vec();
    let right = trace.data[mid..hi].to_vec();
    let (mut i, mut j, mut k) = (0, 0, lo);

    while i < left.len() && j < right.len() {
        trace.record(
            StepKind::Compare,
            vec![lo + i, mid + j],
            format!("Comparing {} and {}", left[i], right[j]),
        );
        let value = if left[i] <= right[j] {
            i += 1;
            left[i - 1]
        } else {
            j += 1;
            right[j - 1]
        };
        trace.write(k, value);
        k += 1;
    }

    for &value in left[i..].iter().chain(&right[j..]) {
        trace.write(k, value);
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [i64; 7] = [64, 34, 25, 12, 22, 11, 90];

    fn final_data(steps: &[Step]) -> Vec<i64> {
        steps
            .last()
            .and_then(|s| s.data_snapshot.clone())
            .expect("snapshot")
    }

    #[test]
    fn test_bubble_first_steps() {
        let steps = bubble_sort(&SAMPLE);
        assert_eq!(steps[0].kind, StepKind::Compare);
        assert_eq!(steps[0].highlight_indices, vec![0, 1]);
        assert_eq!(steps[0].description, "Comparing 64 and 34");
        assert_eq!(steps[1].kind, StepKind::Swap);
        assert_eq!(steps[1].description, "Swapping 64 and 34");
        // After the swap, 64 moves on to meet 25
        assert_eq!(steps[2].description, "Comparing 64 and 25");
        assert_eq!(steps[2].highlight_indices, vec![1, 2]);
    }

    #[test]
    fn test_bubble_comparison_count() {
        let steps = bubble_sort(&SAMPLE);
        let compares = steps
            .iter()
            .filter(|s| s.kind == StepKind::Compare)
            .count();
        assert_eq!(compares, 7 * 6 / 2);
    }

    #[test]
    fn test_every_sort_ends_sorted() {
        let expected = vec![11, 12, 22, 25, 34, 64, 90];
        for steps in [
            bubble_sort(&SAMPLE),
            insertion_sort(&SAMPLE),
            selection_sort(&SAMPLE),
            quick_sort(&SAMPLE),
            merge_sort(&SAMPLE),
        ] {
            assert_eq!(final_data(&steps), expected);
        }
    }

    #[test]
    fn test_quick_sort_first_partition() {
        let steps = quick_sort(&SAMPLE);
        assert_eq!(steps[0].kind, StepKind::Partition);
        assert_eq!(steps[0].description, "Partitioning [0..=6] around pivot 90");
        assert_eq!(steps[0].highlight_indices, (0..=6).collect::<Vec<_>>());
        assert_eq!(steps[1].description, "Comparing 64 with pivot 90");
        assert_eq!(steps[1].highlight_indices, vec![0, 6]);
    }

    #[test]
    fn test_quick_sort_places_pivot() {
        let steps = quick_sort(&[3, 1, 2]);
        let placed = steps
            .iter()
            .find(|s| s.kind == StepKind::Info)
            .expect("pivot info");
        assert_eq!(placed.description, "Pivot 2 placed at index 1");
        assert_eq!(placed.highlight_indices, vec![1]);
        assert_eq!(placed.data_snapshot.as_deref(), Some(&[1, 2, 3][..]));
    }

    #[test]
    fn test_merge_sort_split_and_merge_boundaries() {
        let steps = merge_sort(&[4, 3, 2, 1]);
        let partitions: Vec<_> = steps
            .iter()
            .filter(|s| s.kind == StepKind::Partition)
            .map(|s| s.description.as_str())
            .collect();
        assert_eq!(
            partitions,
            vec![
                "Dividing [0..=3] into [0..=1] and [2..=3]",
                "Dividing [0..=1] into [0..=0] and [1..=1]",
                "Dividing [2..=3] into [2..=2] and [3..=3]",
            ]
        );
        let merges = steps
            .iter()
            .filter(|s| s.kind == StepKind::Merge && s.description.starts_with("Merging"))
            .count();
        assert_eq!(merges, 3);
    }

    #[test]
    fn test_merge_sort_is_stable_on_ties() {
        let steps = merge_sort(&[2, 2]);
        assert_eq!(steps[2].description, "Comparing 2 and 2");
        assert_eq!(steps[3].description, "Placing 2 at index 0");
        assert_eq!(final_data(&steps), vec![2, 2]);
    }

    #[test]
    fn test_sorted_input_has_no_swaps() {
        for steps in [
            bubble_sort(&[1, 2, 3, 4]),
            insertion_sort(&[1, 2, 3, 4]),
            selection_sort(&[1, 2, 3, 4]),
        ] {
            assert!(steps.iter().all(|s| s.kind != StepKind::Swap));
        }
    }
}
