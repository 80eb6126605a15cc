// Searches: one Compare per probe, then Found or NotFound

use super::{Step, StepKind};
use std::cmp::Ordering;

/// Classic binary search with `mid = floor((left + right) / 2)`.
///
/// The input is assumed sorted; an unsorted input still yields a finite trace.
pub(super) fn binary_search(data: &[i64], target: i64) -> Vec<Step> {
    let mut steps = Vec::new();
    let mut left: isize = 0;
    let mut right: isize = data.len() as isize - 1;

    while left <= right {
        let mid = ((left + right) / 2) as usize;
        let value = data[mid];
        let order = value.cmp(&target);

        let outcome = match order {
            Ordering::Equal => "match".to_string(),
            Ordering::Less => format!("{} < {}, search right half", value, target),
            Ordering::Greater => format!("{} > {}, search left half", value, target),
        };
        steps.push(
            Step::new(
                StepKind::Compare,
                vec![mid],
                format!(
                    "Comparing {} at index {} with target {}: {}",
                    value, mid, target, outcome
                ),
            )
            .with_snapshot(data),
        );

        match order {
            Ordering::Equal => {
                steps.push(found(data, target, mid));
                return steps;
            }
            Ordering::Less => left = mid as isize + 1,
            Ordering::Greater => right = mid as isize - 1,
        }
    }

    steps.push(not_found(data, target));
    steps
}

pub(super) fn linear_search(data: &[i64], target: i64) -> Vec<Step> {
    let mut steps = Vec::new();

    for (i, &value) in data.iter().enumerate() {
        steps.push(
            Step::new(
                StepKind::Compare,
                vec![i],
                format!("Checking {} at index {} against target {}", value, i, target),
            )
            .with_snapshot(data),
        );
        if value == target {
            steps.push(found(data, target, i));
            return steps;
        }
    }

    steps.push(not_found(data, target));
    steps
}

fn found(data: &[i64], target: i64, index: usize) -> Step {
    Step::new(
        StepKind::Found,
        vec![index],
        format!("Found {} at index {}", target, index),
    )
    .with_snapshot(data)
}

fn not_found(data: &[i64], target: i64) -> Step {
    Step::new(StepKind::NotFound, Vec::new(), format!("{} not found", target)).with_snapshot(data)
}
