//! Complexity classes for chart placement

/// Rank used when a label is not one of the known classes (`O(n)`)
pub const DEFAULT_RANK: u8 = 3;

/// Map a complexity label to its ordinal on the chart axis.
///
/// `O(1)` → 1, `O(log n)` → 2, `O(n)` → 3, `O(n log n)` → 4, `O(n²)` → 5.
/// Unknown labels fall back to [`DEFAULT_RANK`].
pub fn classify(label: &str) -> u8 {
    match normalize(label).as_str() {
        "o(1)" => 1,
        "o(logn)" => 2,
        "o(n)" => 3,
        "o(nlogn)" => 4,
        "o(n²)" | "o(n^2)" => 5,
        _ => DEFAULT_RANK,
    }
}

/// Axis label for a rank, empty for ranks outside 1..=5
pub fn rank_label(rank: u8) -> &'static str {
    match rank {
        1 => "O(1)",
        2 => "O(log n)",
        3 => "O(n)",
        4 => "O(n log n)",
        5 => "O(n²)",
        _ => "",
    }
}

/// One point on a growth chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthPoint {
    pub input_size: u32,
    pub operations: f64,
}

/// Sample operation counts at input sizes 10, 100, 1000 and 10000.
///
/// The linearithmic figures are rounded `n log2 n` values.
pub fn growth_curve(label: &str) -> [GrowthPoint; 4] {
    let ops: [f64; 4] = match normalize(label).as_str() {
        "o(n²)" | "o(n^2)" => [100.0, 10_000.0, 1_000_000.0, 100_000_000.0],
        "o(nlogn)" => [30.0, 660.0, 9_900.0, 132_000.0],
        "o(v+e)" => [50.0, 5_000.0, 500_000.0, 50_000_000.0],
        _ => [10.0, 100.0, 1_000.0, 10_000.0],
    };
    let mut points = [GrowthPoint {
        input_size: 0,
        operations: 0.0,
    }; 4];
    for (point, (size, ops)) in points
        .iter_mut()
        .zip(crate::constants::CHART_INPUT_SIZES.iter().zip(ops))
    {
        *point = GrowthPoint {
            input_size: *size,
            operations: ops,
        };
    }
    points
}

fn normalize(label: &str) -> String {
    label
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
