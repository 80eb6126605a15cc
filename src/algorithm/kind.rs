//! Algorithm identifiers

use crate::error::VizError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every algorithm the visualizer knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmKind {
    BubbleSort,
    QuickSort,
    MergeSort,
    BinarySearch,
    InsertionSort,
    SelectionSort,
    LinearSearch,
    BreadthFirstSearch,
    DepthFirstSearch,
}

impl AlgorithmKind {
    /// All kinds in menu order
    pub const ALL: [AlgorithmKind; 9] = [
        AlgorithmKind::BubbleSort,
        AlgorithmKind::QuickSort,
        AlgorithmKind::MergeSort,
        AlgorithmKind::InsertionSort,
        AlgorithmKind::SelectionSort,
        AlgorithmKind::BinarySearch,
        AlgorithmKind::LinearSearch,
        AlgorithmKind::BreadthFirstSearch,
        AlgorithmKind::DepthFirstSearch,
    ];

    /// The identifier used by the catalog and the command line
    pub fn id(self) -> &'static str {
        match self {
            AlgorithmKind::BubbleSort => "bubble-sort",
            AlgorithmKind::QuickSort => "quick-sort",
            AlgorithmKind::MergeSort => "merge-sort",
            AlgorithmKind::BinarySearch => "binary-search",
            AlgorithmKind::InsertionSort => "insertion-sort",
            AlgorithmKind::SelectionSort => "selection-sort",
            AlgorithmKind::LinearSearch => "linear-search",
            AlgorithmKind::BreadthFirstSearch => "breadth-first-search",
            AlgorithmKind::DepthFirstSearch => "depth-first-search",
        }
    }

    /// Search kinds need a target value
    pub fn is_search(self) -> bool {
        matches!(
            self,
            AlgorithmKind::BinarySearch | AlgorithmKind::LinearSearch
        )
    }

    pub fn category(self) -> Category {
        match self {
            AlgorithmKind::BubbleSort
            | AlgorithmKind::QuickSort
            | AlgorithmKind::MergeSort
            | AlgorithmKind::InsertionSort
            | AlgorithmKind::SelectionSort => Category::Sorting,
            AlgorithmKind::BinarySearch | AlgorithmKind::LinearSearch => Category::Searching,
            AlgorithmKind::BreadthFirstSearch | AlgorithmKind::DepthFirstSearch => {
                Category::Graph
            }
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for AlgorithmKind {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        AlgorithmKind::ALL
            .into_iter()
            .find(|kind| kind.id().eq_ignore_ascii_case(id))
            .ok_or_else(|| VizError::UnknownAlgorithm { id: id.to_string() })
    }
}

/// Menu grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Sorting,
    Searching,
    Graph,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Sorting, Category::Searching, Category::Graph];

    pub fn label(self) -> &'static str {
        match self {
            Category::Sorting => "Sorting",
            Category::Searching => "Searching",
            Category::Graph => "Graph",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_ids() {
        for kind in AlgorithmKind::ALL {
            assert_eq!(kind.id().parse::<AlgorithmKind>(), Ok(kind));
        }
        assert_eq!(
            " Quick-Sort ".parse::<AlgorithmKind>(),
            Ok(AlgorithmKind::QuickSort)
        );
    }

    #[test]
    fn test_parse_unknown_id() {
        let err = "bogo-sort".parse::<AlgorithmKind>().unwrap_err();
        assert_eq!(
            err,
            VizError::UnknownAlgorithm {
                id: "bogo-sort".to_string()
            }
        );
    }
}
