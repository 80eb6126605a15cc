//! Reference data shown next to each visualization
//!
//! The catalog is built once at startup with [`Catalog::builtin`] and handed to
//! whoever needs it (the session, the CLI listing). Nothing in here is
//! computed; it is display text plus the sample input each algorithm starts
//! from.

use super::kind::{AlgorithmKind, Category};
use crate::constants::{SEARCH_SAMPLE, SEARCH_TARGET, SORT_SAMPLE};
use crate::error::VizError;
use rustc_hash::FxHashMap;

/// Everything the UI displays about one algorithm
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmInfo {
    pub kind: AlgorithmKind,
    pub name: &'static str,
    pub description: &'static str,
    pub code_snippet: &'static str,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    pub sample_input: Vec<i64>,
    pub sample_target: Option<i64>,
    /// Short textual outline of the algorithm
    pub outline: Vec<&'static str>,
}

impl AlgorithmInfo {
    pub fn category(&self) -> Category {
        self.kind.category()
    }
}

/// Immutable lookup table keyed by algorithm kind
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<AlgorithmInfo>,
    index: FxHashMap<AlgorithmKind, usize>,
}

impl Catalog {
    /// Build a catalog from entries; later duplicates replace earlier ones
    pub fn new(entries: Vec<AlgorithmInfo>) -> Self {
        let mut deduped: Vec<AlgorithmInfo> = Vec::with_capacity(entries.len());
        let mut index = FxHashMap::default();
        for entry in entries {
            if let Some(&pos) = index.get(&entry.kind) {
                deduped[pos] = entry;
            } else {
                index.insert(entry.kind, deduped.len());
                deduped.push(entry);
            }
        }
        Catalog {
            entries: deduped,
            index,
        }
    }

    /// The catalog shipped with the visualizer
    pub fn builtin() -> Self {
        Catalog::new(AlgorithmKind::ALL.into_iter().map(builtin_entry).collect())
    }

    /// Look up an algorithm by its identifier (e.g. `"bubble-sort"`)
    pub fn select(&self, id: &str) -> Result<&AlgorithmInfo, VizError> {
        let kind: AlgorithmKind = id.parse()?;
        self.get(kind).ok_or_else(|| VizError::UnknownAlgorithm {
            id: id.trim().to_string(),
        })
    }

    pub fn get(&self, kind: AlgorithmKind) -> Option<&AlgorithmInfo> {
        self.index.get(&kind).map(|&pos| &self.entries[pos])
    }

    /// Entries in menu order
    pub fn iter(&self) -> impl Iterator<Item = &AlgorithmInfo> {
        self.entries.iter()
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &AlgorithmInfo> {
        self.entries
            .iter()
            .filter(move |entry| entry.category() == category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of a kind in menu order
    pub fn position(&self, kind: AlgorithmKind) -> Option<usize> {
        self.index.get(&kind).copied()
    }

    pub fn at(&self, position: usize) -> Option<&AlgorithmInfo> {
        self.entries.get(position)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_entry(kind: AlgorithmKind) -> AlgorithmInfo {
    match kind {
        AlgorithmKind::BubbleSort => AlgorithmInfo {
            kind,
            name: "Bubble Sort",
            description: "Bubble Sort is a simple sorting algorithm that repeatedly steps \
                through the list, compares adjacent elements, and swaps them if they are \
                in the wrong order.",
            code_snippet: BUBBLE_SORT_CODE,
            time_complexity: "O(n²)",
            space_complexity: "O(1)",
            sample_input: SORT_SAMPLE.to_vec(),
            sample_target: None,
            outline: vec![
                "Compare adjacent elements",
                "Swap if in wrong order",
                "Repeat until no swaps needed",
            ],
        },
        AlgorithmKind::QuickSort => AlgorithmInfo {
            kind,
            name: "Quick Sort",
            description: "Quick Sort is an efficient, in-place sorting algorithm that uses a \
                divide-and-conquer strategy by selecting a pivot and partitioning the array.",
            code_snippet: QUICK_SORT_CODE,
            time_complexity: "O(n log n)",
            space_complexity: "O(log n)",
            sample_input: SORT_SAMPLE.to_vec(),
            sample_target: None,
            outline: vec![
                "Choose a pivot element",
                "Partition array around pivot",
                "Recursively sort sub-arrays",
            ],
        },
        AlgorithmKind::MergeSort => AlgorithmInfo {
            kind,
            name: "Merge Sort",
            description: "Merge Sort is a divide-and-conquer algorithm that breaks down an \
                array into smaller subarrays, sorts them, and then merges them back together.",
            code_snippet: MERGE_SORT_CODE,
            time_complexity: "O(n log n)",
            space_complexity: "O(n)",
            sample_input: SORT_SAMPLE.to_vec(),
            sample_target: None,
            outline: vec![
                "Divide array into two halves",
                "Recursively sort each half",
                "Merge sorted halves",
            ],
        },
        AlgorithmKind::BinarySearch => AlgorithmInfo {
            kind,
            name: "Binary Search",
            description: "Binary Search is an efficient algorithm for finding an item in a \
                sorted array by repeatedly dividing the search interval in half.",
            code_snippet: BINARY_SEARCH_CODE,
            time_complexity: "O(log n)",
            space_complexity: "O(1)",
            sample_input: SEARCH_SAMPLE.to_vec(),
            sample_target: Some(SEARCH_TARGET),
            outline: vec![
                "Find the middle element",
                "Compare target with middle",
                "Eliminate half of the array",
                "Repeat until found",
            ],
        },
        AlgorithmKind::InsertionSort => AlgorithmInfo {
            kind,
            name: "Insertion Sort",
            description: "Insertion Sort builds the final sorted array one item at a time, \
                efficiently sorting small datasets.",
            code_snippet: INSERTION_SORT_CODE,
            time_complexity: "O(n²)",
            space_complexity: "O(1)",
            sample_input: SORT_SAMPLE.to_vec(),
            sample_target: None,
            outline: vec![
                "Insert each element into sorted portion",
                "Shift elements greater than key",
                "Repeat until all elements inserted",
            ],
        },
        AlgorithmKind::SelectionSort => AlgorithmInfo {
            kind,
            name: "Selection Sort",
            description: "Selection Sort divides the input list into two parts: a sorted \
                sublist and an unsorted sublist, repeatedly finding the minimum element.",
            code_snippet: SELECTION_SORT_CODE,
            time_complexity: "O(n²)",
            space_complexity: "O(1)",
            sample_input: SORT_SAMPLE.to_vec(),
            sample_target: None,
            outline: vec![
                "Find the minimum element",
                "Swap with the first element",
                "Repeat until all elements sorted",
            ],
        },
        AlgorithmKind::LinearSearch => AlgorithmInfo {
            kind,
            name: "Linear Search",
            description: "Linear Search sequentially checks each element in the list until \
                a match is found or the whole list has been searched.",
            code_snippet: LINEAR_SEARCH_CODE,
            time_complexity: "O(n)",
            space_complexity: "O(1)",
            sample_input: SORT_SAMPLE.to_vec(),
            sample_target: Some(SEARCH_TARGET),
            outline: vec![
                "Check each element in the list",
                "Return index if match found",
                "Return -1 if not found",
            ],
        },
        AlgorithmKind::BreadthFirstSearch => AlgorithmInfo {
            kind,
            name: "Breadth-First Search (BFS)",
            description: "Breadth-First Search traverses a graph level by level, visiting \
                every neighbor of a node before moving on to the neighbors' neighbors.",
            code_snippet: BFS_CODE,
            time_complexity: "O(V + E)",
            space_complexity: "O(V)",
            // Node ids A..F of the sample graph
            sample_input: vec![0, 1, 2, 3, 4, 5],
            sample_target: None,
            outline: vec![
                "Start at a given node",
                "Visit every neighbor first",
                "Move outward one level at a time",
            ],
        },
        AlgorithmKind::DepthFirstSearch => AlgorithmInfo {
            kind,
            name: "Depth-First Search (DFS)",
            description: "Depth-First Search is an algorithm for traversing or searching \
                tree or graph data structures by exploring as far as possible along each \
                branch before backtracking.",
            code_snippet: DFS_CODE,
            time_complexity: "O(V + E)",
            space_complexity: "O(V)",
            // Node ids A..F of the sample graph
            sample_input: vec![0, 1, 2, 3, 4, 5],
            sample_target: None,
            outline: vec![
                "Start at a given node",
                "Explore as far as possible",
                "Backtrack and explore other branches",
            ],
        },
    }
}

const BUBBLE_SORT_CODE: &str = r#"def bubble_sort(arr):
    n = len(arr)
    for i in range(n):
        # Last i elements are already in place
        for j in range(0, n-i-1):
            # Swap if the element found is greater
            if arr[j] > arr[j+1]:
                arr[j], arr[j+1] = arr[j+1], arr[j]
    return arr

numbers = [64, 34, 25, 12, 22, 11, 90]
print(bubble_sort(numbers))  # [11, 12, 22, 25, 34, 64, 90]"#;

const QUICK_SORT_CODE: &str = r#"def quick_sort(arr, lo, hi):
    if lo >= hi:
        return
    # Rightmost element is the pivot
    pivot = arr[hi]
    i = lo - 1
    for j in range(lo, hi):
        if arr[j] <= pivot:
            i += 1
            arr[i], arr[j] = arr[j], arr[i]
    arr[i+1], arr[hi] = arr[hi], arr[i+1]
    # Left part first, then right part
    quick_sort(arr, lo, i)
    quick_sort(arr, i+2, hi)"#;

const MERGE_SORT_CODE: &str = r#"def merge_sort(arr):
    if len(arr) <= 1:
        return arr
    # Divide the array into two halves
    mid = len(arr) // 2
    left = merge_sort(arr[:mid])
    right = merge_sort(arr[mid:])
    return merge(left, right)

def merge(left, right):
    result = []
    i, j = 0, 0
    while i < len(left) and j < len(right):
        if left[i] <= right[j]:
            result.append(left[i])
            i += 1
        else:
            result.append(right[j])
            j += 1
    result.extend(left[i:])
    result.extend(right[j:])
    return result"#;

const BINARY_SEARCH_CODE: &str = r#"def binary_search(arr, target):
    left, right = 0, len(arr) - 1
    while left <= right:
        mid = (left + right) // 2
        if arr[mid] == target:
            return mid
        # Target is greater, ignore left half
        elif arr[mid] < target:
            left = mid + 1
        # Target is smaller, ignore right half
        else:
            right = mid - 1
    return -1

sorted_array = [11, 12, 22, 25, 34, 64, 90]
print(binary_search(sorted_array, 34))  # 4"#;

const INSERTION_SORT_CODE: &str = r#"def insertion_sort(arr):
    for i in range(1, len(arr)):
        key = arr[i]
        j = i - 1
        # Move elements greater than key one position ahead
        while j >= 0 and arr[j] > key:
            arr[j + 1] = arr[j]
            j -= 1
        arr[j + 1] = key
    return arr"#;

const SELECTION_SORT_CODE: &str = r#"def selection_sort(arr):
    for i in range(len(arr)):
        # Find the minimum element in the unsorted part
        min_idx = i
        for j in range(i+1, len(arr)):
            if arr[min_idx] > arr[j]:
                min_idx = j
        arr[i], arr[min_idx] = arr[min_idx], arr[i]
    return arr"#;

const LINEAR_SEARCH_CODE: &str = r#"def linear_search(arr, target):
    for i in range(len(arr)):
        if arr[i] == target:
            return i
    return -1"#;

const BFS_CODE: &str = r#"from collections import deque

def bfs(graph, start):
    visited = {start}
    queue = deque([start])
    while queue:
        node = queue.popleft()
        for next in graph[node] - visited:
            visited.add(next)
            queue.append(next)
    return visited"#;

const DFS_CODE: &str = r#"def dfs(graph, start, visited=None):
    if visited is None:
        visited = set()
    visited.add(start)
    for next in graph[start] - visited:
        dfs(graph, next, visited)
    return visited"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_every_kind() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), AlgorithmKind::ALL.len());
        for kind in AlgorithmKind::ALL {
            let info = catalog.get(kind).expect("missing entry");
            assert_eq!(info.kind, kind);
            assert!(!info.sample_input.is_empty());
        }
    }

    #[test]
    fn test_select_by_id() {
        let catalog = Catalog::builtin();
        let info = catalog.select("merge-sort").unwrap();
        assert_eq!(info.name, "Merge Sort");
        assert_eq!(info.time_complexity, "O(n log n)");
        assert_eq!(info.space_complexity, "O(n)");
    }

    #[test]
    fn test_select_unknown() {
        let catalog = Catalog::builtin();
        assert!(matches!(
            catalog.select("heap-sort"),
            Err(VizError::UnknownAlgorithm { .. })
        ));
    }

    #[test]
    fn test_select_missing_from_custom_catalog() {
        let bubble = builtin_entry(AlgorithmKind::BubbleSort);
        let catalog = Catalog::new(vec![bubble]);
        assert!(catalog.select("bubble-sort").is_ok());
        assert_eq!(
            catalog.select("quick-sort"),
            Err(VizError::UnknownAlgorithm {
                id: "quick-sort".to_string()
            })
        );
    }

    #[test]
    fn test_duplicate_entries_replace() {
        let mut first = builtin_entry(AlgorithmKind::BubbleSort);
        first.name = "Old";
        let second = builtin_entry(AlgorithmKind::BubbleSort);
        let catalog = Catalog::new(vec![first, second]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(AlgorithmKind::BubbleSort).unwrap().name, "Bubble Sort");
    }

    #[test]
    fn test_search_entries_carry_targets() {
        let catalog = Catalog::builtin();
        for info in catalog.by_category(Category::Searching) {
            assert_eq!(info.sample_target, Some(SEARCH_TARGET));
        }
    }
}
