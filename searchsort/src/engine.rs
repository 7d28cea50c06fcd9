//! Selection dispatch, target validation, and single-shot timing.
//!
//! `run` is the one entry point: it validates the search target where one is
//! required, wraps a monotonic-clock measurement strictly around the
//! algorithm call, and pairs the outcome with the textbook complexity label
//! for the selection.

use std::time::Instant;

use crate::error::EngineError;
use crate::input::parse_target;
use crate::searching::binary_search::binary_search;
use crate::searching::linear_search::linear_search;
use crate::sorting::bubble_sort::bubble_sort;
use crate::sorting::counting_sort::counting_sort;
use crate::sorting::heap_sort::heap_sort;
use crate::sorting::insertion_sort::insertion_sort;
use crate::sorting::merge_sort::merge_sort;
use crate::sorting::quick_sort::quick_sort;
use crate::sorting::radix_sort::radix_sort;
use crate::sorting::selection_sort::selection_sort;
use crate::sorting::shell_sort::shell_sort;

/// The closed set of selectable algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    LinearSearch,
    BinarySearch,
    SelectionSort,
    InsertionSort,
    MergeSort,
    BubbleSort,
    QuickSort,
    ShellSort,
    RadixSort,
    HeapSort,
    NearlySorted,
    CountingSort,
}

impl Algorithm {
    /// Display heading for the result block.
    pub fn title(self) -> &'static str {
        match self {
            Algorithm::LinearSearch => "Linear Search Result",
            Algorithm::BinarySearch => "Binary Search Result",
            Algorithm::SelectionSort => "Selection Sort",
            Algorithm::InsertionSort => "Insertion Sort",
            Algorithm::MergeSort => "Merge Sort",
            Algorithm::BubbleSort => "Bubble Sort",
            Algorithm::QuickSort => "Quick Sort",
            Algorithm::ShellSort => "Shell Sort",
            Algorithm::RadixSort => "Radix Sort",
            Algorithm::HeapSort => "Heap Sort",
            Algorithm::NearlySorted => "Nearly Sorted (Insertion)",
            Algorithm::CountingSort => "Counting Sort",
        }
    }

    /// Static textbook bound for the selection. Documents the asymptote,
    /// never a measurement. NearlySorted advertises insertion sort's best
    /// case; the routine itself is unchanged.
    pub fn complexity(self) -> &'static str {
        match self {
            Algorithm::LinearSearch => "O(n)",
            Algorithm::BinarySearch => "O(log n)",
            Algorithm::SelectionSort => "O(n^2)",
            Algorithm::InsertionSort => "O(n^2), O(n) best",
            Algorithm::MergeSort => "O(n log n)",
            Algorithm::BubbleSort => "O(n^2)",
            Algorithm::QuickSort => "O(n log n)",
            Algorithm::ShellSort => "O(n log n) average",
            Algorithm::RadixSort => "O(nk)",
            Algorithm::HeapSort => "O(n log n)",
            Algorithm::NearlySorted => "O(n)",
            Algorithm::CountingSort => "O(n + k)",
        }
    }

    pub fn is_search(self) -> bool {
        matches!(self, Algorithm::LinearSearch | Algorithm::BinarySearch)
    }
}

/// What the selected algorithm produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The reordered sequence, for sort selections.
    Sorted(Vec<i32>),
    /// Index of the target, for search selections.
    Found(usize),
    NotFound,
}

/// One finished run: outcome, wall-clock nanoseconds around the algorithm
/// call alone, and the static complexity label.
#[derive(Debug, Clone)]
pub struct Report {
    pub algorithm: Algorithm,
    pub outcome: Outcome,
    pub elapsed_ns: u128,
    pub complexity: &'static str,
    /// The order binary search actually ran against. `None` for every other
    /// selection.
    pub sorted_input: Option<Vec<i32>>,
}

/// Execute `algorithm` over `numbers`.
///
/// Sort selections reorder `numbers` in place and echo the result in the
/// report. Search selections require `target` text that parses as an i32 and
/// never mutate the sequence, except BinarySearch, which sorts it ascending
/// as a precondition and surfaces that order via `sorted_input`. An empty
/// sequence against a search is Not Found, not an error.
pub fn run(
    algorithm: Algorithm,
    numbers: &mut Vec<i32>,
    target: Option<&str>,
) -> Result<Report, EngineError> {
    if algorithm.is_search() {
        return run_search(algorithm, numbers, target);
    }
    let start = Instant::now();
    run_sort(algorithm, numbers);
    let elapsed_ns = start.elapsed().as_nanos();
    Ok(Report {
        algorithm,
        outcome: Outcome::Sorted(numbers.clone()),
        elapsed_ns,
        complexity: algorithm.complexity(),
        sorted_input: None,
    })
}

fn run_search(
    algorithm: Algorithm,
    numbers: &mut Vec<i32>,
    target: Option<&str>,
) -> Result<Report, EngineError> {
    // Target validation happens before any mutation, so an errored run is a
    // true no-op even for BinarySearch.
    let target = parse_target(target)?;
    let presorted = algorithm == Algorithm::BinarySearch;
    if presorted {
        numbers.sort_unstable();
    }
    let start = Instant::now();
    let hit = match algorithm {
        Algorithm::LinearSearch => linear_search(numbers, &target),
        _ => binary_search(numbers, &target),
    };
    let elapsed_ns = start.elapsed().as_nanos();
    Ok(Report {
        algorithm,
        outcome: hit.map_or(Outcome::NotFound, Outcome::Found),
        elapsed_ns,
        complexity: algorithm.complexity(),
        sorted_input: presorted.then(|| numbers.clone()),
    })
}

fn run_sort(algorithm: Algorithm, numbers: &mut [i32]) {
    match algorithm {
        Algorithm::SelectionSort => selection_sort(numbers),
        Algorithm::InsertionSort | Algorithm::NearlySorted => insertion_sort(numbers),
        Algorithm::MergeSort => merge_sort(numbers),
        Algorithm::BubbleSort => bubble_sort(numbers),
        Algorithm::QuickSort => quick_sort(numbers),
        Algorithm::ShellSort => shell_sort(numbers),
        Algorithm::RadixSort => radix_sort(numbers),
        Algorithm::HeapSort => heap_sort(numbers),
        Algorithm::CountingSort => counting_sort(numbers),
        // Searches are routed through run_search before this point.
        Algorithm::LinearSearch | Algorithm::BinarySearch => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_error_leaves_sequence_untouched() {
        let mut numbers = vec![5, 3, 8, 1];
        let err = run(Algorithm::BinarySearch, &mut numbers, None).unwrap_err();
        assert_eq!(err, EngineError::MissingOrInvalidTarget);
        assert_eq!(numbers, vec![5, 3, 8, 1]);
    }

    #[test]
    fn nearly_sorted_shares_insertion_behavior() {
        let mut a = vec![2, 1, 3, 5, 4];
        let mut b = a.clone();
        let ra = run(Algorithm::InsertionSort, &mut a, None).unwrap();
        let rb = run(Algorithm::NearlySorted, &mut b, None).unwrap();
        assert_eq!(ra.outcome, rb.outcome);
        assert_eq!(rb.complexity, "O(n)");
    }
}
