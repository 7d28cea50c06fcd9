use searchsort::{run, Algorithm, EngineError, Outcome};

const SORT_SELECTIONS: [Algorithm; 10] = [
    Algorithm::SelectionSort,
    Algorithm::InsertionSort,
    Algorithm::MergeSort,
    Algorithm::BubbleSort,
    Algorithm::QuickSort,
    Algorithm::ShellSort,
    Algorithm::RadixSort,
    Algorithm::HeapSort,
    Algorithm::NearlySorted,
    Algorithm::CountingSort,
];

#[test]
fn every_sort_selection_dispatches() {
    for algorithm in SORT_SELECTIONS {
        let mut numbers = vec![5, 3, 8, 1];
        let report = run(algorithm, &mut numbers, None).unwrap();
        assert_eq!(
            report.outcome,
            Outcome::Sorted(vec![1, 3, 5, 8]),
            "{algorithm:?}"
        );
        assert_eq!(report.complexity, algorithm.complexity());
        assert!(report.sorted_input.is_none());
        // In-place contract: the caller's sequence is the sorted one.
        assert_eq!(numbers, vec![1, 3, 5, 8]);
    }
}

#[test]
fn sort_ignores_target_field() {
    let mut numbers = vec![2, 1];
    let report = run(Algorithm::BubbleSort, &mut numbers, Some("nonsense")).unwrap();
    assert_eq!(report.outcome, Outcome::Sorted(vec![1, 2]));
}

#[test]
fn linear_search_scenario() {
    let mut numbers = vec![5, 3, 8, 1];
    let report = run(Algorithm::LinearSearch, &mut numbers, Some("8")).unwrap();
    assert_eq!(report.outcome, Outcome::Found(2));
    assert_eq!(report.complexity, "O(n)");
    assert!(report.sorted_input.is_none());
    // Linear search never reorders the caller's sequence.
    assert_eq!(numbers, vec![5, 3, 8, 1]);
}

#[test]
fn binary_search_surfaces_the_sorted_order() {
    let mut numbers = vec![5, 3, 8, 1];
    let report = run(Algorithm::BinarySearch, &mut numbers, Some("8")).unwrap();
    assert_eq!(report.outcome, Outcome::Found(3));
    assert_eq!(report.sorted_input, Some(vec![1, 3, 5, 8]));
    assert_eq!(numbers, vec![1, 3, 5, 8]);
}

#[test]
fn binary_search_not_found_still_sorts() {
    let mut numbers = vec![5, 3, 8, 1];
    let report = run(Algorithm::BinarySearch, &mut numbers, Some("4")).unwrap();
    assert_eq!(report.outcome, Outcome::NotFound);
    assert_eq!(report.sorted_input, Some(vec![1, 3, 5, 8]));
}

#[test]
fn search_over_empty_sequence_is_not_found() {
    for algorithm in [Algorithm::LinearSearch, Algorithm::BinarySearch] {
        let mut numbers: Vec<i32> = Vec::new();
        let report = run(algorithm, &mut numbers, Some("5")).unwrap();
        assert_eq!(report.outcome, Outcome::NotFound, "{algorithm:?}");
    }
}

#[test]
fn search_without_target_is_rejected() {
    for target in [None, Some(""), Some("  "), Some("eight")] {
        let mut numbers = vec![5, 3, 8, 1];
        let err = run(Algorithm::LinearSearch, &mut numbers, target).unwrap_err();
        assert_eq!(err, EngineError::MissingOrInvalidTarget);
        assert_eq!(numbers, vec![5, 3, 8, 1]);
    }
}

#[test]
fn sorting_empty_and_singleton_sequences() {
    for algorithm in SORT_SELECTIONS {
        let mut empty: Vec<i32> = Vec::new();
        let report = run(algorithm, &mut empty, None).unwrap();
        assert_eq!(report.outcome, Outcome::Sorted(Vec::new()), "{algorithm:?}");

        let mut single = vec![7];
        let report = run(algorithm, &mut single, None).unwrap();
        assert_eq!(report.outcome, Outcome::Sorted(vec![7]), "{algorithm:?}");
    }
}

#[test]
fn titles_match_the_selection() {
    assert_eq!(Algorithm::LinearSearch.title(), "Linear Search Result");
    assert_eq!(Algorithm::BinarySearch.title(), "Binary Search Result");
    assert_eq!(Algorithm::NearlySorted.title(), "Nearly Sorted (Insertion)");
    assert_eq!(Algorithm::CountingSort.title(), "Counting Sort");
}

#[test]
fn complexity_labels_are_static() {
    assert_eq!(Algorithm::BinarySearch.complexity(), "O(log n)");
    assert_eq!(Algorithm::InsertionSort.complexity(), "O(n^2), O(n) best");
    assert_eq!(Algorithm::ShellSort.complexity(), "O(n log n) average");
    assert_eq!(Algorithm::RadixSort.complexity(), "O(nk)");
    assert_eq!(Algorithm::CountingSort.complexity(), "O(n + k)");
    assert_eq!(Algorithm::NearlySorted.complexity(), "O(n)");
}
