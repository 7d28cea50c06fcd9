/// Adjacent-swap passes over a shrinking unsorted suffix. No early exit on a
/// swap-free pass: the pass count is always n-1.
pub fn bubble_sort<T: Ord>(arr: &mut [T]) {
    let n = arr.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
            }
        }
    }
}
