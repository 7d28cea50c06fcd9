/// Gapped insertion sort with the plain halving gap sequence n/2, n/4, .., 1.
pub fn shell_sort<T: Ord>(arr: &mut [T]) {
    let mut gap = arr.len() / 2;
    while gap > 0 {
        for i in gap..arr.len() {
            let mut j = i;
            while j >= gap && arr[j - gap] > arr[j] {
                arr.swap(j - gap, j);
                j -= gap;
            }
        }
        gap /= 2;
    }
}
