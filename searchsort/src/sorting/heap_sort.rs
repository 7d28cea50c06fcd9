pub fn heap_sort<T: Ord>(arr: &mut [T]) {
    let n = arr.len();
    // Heapify bottom-up from the last parent index.
    for i in (0..n / 2).rev() {
        sift_down(arr, n, i);
    }
    for end in (1..n).rev() {
        arr.swap(0, end);
        sift_down(arr, end, 0);
    }
}

// Restores the max-heap property for the prefix heap of length `n`, walking
// down from `i` while a child exceeds its parent. Ties keep the parent.
fn sift_down<T: Ord>(arr: &mut [T], n: usize, mut i: usize) {
    loop {
        let (l, r) = (2 * i + 1, 2 * i + 2);
        let mut largest = i;
        if l < n && arr[l] > arr[largest] {
            largest = l;
        }
        if r < n && arr[r] > arr[largest] {
            largest = r;
        }
        if largest == i {
            return;
        }
        arr.swap(i, largest);
        i = largest;
    }
}
