/// Frequency-table sort over the value range `max - min + 1`. The table
/// allocation grows with the range, not the input length; a sparse input
/// over a wide range allocates accordingly, with no comparison-sort
/// fallback. Range arithmetic runs in i64 so extreme i32 spans don't
/// overflow.
pub fn counting_sort(arr: &mut [i32]) {
    let (Some(&min), Some(&max)) = (arr.iter().min(), arr.iter().max()) else {
        return;
    };
    let (min, max) = (i64::from(min), i64::from(max));
    let range = (max - min + 1) as usize;
    let mut count = vec![0usize; range];
    for &v in arr.iter() {
        count[(i64::from(v) - min) as usize] += 1;
    }
    let mut idx = 0;
    for (offset, &occurrences) in count.iter().enumerate() {
        for _ in 0..occurrences {
            arr[idx] = (min + offset as i64) as i32;
            idx += 1;
        }
    }
}
