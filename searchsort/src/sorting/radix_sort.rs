//! Least-significant-digit radix sort, base 10.
//!
//! Variables:
//!   exp   : i64 — current digit weight: 1, 10, 100, ...
//!   digit : (v / exp).rem_euclid(10)
//!
//! Loop invariant: after the pass at weight `exp`, the array is stably
//! ordered by the digits up to and including `exp`.
//!
//! Digit extraction assumes non-negative values. Negative inputs still run
//! to completion (rem_euclid never yields a negative bucket), but their
//! ordering in the output is wrong; that limitation is part of the contract.
//! When the maximum is <= 0 the exponent loop never starts and the slice is
//! left untouched.

pub fn radix_sort(arr: &mut [i32]) {
    let max = match arr.iter().max() {
        Some(&m) => i64::from(m),
        None => return,
    };
    let mut exp: i64 = 1;
    while max / exp > 0 {
        counting_pass(arr, exp);
        exp *= 10;
    }
}

// One stable counting sort keyed on the digit at weight `exp`.
fn counting_pass(arr: &mut [i32], exp: i64) {
    let mut output = vec![0; arr.len()];
    let mut count = [0usize; 10];
    for &v in arr.iter() {
        count[digit(v, exp)] += 1;
    }
    for d in 1..10 {
        count[d] += count[d - 1];
    }
    for &v in arr.iter().rev() {
        let d = digit(v, exp);
        count[d] -= 1;
        output[count[d]] = v;
    }
    arr.copy_from_slice(&output);
}

fn digit(v: i32, exp: i64) -> usize {
    (i64::from(v) / exp).rem_euclid(10) as usize
}
