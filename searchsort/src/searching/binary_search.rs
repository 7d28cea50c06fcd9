//! Closed-interval binary search over an ascending slice.
//!
//! Variables:
//!   low, high : i64 — inclusive bounds, signed so `high = mid - 1` is safe
//!   mid       : low + (high - low) / 2  — overflow-safe midpoint
//!
//! Returns the first exact match hit while narrowing; with duplicate targets
//! this is not necessarily the lowest matching index.

use core::cmp::Ordering;

pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let mut low: i64 = 0;
    let mut high: i64 = arr.len() as i64 - 1;
    while low <= high {
        let mid = low + (high - low) / 2;
        match arr[mid as usize].cmp(target) {
            Ordering::Equal => return Some(mid as usize),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid - 1,
        }
    }
    None
}
