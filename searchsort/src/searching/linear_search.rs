/// Front-to-back scan. Returns the lowest index holding `target`.
pub fn linear_search<T: PartialEq>(arr: &[T], target: &T) -> Option<usize> {
    arr.iter().position(|v| v == target)
}
