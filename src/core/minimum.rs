/// Returns the smaller of `a` and `b`.
///
/// When neither is strictly less than the other (equal values, or an
/// unordered float such as NaN on the left) `b` is returned.
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}
