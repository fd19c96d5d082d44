//! Greatest common divisor on the naturals.

/// Greatest common divisor with the convention `gcd(0, 0) = 0`.
///
/// Division-based Euclidean algorithm. The loop tests the divisor before
/// every `%`, so no input ever reaches a modulo by zero, and `gcd(0, 0)`
/// returns `0` straight out of the loop.
///
/// # Example
///
/// ```
/// use gcd_endo::gcd;
///
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(7, 0), 7);
/// assert_eq!(gcd(0, 7), 7);
/// assert_eq!(gcd(0, 0), 0);
/// ```
#[inline]
#[must_use]
pub const fn gcd(mut x: usize, mut y: usize) -> usize {
    while y != 0 {
        (x, y) = (y, x % y);
    }
    x
}
