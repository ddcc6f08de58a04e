//! Stateless numeric helpers. Nothing here needs an instance.

/// `n³`.
#[must_use]
pub fn cube(n: f64) -> f64 {
    n * n * n
}

/// Length of the hypotenuse of a right triangle with legs `a` and `b`.
///
/// Uses [`f64::hypot`], so large legs do not overflow in the intermediate squares.
#[must_use]
pub fn hypotenuse(a: f64, b: f64) -> f64 {
    a.hypot(b)
}
