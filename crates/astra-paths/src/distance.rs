use astra_core::Location;

/// Manhattan (L1) distance between two locations.
#[inline]
pub fn manhattan(a: Location, b: Location) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two locations.
#[inline]
pub fn chebyshev(a: Location, b: Location) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Octile distance: the exact cost of an unobstructed 8-way walk where
/// diagonal steps cost √2 and straight steps cost 1.
#[inline]
pub fn octile(a: Location, b: Location) -> f64 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let (lo, hi) = (dx.min(dy), dx.max(dy));
    f64::from(hi - lo) + std::f64::consts::SQRT_2 * f64::from(lo)
}
