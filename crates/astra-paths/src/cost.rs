use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::Add;

/// Numeric path cost: accumulated from the start, or estimated to the goal.
///
/// Costs must be totally ordered so the frontier can rank candidates; float
/// costs use the IEEE 754 total order.
pub trait PathCost: Copy + Debug + Add<Output = Self> {
    /// Cost of the empty path.
    const ZERO: Self;

    /// Total comparison of two costs.
    fn cmp_cost(&self, other: &Self) -> Ordering;

    /// Sum of two costs, clamped at the type's maximum instead of
    /// overflowing.
    fn saturating_add(self, other: Self) -> Self;

    #[inline]
    fn strictly_less(&self, other: &Self) -> bool {
        self.cmp_cost(other) == Ordering::Less
    }
}

macro_rules! int_cost {
    ($($t:ty),*) => {
        $(
            impl PathCost for $t {
                const ZERO: Self = 0;

                #[inline]
                fn cmp_cost(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }

                #[inline]
                fn saturating_add(self, other: Self) -> Self {
                    <$t>::saturating_add(self, other)
                }
            }
        )*
    };
}

macro_rules! float_cost {
    ($($t:ty),*) => {
        $(
            impl PathCost for $t {
                const ZERO: Self = 0.0;

                #[inline]
                fn cmp_cost(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }

                // Floats already saturate to infinity.
                #[inline]
                fn saturating_add(self, other: Self) -> Self {
                    self + other
                }
            }
        )*
    };
}

int_cost!(i32, i64, u32, u64);
float_cost!(f32, f64);
