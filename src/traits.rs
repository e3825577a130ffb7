use core::fmt::Debug;
use num_traits::Float;

/// Trait for types that can be used as matrix elements.
///
/// Covers the real floating-point types `f32` and `f64`. All algorithms in
/// this crate are written against `RealScalar` rather than a concrete float
/// type; `Float` supplies arithmetic, `abs`, `sqrt`, `ln`, `hypot`, `nan`
/// and friends, and the two promotion methods cover the places where an
/// algorithm needs a literal constant or a dimension as a scalar.
pub trait RealScalar: Float + Debug {
    /// Promote an `f64` constant into `Self`.
    ///
    /// A plain `as` cast: constants outside the target's range saturate or
    /// underflow the way the cast does (e.g. `1.0e-100` becomes `0.0` in
    /// `f32`).
    fn from_f64(v: f64) -> Self;

    /// Promote a dimension count into `Self`.
    fn from_usize(v: usize) -> Self;
}

macro_rules! impl_real_scalar {
    ($($t:ty),*) => {
        $(
            impl RealScalar for $t {
                #[inline]
                fn from_f64(v: f64) -> $t {
                    v as $t
                }

                #[inline]
                fn from_usize(v: usize) -> $t {
                    v as $t
                }
            }
        )*
    };
}

impl_real_scalar!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_f64_roundtrip() {
        assert_eq!(<f64 as RealScalar>::from_f64(0.25), 0.25);
        assert_eq!(<f32 as RealScalar>::from_f64(0.25), 0.25_f32);
    }

    #[test]
    fn from_usize() {
        assert_eq!(<f64 as RealScalar>::from_usize(9), 9.0);
    }

    #[test]
    fn f32_underflow_is_zero() {
        // 1e-100 is below f32's subnormal range
        assert_eq!(<f32 as RealScalar>::from_f64(1.0e-100), 0.0_f32);
    }
}
