//! Closed set of numeric kinds accepted by the scaling routines.

mod sealed {
    pub trait Sealed {}
}

/// Primitive numeric types that can be scaled and rendered.
///
/// Implemented for every primitive integer and float type and nothing
/// else; the trait is sealed so the set stays closed. Conversion to
/// `f64` is how a value enters the shared scaling path, so very large
/// 64-bit integers lose precision past 2^53 — acceptable for display
/// output.
pub trait Scalable: sealed::Sealed + Copy {
    fn to_f64(self) -> f64;
}

macro_rules! impl_scalable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Scalable for $ty {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_scalable!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
