//! The `Float` trait is used to represent costs, distances and scores.
//!
//! It extends the `Float` trait of the `distances` crate with the few
//! operations the metrics need on top of it: conversion from counts, the
//! natural logarithm and zero-safe ratios. Cost functions produce `Float`s
//! and every metric in the crate is generic over the `Float` it returns. We
//! provide implementations for `f32` and `f64`.

use core::{
    fmt::{Debug, Display},
    iter::Sum,
    ops::{Add, AddAssign, Div, Mul, Sub},
};

use distances::Number;

/// A floating point number used for costs and scores.
pub trait Float:
    distances::number::Float
    + Copy
    + PartialOrd
    + Debug
    + Display
    + Add<Output = Self>
    + AddAssign<Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Sum<Self>
{
    /// Converts a count of tokens, clusters or pairs to `Self`. This may be a
    /// lossy conversion for very large counts.
    fn from_count(n: usize) -> Self {
        <Self as Number>::from(n)
    }

    /// Returns the natural logarithm of `self`.
    #[must_use]
    fn ln(self) -> Self;

    /// Whether `self` is exactly zero.
    fn is_zero(self) -> bool {
        self == Self::zero()
    }

    /// Returns `numerator / denominator`, or zero when the denominator is
    /// exactly zero.
    #[must_use]
    fn ratio_or_zero(numerator: Self, denominator: Self) -> Self {
        if denominator.is_zero() {
            Self::zero()
        } else {
            numerator / denominator
        }
    }

    /// The harmonic mean of two scores. Two zeros have a harmonic mean of zero.
    #[must_use]
    fn harmonic_mean(a: Self, b: Self) -> Self {
        Self::ratio_or_zero((Self::one() + Self::one()) * a * b, a + b)
    }
}

/// Macro to implement `Float` for the primitive floating point types.
macro_rules! impl_float {
    ($($ty:ty => $ln:path),*) => {
        $(
            impl Float for $ty {
                fn ln(self) -> Self {
                    $ln(self)
                }
            }
        )*
    }
}

impl_float!(f32 => libm::logf, f64 => libm::log);
