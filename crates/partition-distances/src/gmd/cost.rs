//! Cost functions for the split and merge operations of the generalized merge
//! distance.

use crate::Float;

/// The cost of one split or merge operation.
///
/// A split cost is called as `cost(overlap, remainder)`: a result cluster
/// gives `overlap` of its tokens to a standard cluster and keeps `remainder`
/// of them. A merge cost is called as `cost(overlap, accumulated)`: a
/// contribution of `overlap` tokens joins the `accumulated` tokens already
/// gathered for a standard cluster.
///
/// Any `Fn(usize, usize) -> U` is a cost function.
///
/// # Example
///
/// ```rust
/// use partition_distances::gmd::{CostFunction, Product};
///
/// let half_product = |x: usize, y: usize| 0.5 * (x * y) as f64;
///
/// assert_eq!(CostFunction::<f64>::cost(&Product, 3, 4), 12.0);
/// assert_eq!(CostFunction::<f64>::cost(&half_product, 3, 4), 6.0);
/// assert_eq!(CostFunction::<f64>::name(&half_product), "custom");
/// ```
pub trait CostFunction<U: Float> {
    /// The cost of an operation on groups of `x` and `y` tokens.
    fn cost(&self, x: usize, y: usize) -> U;

    /// The name of the cost function.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<U: Float, F: Fn(usize, usize) -> U> CostFunction<U> for F {
    fn cost(&self, x: usize, y: usize) -> U {
        self(x, y)
    }
}

/// Every operation costs one. Used by the basic merge distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unit;

impl<U: Float> CostFunction<U> for Unit {
    fn cost(&self, _: usize, _: usize) -> U {
        U::one()
    }

    fn name(&self) -> &str {
        "unit"
    }
}

/// Every operation is free.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

impl<U: Float> CostFunction<U> for Zero {
    fn cost(&self, _: usize, _: usize) -> U {
        U::zero()
    }

    fn name(&self) -> &str {
        "zero"
    }
}

/// An operation costs the number of token pairs it separates or joins, `x * y`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Product;

impl<U: Float> CostFunction<U> for Product {
    fn cost(&self, x: usize, y: usize) -> U {
        U::from_count(x) * U::from_count(y)
    }

    fn name(&self) -> &str {
        "product"
    }
}

/// The change in entropy of an operation over a set of `n` tokens,
/// `h(x + y) - h(x) - h(y)` with `h(v) = (v / n) ln(v / n)`.
///
/// Used for the variation of information.
#[derive(Debug, Clone, Copy)]
pub struct Entropy {
    /// The number of distinct tokens the fractions are taken over.
    n: usize,
}

impl Entropy {
    /// An entropy cost over `n` distinct tokens.
    #[must_use]
    pub const fn new(n: usize) -> Self {
        Self { n }
    }

    /// The number of distinct tokens.
    #[must_use]
    pub const fn n(&self) -> usize {
        self.n
    }
}

impl<U: Float> CostFunction<U> for Entropy {
    fn cost(&self, x: usize, y: usize) -> U {
        entropy_term::<U>(x + y, self.n) - entropy_term::<U>(x, self.n) - entropy_term::<U>(y, self.n)
    }

    fn name(&self) -> &str {
        "entropy"
    }
}

/// `(v / n) ln(v / n)`, taken as zero when `v` or `n` is zero.
#[must_use]
pub fn entropy_term<U: Float>(v: usize, n: usize) -> U {
    if v == 0 || n == 0 {
        U::zero()
    } else {
        let fraction = U::from_count(v) / U::from_count(n);
        fraction * fraction.ln()
    }
}
