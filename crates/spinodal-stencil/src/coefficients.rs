//! The stencil coefficient engine.

use smallvec::{smallvec, SmallVec};
use spinodal_core::{Real, StencilError};

/// Inline storage for sample offsets. Stencils wider than 16 points spill
/// to the heap.
pub type Offsets = SmallVec<[i64; 16]>;

/// Finite-difference weights for one derivative order over a fixed set of
/// sample offsets.
///
/// Construction goes through [`fd_stencil`] or
/// [`central_stencil`](crate::central_stencil), which validate the offsets,
/// so a `Stencil` always has at least `order + 1` distinct points.
#[derive(Clone, Debug, PartialEq)]
pub struct Stencil<T> {
    order: usize,
    offsets: Offsets,
    weights: SmallVec<[T; 16]>,
}

impl<T: Real> Stencil<T> {
    /// Derivative order this stencil approximates.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Sample offsets, in the order they were supplied.
    pub fn offsets(&self) -> &[i64] {
        &self.offsets
    }

    /// Weights, one per offset.
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Number of sample points.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always returns `false`: construction rejects empty offset sets.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// `(offset, weight)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (i64, T)> + '_ {
        self.offsets.iter().copied().zip(self.weights.iter().copied())
    }

    /// Weighted sum `Σ w_i · sample(offset_i)` for unit spacing.
    pub fn apply(&self, mut sample: impl FnMut(i64) -> T) -> T {
        self.iter().map(|(offset, w)| w * sample(offset)).sum()
    }

    /// Derivative estimate at spacing `h`: [`apply`](Self::apply) divided by
    /// `h^order`.
    pub fn apply_scaled(&self, h: T, sample: impl FnMut(i64) -> T) -> T {
        self.apply(sample) / h.powi(self.order as i32)
    }

    /// Consume the stencil, returning its weights.
    pub fn into_weights(self) -> Vec<T> {
        self.weights.into_vec()
    }
}

/// Elementary symmetric polynomial `e_k` of `values`.
///
/// Uses the O(k·M) recurrence instead of enumerating all `k`-subsets: a
/// running array of `M - k + 1` partial sums seeded with one, where each of
/// the `k` passes consumes one more input value. Returns one for `k == 0`
/// and zero when `k` exceeds the number of values.
///
/// # Examples
///
/// ```
/// use spinodal_stencil::elementary_symmetric;
///
/// let v = [1.0, 2.0, 3.0];
/// assert_eq!(elementary_symmetric(1, &v), 6.0);
/// assert_eq!(elementary_symmetric(2, &v), 11.0);
/// assert_eq!(elementary_symmetric(3, &v), 6.0);
/// ```
pub fn elementary_symmetric<T: Real>(k: usize, values: &[T]) -> T {
    let m = values.len();
    if k > m {
        return T::zero();
    }

    let width = m - k + 1;
    let mut e: SmallVec<[T; 16]> = smallvec![T::one(); width];

    for pass in 0..k {
        e[0] *= values[pass];
        for j in 1..width {
            e[j] = values[pass + j] * e[j] + e[j - 1];
        }
    }

    e[width - 1]
}

/// Compute finite-difference weights for derivative `order` sampled at
/// `offsets` (in units of the grid spacing).
///
/// For each point `i`, the weight is
/// `order! · (−1)^(N−order+1) · e_{N−order−1}(x_j, j≠i) / Π_{j≠i}(x_i − x_j)`.
///
/// Coefficients are computed in `T`. Intermediate products grow quickly
/// with the stencil width, so very wide `f32` stencils lose several digits.
///
/// # Errors
///
/// - [`StencilError::InvalidOrder`] if `offsets` is empty or
///   `order > offsets.len() - 1`.
/// - [`StencilError::DegenerateStencil`] if an offset is repeated.
///
/// # Examples
///
/// ```
/// use spinodal_stencil::fd_stencil;
///
/// let forward = fd_stencil::<f64>(1, &[0, 1, 2]).unwrap();
/// assert_eq!(forward.weights(), &[-1.5, 2.0, -0.5]);
/// ```
pub fn fd_stencil<T: Real>(order: usize, offsets: &[i64]) -> Result<Stencil<T>, StencilError> {
    let n = offsets.len();
    if n == 0 || order >= n {
        return Err(StencilError::InvalidOrder { order, samples: n });
    }
    for (i, &offset) in offsets.iter().enumerate() {
        if offsets[..i].contains(&offset) {
            return Err(StencilError::DegenerateStencil { offset });
        }
    }

    let sign = if (n - order) % 2 == 0 {
        -T::one()
    } else {
        T::one()
    };
    let factor = (2..=order).fold(sign, |acc, k| acc * T::of_usize(k));
    let k = n - order - 1;

    let points: SmallVec<[T; 16]> = offsets.iter().map(|&o| T::of_i64(o)).collect();
    let mut rest: SmallVec<[T; 16]> = SmallVec::with_capacity(n - 1);
    let mut weights: SmallVec<[T; 16]> = SmallVec::with_capacity(n);

    for (i, &xi) in points.iter().enumerate() {
        rest.clear();
        let mut denom = T::one();
        for (j, &xj) in points.iter().enumerate() {
            if j != i {
                denom *= xi - xj;
                rest.push(xj);
            }
        }
        weights.push(factor * elementary_symmetric(k, &rest) / denom);
    }

    Ok(Stencil {
        order,
        offsets: offsets.iter().copied().collect(),
        weights,
    })
}
