//! Once-computed stencil lookup.
//!
//! [`StencilCache`] memoises stencils by `(order, offsets)`. Operators that
//! share an element type and error order can obtain the same
//! `Arc<Stencil<T>>` instead of recomputing the coefficients.

use std::sync::Arc;

use indexmap::IndexMap;
use spinodal_core::{Real, StencilError};

use crate::central::central_offsets;
use crate::coefficients::{fd_stencil, Offsets, Stencil};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct StencilKey {
    order: usize,
    offsets: Offsets,
}

/// Memoised stencils keyed by derivative order and offset set.
///
/// Entries are never evicted. Failed computations are not cached.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use spinodal_stencil::StencilCache;
///
/// let mut cache = StencilCache::<f64>::new();
/// let a = cache.central(4, 2).unwrap();
/// let b = cache.central(4, 2).unwrap();
/// assert!(Arc::ptr_eq(&a, &b));
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug)]
pub struct StencilCache<T> {
    entries: IndexMap<StencilKey, Arc<Stencil<T>>>,
}

impl<T: Real> StencilCache<T> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Return the stencil for `order` over `offsets`, computing it on first
    /// request.
    pub fn get_or_compute(
        &mut self,
        order: usize,
        offsets: &[i64],
    ) -> Result<Arc<Stencil<T>>, StencilError> {
        let key = StencilKey {
            order,
            offsets: offsets.iter().copied().collect(),
        };
        if let Some(stencil) = self.entries.get(&key) {
            return Ok(Arc::clone(stencil));
        }

        let stencil = Arc::new(fd_stencil(order, offsets)?);
        log::debug!(
            "stencil cache miss: order {order}, offsets {offsets:?} -> weights {:?}",
            stencil.weights()
        );
        self.entries.insert(key, Arc::clone(&stencil));
        Ok(stencil)
    }

    /// Central stencil of width `error_order + 1` for derivative `order`.
    pub fn central(
        &mut self,
        error_order: usize,
        order: usize,
    ) -> Result<Arc<Stencil<T>>, StencilError> {
        let offsets = central_offsets(error_order)?;
        self.get_or_compute(order, &offsets)
    }

    /// Number of cached stencils.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no stencils.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every cached stencil. Outstanding `Arc`s stay valid.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T: Real> Default for StencilCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
