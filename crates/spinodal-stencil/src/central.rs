//! Central-difference offsets and stencils.

use crate::coefficients::{fd_stencil, Offsets, Stencil};
use spinodal_core::{Real, StencilError};

/// Symmetric offsets `{-error_order/2, ..., +error_order/2}`.
///
/// # Errors
///
/// [`StencilError::InvalidStencilOrder`] if `error_order` is odd or zero.
///
/// # Examples
///
/// ```
/// use spinodal_stencil::central_offsets;
///
/// assert_eq!(central_offsets(4).unwrap().as_slice(), &[-2, -1, 0, 1, 2]);
/// assert!(central_offsets(3).is_err());
/// ```
pub fn central_offsets(error_order: usize) -> Result<Offsets, StencilError> {
    if error_order < 2 || error_order % 2 != 0 {
        return Err(StencilError::InvalidStencilOrder { error_order });
    }
    let half = (error_order / 2) as i64;
    Ok((-half..=half).collect())
}

/// Central stencil of width `error_order + 1` for derivative `order`.
///
/// # Errors
///
/// [`StencilError::InvalidStencilOrder`] for an odd or zero `error_order`,
/// [`StencilError::InvalidOrder`] if `order > error_order`.
pub fn central_stencil<T: Real>(
    error_order: usize,
    order: usize,
) -> Result<Stencil<T>, StencilError> {
    let offsets = central_offsets(error_order)?;
    fd_stencil(order, &offsets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_weights(actual: &[f64], expected: &[f64], context: &str) {
        assert_eq!(actual.len(), expected.len(), "{context}: length mismatch");
        for (a, e) in actual.iter().zip(expected) {
            assert!(
                (a - e).abs() < 1e-9 * e.abs().max(1.0),
                "{context}: got {actual:?}, expected {expected:?}"
            );
        }
    }

    #[test]
    fn offsets_are_symmetric_and_contiguous() {
        for k in 1..=10 {
            let error_order = 2 * k;
            let offsets = central_offsets(error_order).unwrap();
            assert_eq!(offsets.len(), error_order + 1);
            for (i, &o) in offsets.iter().enumerate() {
                assert_eq!(o, i as i64 - k as i64);
            }
        }
    }

    #[test]
    fn rejects_odd_or_zero_error_order() {
        for bad in [0, 1, 3, 7] {
            assert_eq!(
                central_offsets(bad),
                Err(StencilError::InvalidStencilOrder { error_order: bad })
            );
            assert!(central_stencil::<f64>(bad, 1).is_err());
        }
    }

    #[test]
    fn rejects_order_above_width() {
        assert_eq!(
            central_stencil::<f64>(2, 3),
            Err(StencilError::InvalidOrder {
                order: 3,
                samples: 3
            })
        );
    }

    #[test]
    fn central_difference_table() {
        // Reference values: Fornberg's central finite-difference table.
        let table: [(usize, &[&[f64]]); 4] = [
            (2, &[&[-0.5, 0.0, 0.5], &[1.0, -2.0, 1.0]]),
            (
                4,
                &[
                    &[1.0 / 12.0, -2.0 / 3.0, 0.0, 2.0 / 3.0, -1.0 / 12.0],
                    &[-1.0 / 12.0, 4.0 / 3.0, -5.0 / 2.0, 4.0 / 3.0, -1.0 / 12.0],
                    &[-0.5, 1.0, 0.0, -1.0, 0.5],
                    &[1.0, -4.0, 6.0, -4.0, 1.0],
                ],
            ),
            (
                6,
                &[
                    &[-1.0 / 60.0, 3.0 / 20.0, -3.0 / 4.0, 0.0, 3.0 / 4.0, -3.0 / 20.0, 1.0 / 60.0],
                    &[1.0 / 90.0, -3.0 / 20.0, 1.5, -49.0 / 18.0, 1.5, -3.0 / 20.0, 1.0 / 90.0],
                    &[1.0 / 8.0, -1.0, 13.0 / 8.0, 0.0, -13.0 / 8.0, 1.0, -1.0 / 8.0],
                    &[-1.0 / 6.0, 2.0, -6.5, 28.0 / 3.0, -6.5, 2.0, -1.0 / 6.0],
                    &[-0.5, 2.0, -2.5, 0.0, 2.5, -2.0, 0.5],
                    &[1.0, -6.0, 15.0, -20.0, 15.0, -6.0, 1.0],
                ],
            ),
            (
                8,
                &[
                    &[
                        1.0 / 280.0, -4.0 / 105.0, 0.2, -0.8, 0.0, 0.8, -0.2, 4.0 / 105.0,
                        -1.0 / 280.0,
                    ],
                    &[
                        -1.0 / 560.0, 8.0 / 315.0, -0.2, 1.6, -205.0 / 72.0, 1.6, -0.2,
                        8.0 / 315.0, -1.0 / 560.0,
                    ],
                    &[
                        -7.0 / 240.0, 0.3, -169.0 / 120.0, 61.0 / 30.0, 0.0, -61.0 / 30.0,
                        169.0 / 120.0, -0.3, 7.0 / 240.0,
                    ],
                    &[
                        7.0 / 240.0, -0.4, 169.0 / 60.0, -122.0 / 15.0, 91.0 / 8.0,
                        -122.0 / 15.0, 169.0 / 60.0, -0.4, 7.0 / 240.0,
                    ],
                    &[
                        1.0 / 6.0, -1.5, 13.0 / 3.0, -29.0 / 6.0, 0.0, 29.0 / 6.0, -13.0 / 3.0,
                        1.5, -1.0 / 6.0,
                    ],
                    &[-0.25, 3.0, -13.0, 29.0, -37.5, 29.0, -13.0, 3.0, -0.25],
                ],
            ),
        ];

        for (error_order, rows) in table {
            for (i, expected) in rows.iter().enumerate() {
                let order = i + 1;
                let s = central_stencil::<f64>(error_order, order).unwrap();
                assert_weights(
                    s.weights(),
                    expected,
                    &format!("error_order={error_order} order={order}"),
                );
            }
        }
    }

    #[test]
    fn second_derivative_weights_are_symmetric() {
        for error_order in (2..=12).step_by(2) {
            let s = central_stencil::<f64>(error_order, 2).unwrap();
            let w = s.weights();
            for i in 0..w.len() / 2 {
                let j = w.len() - 1 - i;
                assert!(
                    (w[i] - w[j]).abs() < 1e-9 * w[i].abs().max(1.0),
                    "error_order={error_order}: w[{i}]={} w[{j}]={}",
                    w[i],
                    w[j]
                );
            }
        }
    }
}
