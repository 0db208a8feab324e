//! Empirical convergence order of the central finite-difference Laplacian.

use spinodal_calculus::analysis::{convergence_order, max_abs_error};
use spinodal_calculus::{CentralLaplacian, LaplacianOperator};
use spinodal_test_utils::{AnalyticField, COS_X_PLUS_SIN_Y, SIN_X_COS_2Y};

fn max_error<const N: usize>(op: &mut CentralLaplacian<f64>, field: &AnalyticField) -> (f64, f64) {
    let s = field.sample::<f64, N, N>();
    let lap = op.laplacian_of(&s.field, s.dx, s.dy).unwrap();
    let err = max_abs_error(lap.as_slice(), s.exact_laplacian.as_slice()).unwrap();
    (s.dx, err)
}

/// Slope of `ln(error)` against `ln(h)`; also checks the error shrinks
/// monotonically with `h`.
fn fitted_order(points: &[(f64, f64)]) -> f64 {
    let h: Vec<f64> = points.iter().map(|p| p.0).collect();
    let e: Vec<f64> = points.iter().map(|p| p.1).collect();
    for w in e.windows(2) {
        assert!(w[1] < w[0], "error did not shrink: {e:?}");
    }
    convergence_order(&h, &e).unwrap()
}

fn observed_order(error_order: usize, field: &AnalyticField) -> f64 {
    let mut op = CentralLaplacian::new(error_order).unwrap();
    fitted_order(&[
        max_error::<8>(&mut op, field),
        max_error::<16>(&mut op, field),
        max_error::<32>(&mut op, field),
    ])
}

/// Observed order on 12, 16 and 24 points per side, before the error
/// reaches the rounding floor.
fn coarse_order(error_order: usize, field: &AnalyticField) -> f64 {
    let mut op = CentralLaplacian::new(error_order).unwrap();
    fitted_order(&[
        max_error::<12>(&mut op, field),
        max_error::<16>(&mut op, field),
        max_error::<24>(&mut op, field),
    ])
}

#[test]
fn second_order_converges_quadratically() {
    let p = observed_order(2, &COS_X_PLUS_SIN_Y);
    assert!((p - 2.0).abs() < 0.1, "observed order {p}");
}

#[test]
fn second_order_slope_over_four_refinements() {
    for field in [&COS_X_PLUS_SIN_Y, &SIN_X_COS_2Y] {
        let mut op = CentralLaplacian::new(2).unwrap();
        let p = fitted_order(&[
            max_error::<16>(&mut op, field),
            max_error::<32>(&mut op, field),
            max_error::<64>(&mut op, field),
            max_error::<128>(&mut op, field),
        ]);
        assert!(p >= 1.98, "{}: observed order {p}", field.name);
    }
}

#[test]
fn twelfth_order_before_the_rounding_floor() {
    for field in [&COS_X_PLUS_SIN_Y, &SIN_X_COS_2Y] {
        let p = coarse_order(12, field);
        assert!(p >= 10.8, "{}: observed order {p}", field.name);
    }
}

#[test]
fn tenth_order_before_the_rounding_floor() {
    // Still pre-asymptotic on these grids, so the slope sits a little
    // under ten.
    for field in [&COS_X_PLUS_SIN_Y, &SIN_X_COS_2Y] {
        let p = coarse_order(10, field);
        assert!(p >= 9.0, "{}: observed order {p}", field.name);
    }
}

#[test]
fn higher_orders_converge_at_their_rate() {
    for (k, tolerance) in [(4, 0.3), (6, 0.4), (8, 0.6)] {
        for field in [&COS_X_PLUS_SIN_Y, &SIN_X_COS_2Y] {
            let p = observed_order(k, field);
            assert!(
                p > k as f64 - tolerance,
                "error order {k} on {}: observed {p}",
                field.name
            );
        }
    }
}

#[test]
fn wider_stencils_are_more_accurate() {
    let mut previous = f64::INFINITY;
    for k in [2, 4, 6, 8] {
        let mut op = CentralLaplacian::new(k).unwrap();
        let (_, err) = max_error::<32>(&mut op, &SIN_X_COS_2Y);
        assert!(err < previous, "order {k}: {err} >= {previous}");
        previous = err;
    }
}
