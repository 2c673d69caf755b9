//! property tests for the Thomas solver
use numcore::linalg::{thomas_solve, TridiagonalError};
use proptest::prelude::*;

proptest! {
    /// For any diagonally dominant tridiagonal system, x = thomas_solve(a, b, c, d)
    /// satisfies Ax = d within floating-point tolerance.
    #[test]
    fn thomas_solve_ax_eq_d(
        n   in 1usize..40,
        off in -0.45f64..0.45,
        seed in 0.0f64..10.0,
    ) {
        let a: Vec<f64> = (0..n).map(|i| if i > 0 { off } else { 0.0 }).collect();
        let b = vec![1.0; n];
        let c: Vec<f64> = (0..n).map(|i| if i + 1 < n { -off } else { 0.0 }).collect();
        let d: Vec<f64> = (0..n).map(|i| (i as f64 + seed).sin()).collect();

        let x = thomas_solve(&a, &b, &c, &d).unwrap();
        prop_assert_eq!(x.len(), n);

        for i in 0..n {
            let mut ax_i = b[i] * x[i];
            if i > 0 { ax_i += a[i] * x[i - 1]; }
            if i + 1 < n { ax_i += c[i] * x[i + 1]; }
            prop_assert!((ax_i - d[i]).abs() < 1e-10,
                "Ax[{}] = {}, d[{}] = {}", i, ax_i, i, d[i]);
        }
    }

    /// Mismatched lengths are rejected, never indexed out of bounds.
    #[test]
    fn thomas_solve_rejects_mismatch(n in 1usize..20, extra in 1usize..5) {
        let res = thomas_solve(&vec![0.0; n + extra], &vec![1.0; n], &vec![0.0; n], &vec![1.0; n]);
        let is_mismatch = matches!(res, Err(TridiagonalError::DimensionMismatch { .. }));
        prop_assert!(is_mismatch);
    }
}
