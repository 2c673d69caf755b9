//! tests for the bisection root finding algorithm
use numcore::errors::ErrorKind;
use numcore::root_finding::bisection::{bisection, BisectionCfg, BisectionError};
use numcore::root_finding::errors::RootFindingError;
use numcore::root_finding::report::{Stencil, TerminationReason, ToleranceSatisfied};

type TestResult = Result<(), BisectionError>;

fn tight_cfg(tol: f64) -> Result<BisectionCfg, BisectionError> {
    Ok(BisectionCfg::new()
        .set_abs_fx(tol)?
        .set_abs_x(tol)?
        .set_rel_x(0.0)?)
}

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let tol = 1e-10;

    let res = bisection(f, 0.0, 2.0, tight_cfg(tol)?)?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert!((res.root - 2.0_f64.sqrt()).abs() <= tol);
    assert!(res.iterations > 0);
    assert!(res.is_converged());
    assert_eq!(res.algorithm_name, "bisection");
    Ok(())
}

#[test]
fn sqrt_2_within_theoretical_iterations() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let tol: f64 = 1e-6;
    let bound = (2.0 / tol).log2().ceil() as usize;

    let res = bisection(f, 0.0, 2.0, tight_cfg(tol)?)?;

    assert!(res.iterations <= bound, "{} > {bound}", res.iterations);
    assert!((res.root - 2.0_f64.sqrt()).abs() <= tol);
    Ok(())
}

#[test]
fn finds_3() -> TestResult {
    let f   = |x: f64| 2.0 * x - 6.0;
    let tol = 1e-10;

    let res = bisection(f, 0.0, 10.0, tight_cfg(tol)?)?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert!((res.root - 3.0).abs() <= tol);
    Ok(())
}

#[test]
fn finds_negative_5() -> TestResult {
    let f   = |x: f64| x + 5.0;

    // first midpoint is the root
    let res = bisection(f, -10.0, 0.0, BisectionCfg::new())?;

    assert_eq!(res.root, -5.0);
    assert_eq!(res.iterations, 1);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsFxReached);
    Ok(())
}

#[test]
fn endpoint_root_returns_immediately() -> TestResult {
    let f = |x: f64| x;

    let res = bisection(f, 0.0, 1.0, BisectionCfg::new())?;

    assert_eq!(res.root, 0.0);
    assert_eq!(res.iterations, 0);
    assert_eq!(res.evaluations, 1);
    assert_eq!(res.history.len(), 1);
    assert_eq!(res.history[0].iteration, 0);
    Ok(())
}

#[test]
fn history_tracks_every_midpoint() -> TestResult {
    let f = |x: f64| x * x * x - x - 2.0;

    let res = bisection(f, 1.0, 2.0, tight_cfg(1e-8)?)?;

    assert_eq!(res.history.len(), res.iterations);
    assert_eq!(res.history[0].estimate, 1.5);
    for (k, rec) in res.history.iter().enumerate() {
        assert_eq!(rec.iteration, k + 1);
        assert_eq!(rec.residual, f(rec.estimate));
    }
    assert_eq!(res.history.last().map(|r| r.estimate), Some(res.root));

    // final bracket still straddles the root
    match res.stencil {
        Stencil::Bracket { bounds: [a, b] } => assert!(a <= res.root && res.root <= b),
        other => panic!("expected bracket stencil, got {other:?}"),
    }
    Ok(())
}

#[test]
fn iteration_limit_is_reported_not_hidden() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = tight_cfg(1e-14)?.set_max_iter(5)?;

    let res = bisection(f, 0.0, 2.0, cfg)?;

    assert_eq!(res.iterations, 5);
    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ToleranceNotReached);
    assert!(!res.is_converged());

    let err = res.into_converged().unwrap_err();
    assert!(matches!(err, RootFindingError::NotConverged { iterations: 5, .. }));
    assert_eq!(err.kind(), ErrorKind::Convergence);
    Ok(())
}

#[test]
fn no_sign_change() -> TestResult {
    let f   = |x: f64| x * x + 1.0;
    let err = bisection(f, -1.0, 1.0, BisectionCfg::new()).unwrap_err();

    assert!(matches!(err, BisectionError::NoSignChange { a, b } if a == -1.0 && b == 1.0));
    assert_eq!(err.kind(), ErrorKind::Domain);
    Ok(())
}

#[test]
fn invalid_bounds() -> TestResult {
    let f = |x: f64| x;

    let err = bisection(f, 1.0, -1.0, BisectionCfg::new()).unwrap_err();
    assert!(matches!(err, BisectionError::InvalidBounds { .. }));

    let err = bisection(f, f64::NAN, 1.0, BisectionCfg::new()).unwrap_err();
    assert!(matches!(err, BisectionError::InvalidBounds { .. }));
    Ok(())
}

#[test]
fn non_finite_eval() -> TestResult {
    let f   = |x: f64| x.sqrt() - 2.0;
    let err = bisection(f, -1.0, 5.0, BisectionCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        BisectionError::RootFinding(RootFindingError::NonFiniteEvaluation { x, fx })
        if x == -1.0 && fx.is_nan()));
    assert_eq!(err.kind(), ErrorKind::Evaluation);
    Ok(())
}

#[test]
fn rejects_bad_tolerances() {
    assert!(BisectionCfg::new().set_abs_fx(0.0).is_err());
    assert!(BisectionCfg::new().set_abs_x(-1.0).is_err());
    assert!(BisectionCfg::new().set_rel_x(f64::NAN).is_err());
    assert!(BisectionCfg::new().set_max_iter(0).is_err());
}

#[test]
fn bracket_wider_than_f64_max() -> TestResult {
    // b - a overflows to inf; the midpoint must not
    let f = |x: f64| x;

    let res = bisection(f, -1e308, 1e308, BisectionCfg::new())?;

    assert_eq!(res.root, 0.0);
    assert_eq!(res.iterations, 1);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsFxReached);

    let g   = |x: f64| x - 1e307;
    let res = bisection(g, -1e308, 1e308, BisectionCfg::new())?;
    assert!(res.root.is_finite());
    assert!((res.root - 1e307).abs() <= 1e307 * 1e-12);
    Ok(())
}
