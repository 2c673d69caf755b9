//! tests for the newton-raphson root finding algorithm
use numcore::errors::ErrorKind;
use numcore::root_finding::errors::RootFindingError;
use numcore::root_finding::newton::{newton, NewtonCfg, NewtonError, DEFAULT_MIN_DERIVATIVE};
use numcore::root_finding::report::{TerminationReason, ToleranceSatisfied};

type TestResult = Result<(), NewtonError>;

fn cfg_tol(tol: f64) -> Result<NewtonCfg, NewtonError> {
    Ok(NewtonCfg::new()
        .set_abs_fx(tol)?
        .set_abs_x(tol)?
        .set_rel_x(0.0)?)
}

#[test]
fn sqrt_2_from_one_within_ten_iterations() -> TestResult {
    let f  = |x: f64| x * x - 2.0;
    let df = |x: f64| 2.0 * x;

    let res = newton(f, Some(df), 1.0, cfg_tol(1e-9)?)?;

    assert!(res.iterations <= 10, "took {}", res.iterations);
    assert!((res.root - 1.414_213_56).abs() < 1e-8);
    assert!((res.root - 2.0_f64.sqrt()).abs() < 1e-9);
    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    Ok(())
}

#[test]
fn finite_difference_fallback() -> TestResult {
    let f = |x: f64| x * x - 2.0;

    let res = newton(f, None::<fn(f64) -> f64>, 1.0, cfg_tol(1e-9)?)?;

    assert!((res.root - 2.0_f64.sqrt()).abs() < 1e-8);
    // derivative costs two evaluations per step
    assert!(res.evaluations >= 3 * res.iterations);
    Ok(())
}

#[test]
fn cubic_from_source_problem() -> TestResult {
    let f  = |x: f64| x * x * x - x - 2.0;
    let df = |x: f64| 3.0 * x * x - 1.0;

    let res = newton(f, Some(df), 1.5, cfg_tol(1e-6)?)?;

    assert!((res.root - 1.521_379_706_804_567_6).abs() < 1e-6);
    Ok(())
}

#[test]
fn history_starts_at_initial_guess() -> TestResult {
    let f  = |x: f64| x * x - 2.0;
    let df = |x: f64| 2.0 * x;

    let res = newton(f, Some(df), 1.0, cfg_tol(1e-12)?)?;

    assert_eq!(res.history[0].iteration, 0);
    assert_eq!(res.history[0].estimate, 1.0);
    assert_eq!(res.history[0].residual, -1.0);
    assert_eq!(res.history[1].estimate, 1.5);
    assert_eq!(res.history.len(), res.iterations + 1);
    Ok(())
}

#[test]
fn vanishing_derivative_is_an_error() {
    let f  = |x: f64| x * x + 1.0;
    let df = |x: f64| 2.0 * x;

    let err = newton(f, Some(df), 0.0, NewtonCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        NewtonError::DerivativeTooSmall { x, dfx, min }
        if x == 0.0 && dfx == 0.0 && min == DEFAULT_MIN_DERIVATIVE
    ));
    assert_eq!(err.kind(), ErrorKind::Convergence);
}

#[test]
fn derivative_floor_is_configurable() -> TestResult {
    // |f'(x0)| = 1e-3 passes the default floor but not a raised one
    let f  = |x: f64| 1e-3 * x - 1.0;
    let df = |_x: f64| 1e-3;

    assert!(newton(f, Some(df), 0.0, NewtonCfg::new()).is_ok());

    let cfg = NewtonCfg::new().set_min_derivative(1e-2)?;
    let err = newton(f, Some(df), 0.0, cfg).unwrap_err();
    assert!(matches!(err, NewtonError::DerivativeTooSmall { .. }));

    assert!(matches!(
        NewtonCfg::new().set_min_derivative(-1.0),
        Err(NewtonError::InvalidMinDerivative { .. })
    ));
    Ok(())
}

#[test]
fn max_step_clips_and_hits_iteration_limit() -> TestResult {
    let f  = |x: f64| x - 100.0;
    let df = |_x: f64| 1.0;
    let cfg = NewtonCfg::new().set_max_step(1.0)?.set_max_iter(5)?;

    let res = newton(f, Some(df), 0.0, cfg)?;

    assert_eq!(res.root, 5.0);
    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ToleranceNotReached);
    assert!(matches!(
        res.into_converged(),
        Err(RootFindingError::NotConverged { algorithm: "newton", iterations: 5, .. })
    ));
    Ok(())
}

#[test]
fn invalid_guess() {
    let f  = |x: f64| x;
    let err = newton(f, None::<fn(f64) -> f64>, f64::INFINITY, NewtonCfg::new()).unwrap_err();

    assert!(matches!(err, NewtonError::InvalidGuess { .. }));
    assert_eq!(err.kind(), ErrorKind::Domain);
}

#[test]
fn non_finite_evaluation() {
    let f   = |x: f64| (x - 3.0).ln();
    let df  = |x: f64| 1.0 / (x - 3.0);

    let err = newton(f, Some(df), 1.0, NewtonCfg::new()).unwrap_err();

    assert!(matches!(err, NewtonError::RootFinding(RootFindingError::NonFiniteEvaluation { .. })));
    assert_eq!(err.kind(), ErrorKind::Evaluation);
}

#[test]
fn difference_stencil_beyond_f64_max() {
    // x0 + h overflows for the central difference; an analytic slope is fine
    let f  = |x: f64| 1e-300 * x - 1.0;
    let df = |_x: f64| 1e-300;

    let err = newton(f, None::<fn(f64) -> f64>, f64::MAX, NewtonCfg::new()).unwrap_err();
    assert!(matches!(err, NewtonError::StepNotFinite { x, .. } if x == f64::MAX));
    assert_eq!(err.kind(), ErrorKind::Convergence);

    let cfg = NewtonCfg::new().set_min_derivative(0.0).unwrap();
    let res = newton(f, Some(df), f64::MAX, cfg).unwrap();
    assert!((res.root - 1e300).abs() <= 1e300 * 1e-12);
}
