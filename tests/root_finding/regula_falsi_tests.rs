//! tests for regula falsi and its rescaling variants
use numcore::errors::ErrorKind;
use numcore::root_finding::algorithms::BracketFamily;
use numcore::root_finding::errors::{AlgorithmError, RootFindingError};
use numcore::root_finding::regula_falsi::{regula_falsi, RegulaFalsiCfg, RegulaFalsiError};
use numcore::root_finding::report::{Stencil, TerminationReason};

type TestResult = Result<(), RegulaFalsiError>;

const VARIANTS: [BracketFamily; 4] = [
    BracketFamily::RegulaFalsiPure,
    BracketFamily::RegulaFalsiIllinois,
    BracketFamily::RegulaFalsiPegasus,
    BracketFamily::RegulaFalsiAndersonBjorck,
];

fn cfg_for(variant: BracketFamily, tol: f64) -> Result<RegulaFalsiCfg, RegulaFalsiError> {
    Ok(RegulaFalsiCfg::new()
        .set_variant(variant)?
        .set_abs_fx(tol)?
        .set_abs_x(tol)?
        .set_rel_x(0.0)?)
}

fn right_bound(stencil: Stencil) -> f64 {
    match stencil {
        Stencil::Bracket { bounds } => bounds[1],
        other => panic!("expected bracket stencil, got {other:?}"),
    }
}

#[test]
fn every_variant_finds_sqrt_2() -> TestResult {
    let f = |x: f64| x * x - 2.0;

    for variant in VARIANTS {
        let res = regula_falsi(f, 0.0, 2.0, cfg_for(variant, 1e-12)?)?;

        assert_eq!(res.termination_reason, TerminationReason::ToleranceReached, "{variant:?}");
        assert!((res.root - 2.0_f64.sqrt()).abs() < 1e-9, "{variant:?}: {}", res.root);
        assert_eq!(res.history.len(), res.iterations);
    }
    Ok(())
}

#[test]
fn default_variant_is_pure() -> TestResult {
    let cfg = RegulaFalsiCfg::new();
    assert_eq!(cfg.variant(), BracketFamily::RegulaFalsiPure);

    let res = regula_falsi(|x: f64| x * x - 2.0, 0.0, 2.0, cfg)?;
    assert_eq!(res.algorithm_name, "regula_falsi_pure");
    Ok(())
}

#[test]
fn pure_keeps_endpoint_illinois_moves_it() -> TestResult {
    // convex and increasing: every secant estimate lands left of the root
    let f = |x: f64| x * x - 2.0;

    let pure = regula_falsi(f, 0.0, 2.0, cfg_for(BracketFamily::RegulaFalsiPure, 1e-10)?)?;
    assert_eq!(right_bound(pure.stencil), 2.0);

    let illinois = regula_falsi(f, 0.0, 2.0, cfg_for(BracketFamily::RegulaFalsiIllinois, 1e-10)?)?;
    assert!(right_bound(illinois.stencil) < 2.0);
    assert_eq!(illinois.algorithm_name, "regula_falsi_illinois");
    Ok(())
}

#[test]
fn linear_function_hit_in_one_step() -> TestResult {
    let f = |x: f64| 3.0 * x - 1.5;

    let res = regula_falsi(f, 0.0, 2.0, RegulaFalsiCfg::new())?;

    assert_eq!(res.iterations, 1);
    assert!((res.root - 0.5).abs() < 1e-15);
    Ok(())
}

#[test]
fn finds_cubic_root_from_source_problem() -> TestResult {
    let f = |x: f64| x * x * x - x - 2.0;

    for variant in VARIANTS {
        let res = regula_falsi(f, 1.0, 2.0, cfg_for(variant, 1e-10)?)?;
        assert!((res.root - 1.521_379_706_804_567_6).abs() < 1e-8, "{variant:?}");
    }
    Ok(())
}

#[test]
fn bisection_is_not_a_regula_falsi_variant() {
    let err = RegulaFalsiCfg::new().set_variant(BracketFamily::Bisection).unwrap_err();

    assert!(matches!(err, AlgorithmError::IncompatibleAlgorithm { .. }));
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn no_sign_change() {
    let err = regula_falsi(|x: f64| x * x + 1.0, -1.0, 1.0, RegulaFalsiCfg::new()).unwrap_err();

    assert!(matches!(err, RegulaFalsiError::NoSignChange { .. }));
    assert_eq!(err.kind(), ErrorKind::Domain);
}

#[test]
fn iteration_limit_reported() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = cfg_for(BracketFamily::RegulaFalsiPure, 1e-15)?.set_max_iter(3)?;

    let res = regula_falsi(f, 0.0, 2.0, cfg)?;

    assert_eq!(res.iterations, 3);
    assert!(!res.is_converged());
    assert!(matches!(res.into_converged(), Err(RootFindingError::NotConverged { .. })));
    Ok(())
}

#[test]
fn bracket_wider_than_f64_max() -> TestResult {
    let f = |x: f64| x;

    for variant in VARIANTS {
        let cfg = RegulaFalsiCfg::new().set_variant(variant)?;
        let res = regula_falsi(f, -1e308, 1e308, cfg)?;

        assert_eq!(res.root, 0.0);
        assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    }
    Ok(())
}
