//! tests for the FTCS and Crank-Nicolson heat solvers
use std::f64::consts::PI;

use numcore::errors::ErrorKind;
use numcore::pde::{heat_crank_nicolson, heat_ftcs, HeatCfg, PdeError, FTCS_STABILITY_LIMIT};

type TestResult = Result<(), PdeError>;

fn sine_profile(nx: usize, dx: f64) -> Vec<f64> {
    (0..nx).map(|i| (PI * i as f64 * dx).sin()).collect()
}

/// u = exp(-alpha pi^2 t) sin(pi x)
fn max_decay_error(profile: &[f64], dx: f64, alpha: f64, t: f64) -> f64 {
    profile.iter()
        .enumerate()
        .map(|(i, u)| (u - (-alpha * PI * PI * t).exp() * (PI * i as f64 * dx).sin()).abs())
        .fold(0.0, f64::max)
}

#[test]
fn ftcs_unstable_fails_before_stepping() {
    // r = 1; an enormous step count would never finish if stepping began
    let cfg = HeatCfg::new()
        .set_alpha(1.0).unwrap()
        .set_dx(0.1).unwrap()
        .set_dt(0.01).unwrap()
        .set_steps(usize::MAX / 2);

    let err = heat_ftcs(&sine_profile(11, 0.1), cfg).unwrap_err();

    match err {
        PdeError::Unstable { scheme, number, limit } => {
            assert_eq!(scheme, "heat_ftcs");
            assert!((number - 1.0).abs() < 1e-12);
            assert_eq!(limit, FTCS_STABILITY_LIMIT);
        },
        other => panic!("expected Unstable, got {other:?}"),
    }
    assert_eq!(err.kind(), ErrorKind::Stability);
}

#[test]
fn ftcs_sine_mode_decays() -> TestResult {
    let dx  = 0.05;
    let cfg = HeatCfg::new().set_dx(dx)?.set_dt(0.001)?.set_steps(100);

    let res = heat_ftcs(&sine_profile(21, dx), cfg)?;

    assert_eq!(res.algorithm_name, "heat_ftcs");
    assert_eq!(res.levels.len(), 101);
    assert!((res.stability_number - 0.4).abs() < 1e-12);
    assert!(max_decay_error(res.final_level(), dx, 1.0, 0.1) < 2e-3);
    Ok(())
}

#[test]
fn ftcs_holds_boundaries() -> TestResult {
    let profile = [1.0, 0.0, 0.0, 0.0, -1.0];
    let cfg = HeatCfg::new().set_dx(0.25)?.set_dt(0.01)?.set_steps(50);

    let res = heat_ftcs(&profile, cfg)?;

    for level in &res.levels {
        assert_eq!(level[0], 1.0);
        assert_eq!(level[4], -1.0);
    }
    // relaxes toward the linear steady state
    let last = res.final_level();
    assert!(last[1] > 0.0 && last[3] < 0.0);
    Ok(())
}

#[test]
fn crank_nicolson_sine_mode_decays() -> TestResult {
    let dx  = 0.05;
    let cfg = HeatCfg::new().set_dx(dx)?.set_dt(0.01)?.set_steps(10);

    let res = heat_crank_nicolson(&sine_profile(21, dx), cfg)?;

    assert_eq!(res.algorithm_name, "heat_crank_nicolson");
    assert!((res.stability_number - 4.0).abs() < 1e-12);
    assert!((res.time_at(10) - 0.1).abs() < 1e-12);
    assert!(max_decay_error(res.final_level(), dx, 1.0, 0.1) < 1e-3);
    Ok(())
}

#[test]
fn crank_nicolson_stable_where_ftcs_is_not() -> TestResult {
    let dx  = 0.1;
    let cfg = HeatCfg::new().set_dx(dx)?.set_dt(0.05)?.set_steps(200);
    let profile = sine_profile(11, dx);

    assert!(matches!(heat_ftcs(&profile, cfg), Err(PdeError::Unstable { .. })));

    let res = heat_crank_nicolson(&profile, cfg)?;
    assert!((res.stability_number - 5.0).abs() < 1e-12);
    for level in &res.levels {
        for u in level {
            assert!(u.is_finite() && u.abs() <= 1.0 + 1e-12);
        }
    }
    Ok(())
}

#[test]
fn zero_diffusivity_is_identity() -> TestResult {
    let profile = [0.0, 3.0, -2.0, 5.0, 0.0];
    let cfg = HeatCfg::new().set_alpha(0.0)?.set_dx(0.1)?.set_dt(0.1)?.set_steps(4);

    assert_eq!(heat_ftcs(&profile, cfg)?.final_level(), &profile);
    assert_eq!(heat_crank_nicolson(&profile, cfg)?.final_level(), &profile);
    Ok(())
}

#[test]
fn invalid_inputs() {
    assert!(matches!(HeatCfg::new().set_dx(0.0), Err(PdeError::InvalidStep { name: "dx", .. })));
    assert!(matches!(HeatCfg::new().set_dt(f64::NAN), Err(PdeError::InvalidStep { name: "dt", .. })));
    assert!(matches!(
        HeatCfg::new().set_alpha(-1.0),
        Err(PdeError::InvalidCoefficient { name: "alpha", .. })
    ));

    let err = heat_crank_nicolson(&[0.0, 1.0], HeatCfg::new()).unwrap_err();
    assert_eq!(err, PdeError::InvalidGridSize { got: 2, min: 3 });

    let err = heat_ftcs(&[0.0, f64::INFINITY, 0.0], HeatCfg::new()).unwrap_err();
    assert_eq!(err, PdeError::NonFiniteProfile { idx: 1 });
}
