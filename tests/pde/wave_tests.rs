//! tests for the explicit wave solver
use std::f64::consts::PI;

use numcore::errors::ErrorKind;
use numcore::pde::{wave_explicit, PdeError, TimeSeriesReport, WaveCfg, WaveStart, CFL_LIMIT};

type TestResult = Result<(), PdeError>;

const NX: usize = 21;
const DX: f64   = 0.05;

fn sine_profile() -> Vec<f64> {
    (0..NX).map(|i| (PI * i as f64 * DX).sin()).collect()
}

fn max_error(res: &TimeSeriesReport, exact: impl Fn(f64, f64) -> f64) -> f64 {
    let mut worst: f64 = 0.0;
    for (k, level) in res.levels.iter().enumerate() {
        let t = res.time_at(k);
        for (x, u) in res.x.iter().zip(level) {
            worst = worst.max((u - exact(*x, t)).abs());
        }
    }
    worst
}

#[test]
fn unit_courant_standing_wave_is_exact() -> TestResult {
    let cfg = WaveCfg::new().set_c(1.0)?.set_dx(DX)?.set_dt(DX)?.set_steps(40);

    let res = wave_explicit(&sine_profile(), WaveStart::AtRest, cfg)?;

    assert_eq!(res.algorithm_name, "wave_explicit");
    assert_eq!(res.stability_number, 1.0);
    assert_eq!(res.levels.len(), 41);
    assert!(max_error(&res, |x, t| (PI * x).sin() * (PI * t).cos()) < 1e-10);
    Ok(())
}

#[test]
fn explicit_velocity_start() -> TestResult {
    let cfg = WaveCfg::new().set_dx(DX)?.set_dt(DX)?.set_steps(40);
    let velocity = sine_profile();

    let res = wave_explicit(&[0.0; NX], WaveStart::Velocity(&velocity), cfg)?;

    assert!(max_error(&res, |x, t| (PI * x).sin() * (PI * t).sin() / PI) < 5e-3);
    Ok(())
}

#[test]
fn given_second_level_drives_interior() -> TestResult {
    let cfg = WaveCfg::new().set_dx(DX)?.set_dt(DX)?.set_steps(20);
    let u1: Vec<f64> = (0..NX)
        .map(|i| (PI * i as f64 * DX).sin() * (PI * DX).cos())
        .collect();

    let res = wave_explicit(&sine_profile(), WaveStart::SecondLevel(&u1), cfg)?;

    assert_eq!(res.levels[1][1..NX - 1], u1[1..NX - 1]);
    assert!(max_error(&res, |x, t| (PI * x).sin() * (PI * t).cos()) < 1e-10);
    Ok(())
}

#[test]
fn second_level_cannot_move_boundaries() -> TestResult {
    // C = 0.5; the ends of u1 disagree with u0 and are overridden
    let cfg = WaveCfg::new().set_dx(0.1)?.set_dt(0.05)?.set_steps(4);

    let res = wave_explicit(&[0.0, 1.0, 0.0], WaveStart::SecondLevel(&[0.5, 1.0, 0.5]), cfg)?;

    assert_eq!(res.levels.len(), 5);
    for level in &res.levels {
        assert_eq!(level[0], 0.0);
        assert_eq!(level[2], 0.0);
    }
    assert_eq!(res.levels[1][1], 1.0);
    assert_eq!(res.levels[2][1], 0.5);
    assert_eq!(res.levels[3][1], -0.25);
    assert_eq!(res.levels[4][1], -0.875);
    Ok(())
}

#[test]
fn sub_unit_courant_second_order_accurate() -> TestResult {
    let cfg = WaveCfg::new().set_dx(DX)?.set_dt(0.5 * DX)?.set_steps(80);

    let res = wave_explicit(&sine_profile(), WaveStart::AtRest, cfg)?;

    assert!((res.stability_number - 0.5).abs() < 1e-12);
    assert!(max_error(&res, |x, t| (PI * x).sin() * (PI * t).cos()) < 1e-2);
    Ok(())
}

#[test]
fn courant_above_limit_rejected() {
    let cfg = WaveCfg::new()
        .set_c(2.0).unwrap()
        .set_dx(DX).unwrap()
        .set_dt(DX).unwrap()
        .set_steps(10);

    let err = wave_explicit(&sine_profile(), WaveStart::AtRest, cfg).unwrap_err();

    assert!(matches!(
        err,
        PdeError::Unstable { number, limit, .. } if number == 2.0 && limit == CFL_LIMIT
    ));
    assert_eq!(err.kind(), ErrorKind::Stability);
}

#[test]
fn zero_steps_returns_initial_level() -> TestResult {
    let res = wave_explicit(&sine_profile(), WaveStart::AtRest, WaveCfg::new().set_dx(DX)?)?;

    assert_eq!(res.levels.len(), 1);
    assert_eq!(res.final_level(), sine_profile().as_slice());
    Ok(())
}

#[test]
fn companion_arrays_checked() {
    let short = [0.0; NX - 1];
    let err = wave_explicit(&sine_profile(), WaveStart::Velocity(&short), WaveCfg::new()).unwrap_err();
    assert_eq!(err, PdeError::LengthMismatch { expected: NX, got: NX - 1 });

    let mut bad = vec![0.0; NX];
    bad[3] = f64::NAN;
    let err = wave_explicit(&sine_profile(), WaveStart::SecondLevel(&bad), WaveCfg::new()).unwrap_err();
    assert_eq!(err, PdeError::NonFiniteProfile { idx: 3 });
    assert_eq!(err.kind(), ErrorKind::Domain);
}
