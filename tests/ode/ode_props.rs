//! property tests for the fixed-step integrators
use numcore::ode::{euler, rk4, IvpCfg};
use proptest::prelude::*;

proptest! {
    /// On y' = lambda y, RK4's endpoint error never exceeds Euler's.
    #[test]
    fn rk4_no_worse_than_euler_on_linear_growth(
        lambda in -2.0f64..2.0,
        h      in 0.01f64..0.1,
    ) {
        let cfg = IvpCfg::new()
            .set_y0(1.0).unwrap()
            .set_h(h).unwrap()
            .set_steps(10);
        let exact = (lambda * 10.0 * h).exp();

        let f = move |_t: f64, y: f64| lambda * y;
        let e_euler = euler(f, cfg).solve().unwrap().final_point().unwrap();
        let e_rk4   = rk4(f, cfg).solve().unwrap().final_point().unwrap();

        prop_assert!(
            (e_rk4.y - exact).abs() <= (e_euler.y - exact).abs() + 1e-12,
            "rk4 {} euler {} exact {}", e_rk4.y, e_euler.y, exact
        );
    }

    /// Every trajectory holds steps + 1 points, evaluated at t0 + k h.
    #[test]
    fn trajectory_length_and_times(steps in 0usize..50, h in 0.001f64..1.0) {
        let cfg = IvpCfg::new().set_h(h).unwrap().set_steps(steps);
        let res = euler(|t, _y| t.cos(), cfg).solve().unwrap();

        prop_assert_eq!(res.len(), steps + 1);
        for (k, t) in res.t.iter().enumerate() {
            prop_assert!((t - k as f64 * h).abs() < 1e-12);
        }
    }
}
