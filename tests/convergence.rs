use approx::assert_relative_eq;
use fixed_step_ode::config::ConvergenceConfig;
use fixed_step_ode::systems::ExponentialGrowth;
use fixed_step_ode::{build_convergence_table, step_to, ConvergenceTable, Method};
use std::f64::consts::E;

const X0: f64 = 1.0;
const T0: f64 = 0.0;
const T_END: f64 = 1.0;

fn table(method: Method) -> ConvergenceTable<f64> {
    let config = ConvergenceConfig::default();
    let growth = ExponentialGrowth::default();
    build_convergence_table(&growth, method, X0, T0, T_END, config.exponents(), E)
}

#[test]
fn default_study_spans_exponents_ten_to_twenty() {
    let table = table(Method::Euler);
    let exponents: Vec<u32> = table.rows().iter().map(|row| row.exponent).collect();
    assert_eq!(exponents, (10..=20).collect::<Vec<_>>());
    assert_eq!(table.stats().accepted_steps, (10..=20).map(|k| 1u64 << k).sum::<u64>());
}

#[test]
fn every_method_approaches_e() {
    for method in Method::ALL {
        let last = *table(method).rows().last().unwrap();
        assert_relative_eq!(last.value, E, epsilon = 1e-5);
    }
}

#[test]
fn higher_order_methods_are_more_accurate() {
    let euler = table(Method::Euler).rows()[0].error;
    let midpoint = table(Method::Midpoint).rows()[0].error;
    let rk4 = table(Method::Rk4).rows()[0].error;

    // h = 2^-10
    assert!(euler > 1e-3 && euler < 2e-3, "euler error {}", euler);
    assert!(midpoint < euler * 1e-2, "midpoint error {}", midpoint);
    assert!(rk4 < midpoint * 1e-4, "rk4 error {}", rk4);
}

#[test]
fn euler_error_keeps_shrinking_to_the_smallest_step() {
    let table = table(Method::Euler);
    for order in table.observed_orders() {
        assert!((order - 1.0).abs() < 0.05, "observed order {}", order);
    }
    assert_eq!(table.noise_floor(), None);
    let last = table.rows().last().unwrap().error;
    assert!(last > 1e-6 && last < 2e-6, "euler error at k = 20: {}", last);
}

#[test]
fn midpoint_error_quarters_while_truncation_dominates() {
    let table = table(Method::Midpoint);
    for order in &table.observed_orders()[..5] {
        assert!((order - 2.0).abs() < 0.05, "observed order {}", order);
    }
}

#[test]
fn rk4_hits_the_round_off_floor() {
    let table = table(Method::Rk4);

    // already at round-off for k = 10: refining further stops paying off
    let floor = table.noise_floor().expect("rk4 error should stop decreasing");
    assert!(floor < 20);

    let last = table.rows().last().unwrap();
    let truncation = E * last.step_size().powi(4) / 120.0;
    assert!(last.error > 1e3 * truncation);
    assert!(last.error < 1e-9);
}

#[test]
fn degenerate_interval_returns_initial_value() {
    let growth = ExponentialGrowth::default();
    for method in Method::ALL {
        assert_eq!(step_to(&growth, method, X0, T_END, T_END, 0.125), X0);
    }
}
