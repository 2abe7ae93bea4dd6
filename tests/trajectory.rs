use approx::assert_relative_eq;
use fixed_step_ode::config::PortraitConfig;
use fixed_step_ode::systems::CoupledGrowth;
use fixed_step_ode::trajectory::phase_portrait;
use fixed_step_ode::{euler_trajectory, rk4_trajectory, Method, Vector2};

type State = Vector2<f64>;

const DT: f64 = 0.01;
const T_END: f64 = 10.0;

#[test]
fn trajectory_from_three_three() {
    let system = CoupledGrowth::new(1.2, 1.0, 0.5, 0.4);
    let x0 = State::new(3.0, 3.0);

    let trajectories = [
        euler_trajectory(&system, x0, DT, T_END),
        rk4_trajectory(&system, x0, DT, T_END),
    ];
    for trajectory in trajectories.iter() {
        assert_eq!(trajectory.len(), 1000);
        assert_eq!(trajectory.y_out()[0], x0);
        assert_relative_eq!(*trajectory.x_out().last().unwrap(), 9.99, epsilon = 1e-9);
    }
}

#[test]
fn rk4_orbits_stay_closed() {
    let system = CoupledGrowth::default();
    for &x0 in &PortraitConfig::default().initials {
        let trajectory = rk4_trajectory(&system, x0, DT, T_END);
        let h0 = system.invariant(&x0);
        for state in trajectory.y_out() {
            assert!(state[0] > 0.0 && state[1] > 0.0);
            assert_relative_eq!(system.invariant(state), h0, epsilon = 1e-6);
        }
    }
}

#[test]
fn default_portrait_covers_every_initial_condition() {
    let config = PortraitConfig::default();
    let system = CoupledGrowth::new(config.k, config.l, config.a, config.b);
    let portrait = phase_portrait(&system, &config.initials, config.dt, config.t_end);

    assert_eq!(portrait.panels.len(), 2);
    assert_eq!(portrait.panels[0].method, Method::Euler);
    assert_eq!(portrait.panels[1].method, Method::Rk4);
    for panel in &portrait.panels {
        assert_eq!(panel.trajectories.len(), 9);
        for (trajectory, x0) in panel.trajectories.iter().zip(&config.initials) {
            assert_eq!(trajectory.len(), 1000);
            assert_eq!(&trajectory.y_out()[0], x0);
        }
    }
}
