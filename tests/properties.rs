use approx::assert_abs_diff_eq;
use eulercmp::prelude::*;

mod common;
use common::reference_params;

fn params(k: f64, y0: f64, t_start: f64, t_end: f64, h: f64) -> SimulationParams {
    SimulationParams::builder()
        .k(k)
        .y0(y0)
        .t_start(t_start)
        .t_end(t_end)
        .h(h)
        .build()
}

#[test]
fn sequence_length_and_monotone_abscissae() {
    for &(t_start, t_end, h) in &[(0.0, 1.0, 0.2), (0.0, 1.0, 0.3), (1.0, 4.0, 0.5), (-1.0, 1.0, 0.25)] {
        let run = simulate(&params(0.7, 2.0, t_start, t_end, h)).unwrap();
        let expected = ((t_end - t_start) / h).floor() as usize + 1;
        assert_eq!(run.len(), expected, "length for h = {h} over [{t_start}, {t_end}]");

        for pair in run.steps.windows(2) {
            assert!(pair[1].t > pair[0].t);
        }
    }
}

#[test]
fn initial_step_is_exact() {
    let run = simulate(&params(3.2, 42.5, 0.0, 2.0, 0.4)).unwrap();
    let first = &run.steps[0];
    assert_eq!(first.y_euler, 42.5);
    assert_eq!(first.y_exact, 42.5);
    assert_eq!(first.abs_error, 0.0);
    assert_eq!(first.rel_error, 0.0);
}

#[test]
fn analytic_at_zero_returns_y0_exactly() {
    for &k in &[-10.0, -1.5, 0.0, 0.1, 1.5, 100.0] {
        assert_eq!(exact(k, 123.456, 0.0), 123.456);
    }
}

#[test]
fn absolute_error_grows_monotonically_for_growth_model() {
    let run = simulate(&reference_params()).unwrap();
    for pair in run.steps.windows(2) {
        assert!(pair[1].abs_error >= pair[0].abs_error);
    }
}

#[test]
fn nonzero_start_time_keeps_initial_step_error_free() {
    // Same problem as the reference scenario, shifted to start at t = 2.
    let shifted = simulate(&params(1.5, 100.0, 2.0, 3.0, 0.2)).unwrap();
    let reference = simulate(&reference_params()).unwrap();
    assert_eq!(shifted.len(), reference.len());

    let first = &shifted.steps[0];
    assert_eq!(first.t, 2.0);
    assert_eq!(first.y_euler, 100.0);
    assert_eq!(first.y_exact, 100.0);
    assert_eq!(first.abs_error, 0.0);

    // A time shift leaves both solutions and their errors unchanged.
    for (s, r) in shifted.iter().zip(reference.iter()) {
        assert_abs_diff_eq!(s.y_euler, r.y_euler, epsilon = 1e-9);
        assert_abs_diff_eq!(s.y_exact, r.y_exact, epsilon = 1e-9);
        assert_abs_diff_eq!(s.abs_error, r.abs_error, epsilon = 1e-9);
    }
    assert_abs_diff_eq!(shifted.stats.max_abs, reference.stats.max_abs, epsilon = 1e-9);
}

#[test]
fn analytic_curve_starts_at_the_initial_condition() {
    let samples = eulercmp::curve(1.5, 100.0, 2.0, 3.0, 100);
    assert_eq!(samples.len(), 100);
    assert_eq!(samples[0], (2.0, 100.0));
    let (t_last, y_last) = *samples.last().unwrap();
    assert_abs_diff_eq!(t_last, 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(y_last, 100.0 * 1.5f64.exp(), epsilon = 1e-9);
}

#[test]
fn zero_length_interval_yields_single_error_free_point() {
    let run = simulate(&params(1.5, 100.0, 0.5, 0.5, 0.2)).unwrap();
    assert_eq!(run.len(), 1);
    let only = run.final_step().unwrap();
    assert_eq!(only.t, 0.5);
    assert_eq!(only.abs_error, 0.0);
    assert_eq!(run.stats.max_abs, 0.0);
    assert_eq!(run.stats.mean_rel, 0.0);
}

#[test]
fn halving_step_size_reduces_max_error() {
    let coarse = simulate(&reference_params()).unwrap();
    let fine = simulate(&params(1.5, 100.0, 0.0, 1.0, 0.1)).unwrap();
    assert_eq!(fine.len(), 11);
    assert!(fine.stats.max_abs < coarse.stats.max_abs);
}

#[test]
fn decay_model_decreases_towards_zero_with_smaller_errors() {
    let growth = simulate(&params(1.5, 100.0, 0.0, 1.0, 0.2)).unwrap();
    let decay = simulate(&params(-1.5, 100.0, 0.0, 1.0, 0.2)).unwrap();

    for pair in decay.steps.windows(2) {
        assert!(pair[1].y_euler < pair[0].y_euler);
        assert!(pair[1].y_euler > 0.0);
    }
    for step in &decay {
        assert!(step.abs_error >= 0.0);
    }
    assert!(decay.stats.max_abs < growth.stats.max_abs);
}

#[test]
fn truncation_stops_short_of_a_non_multiple_t_end() {
    // 1.0 / 0.3 truncates to 3 update steps, last abscissa 0.9.
    let run = simulate(&params(1.0, 1.0, 0.0, 1.0, 0.3)).unwrap();
    assert_eq!(run.len(), 4);
    assert_abs_diff_eq!(run.final_step().unwrap().t, 0.9, epsilon = 1e-12);
}

#[test]
fn invalid_parameters_are_rejected_before_stepping() {
    assert!(matches!(
        simulate(&params(1.0, 1.0, 0.0, 1.0, 0.0)),
        Err(Error::InvalidStepSize(_))
    ));
    assert!(matches!(
        simulate(&params(1.0, 1.0, 0.0, 1.0, -0.25)),
        Err(Error::InvalidStepSize(_))
    ));
    assert!(matches!(
        simulate(&params(1.0, 1.0, 0.0, 1.0, f64::NAN)),
        Err(Error::InvalidStepSize(_))
    ));
    assert!(matches!(
        simulate(&params(1.0, 1.0, 2.0, 1.0, 0.1)),
        Err(Error::InvalidInterval(..))
    ));
    assert!(matches!(
        simulate(&params(f64::NAN, 1.0, 0.0, 1.0, 0.1)),
        Err(Error::NonFiniteParameter { name: "k", .. })
    ));
    assert!(matches!(
        simulate(&params(1.0, f64::INFINITY, 0.0, 1.0, 0.1)),
        Err(Error::NonFiniteParameter { name: "y0", .. })
    ));
}

#[test]
fn zero_initial_condition_triggers_relative_error_guard() {
    let run = simulate(&params(2.0, 0.0, 0.0, 1.0, 0.25)).unwrap();
    for step in &run {
        assert_eq!(step.y_euler, 0.0);
        assert_eq!(step.y_exact, 0.0);
        assert_eq!(step.rel_error, 0.0);
    }
    assert_eq!(run.stats.max_rel, 0.0);
}

#[test]
fn euler_sequence_is_deterministic() {
    let a = euler(1.5, 100.0, 0.0, 1.0, 0.2);
    let b = euler(1.5, 100.0, 0.0, 1.0, 0.2);
    assert_eq!(a, b);
    assert_eq!(a.len(), 6);
    assert_eq!(a[0], (0.0, 100.0));
}
