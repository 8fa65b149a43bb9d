//! Chart rendering for a comparison run (PNG, via plotters).
//!
//! Two artifacts mirror the report: [`plot_comparison`] stacks the solution
//! overlay with absolute- and relative-error panels, [`plot_error_steps`]
//! shows the analytic curve with the Euler points and a vertical error
//! segment at each abscissa. Chart layout is presentation only and carries no
//! numeric contract.

use std::path::Path;

use plotters::prelude::*;

use crate::{analytic::curve, error::Error, solution::SimulationRun};

/// Samples of the smooth analytic curve drawn underneath the Euler points.
const CURVE_SAMPLES: usize = 100;

fn to_render<E: std::fmt::Display>(e: E) -> Error {
    Error::Render(e.to_string())
}

/// Pad a range so plotters never receives a degenerate axis.
fn padded(min: f64, max: f64) -> std::ops::Range<f64> {
    if max > min {
        let pad = 0.05 * (max - min);
        (min - pad)..(max + pad)
    } else {
        (min - 1.0)..(max + 1.0)
    }
}

fn y_bounds(run: &SimulationRun) -> (f64, f64) {
    run.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
        let vals = [s.y_euler as f64, s.y_exact as f64];
        (
            vals.iter().copied().fold(lo, f64::min),
            vals.iter().copied().fold(hi, f64::max),
        )
    })
}

/// Render the three-panel comparison chart: both solutions, absolute error,
/// and relative error in percent.
pub fn plot_comparison<P: AsRef<Path>>(run: &SimulationRun, path: P) -> Result<(), Error> {
    let params = &run.params;
    let root = BitMapBackend::new(path.as_ref(), (1000, 900)).into_drawing_area();
    root.fill(&WHITE).map_err(to_render)?;
    let panels = root.split_evenly((3, 1));

    let x_range = padded(params.t_start as f64, params.t_end as f64);
    let (y_lo, y_hi) = y_bounds(run);

    // Panel 1: analytic curve with Euler points on top.
    {
        let mut chart = ChartBuilder::on(&panels[0])
            .margin(10)
            .caption(
                format!("dy/dt = {}*y: analytic vs Euler (h = {})", params.k, params.h),
                ("sans-serif", 20),
            )
            .x_label_area_size(30)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range.clone(), padded(y_lo, y_hi))
            .map_err(to_render)?;
        chart
            .configure_mesh()
            .x_desc("t")
            .y_desc("y(t)")
            .draw()
            .map_err(to_render)?;

        let smooth = curve(params.k, params.y0, params.t_start, params.t_end, CURVE_SAMPLES);
        chart
            .draw_series(LineSeries::new(
                smooth.iter().map(|&(t, y)| (t as f64, y as f64)),
                &BLUE,
            ))
            .map_err(to_render)?
            .label("analytic")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
        chart
            .draw_series(
                run.iter()
                    .map(|s| Circle::new((s.t as f64, s.y_euler as f64), 4, RED.filled())),
            )
            .map_err(to_render)?
            .label("Euler")
            .legend(|(x, y)| Circle::new((x + 10, y), 4, RED.filled()));
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(to_render)?;
    }

    // Panel 2: absolute error, filled to the baseline.
    {
        let mut chart = ChartBuilder::on(&panels[1])
            .margin(10)
            .caption(
                format!("absolute error (max {:.4})", run.stats.max_abs),
                ("sans-serif", 20),
            )
            .x_label_area_size(30)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range.clone(), padded(0.0, run.stats.max_abs as f64))
            .map_err(to_render)?;
        chart
            .configure_mesh()
            .x_desc("t")
            .y_desc("|exact - euler|")
            .draw()
            .map_err(to_render)?;
        chart
            .draw_series(
                AreaSeries::new(
                    run.iter().map(|s| (s.t as f64, s.abs_error as f64)),
                    0.0,
                    RED.mix(0.3),
                )
                .border_style(RED),
            )
            .map_err(to_render)?;
    }

    // Panel 3: relative error in percent.
    {
        let max_rel_pct = run.stats.max_rel as f64 * 100.0;
        let mut chart = ChartBuilder::on(&panels[2])
            .margin(10)
            .caption(
                format!("relative error (max {:.2}%)", max_rel_pct),
                ("sans-serif", 20),
            )
            .x_label_area_size(30)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range, padded(0.0, max_rel_pct))
            .map_err(to_render)?;
        chart
            .configure_mesh()
            .x_desc("t")
            .y_desc("error (%)")
            .draw()
            .map_err(to_render)?;
        chart
            .draw_series(
                AreaSeries::new(
                    run.iter().map(|s| (s.t as f64, s.rel_error as f64 * 100.0)),
                    0.0,
                    GREEN.mix(0.3),
                )
                .border_style(GREEN),
            )
            .map_err(to_render)?;
    }

    root.present().map_err(to_render)
}

/// Render the per-step error visualization: the analytic curve, the Euler
/// polyline with its points, and a vertical segment from each Euler point up
/// (or down) to the exact value.
pub fn plot_error_steps<P: AsRef<Path>>(run: &SimulationRun, path: P) -> Result<(), Error> {
    let params = &run.params;
    let root = BitMapBackend::new(path.as_ref(), (1000, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(to_render)?;

    let (y_lo, y_hi) = y_bounds(run);
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption("Euler error at each step", ("sans-serif", 24))
        .x_label_area_size(35)
        .y_label_area_size(60)
        .build_cartesian_2d(
            padded(params.t_start as f64, params.t_end as f64),
            padded(y_lo, y_hi),
        )
        .map_err(to_render)?;
    chart
        .configure_mesh()
        .x_desc("t")
        .y_desc("y(t)")
        .draw()
        .map_err(to_render)?;

    let smooth = curve(params.k, params.y0, params.t_start, params.t_end, CURVE_SAMPLES);
    chart
        .draw_series(LineSeries::new(
            smooth.iter().map(|&(t, y)| (t as f64, y as f64)),
            &BLUE,
        ))
        .map_err(to_render)?
        .label("analytic")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .draw_series(LineSeries::new(
            run.iter().map(|s| (s.t as f64, s.y_euler as f64)),
            RED.mix(0.5),
        ))
        .map_err(to_render)?;
    chart
        .draw_series(
            run.iter()
                .map(|s| Circle::new((s.t as f64, s.y_euler as f64), 5, RED.filled())),
        )
        .map_err(to_render)?
        .label("Euler")
        .legend(|(x, y)| Circle::new((x + 10, y), 4, RED.filled()));

    // One vertical segment per step joining the approximation to the exact value.
    chart
        .draw_series(run.iter().map(|s| {
            PathElement::new(
                vec![(s.t as f64, s.y_euler as f64), (s.t as f64, s.y_exact as f64)],
                RED,
            )
        }))
        .map_err(to_render)?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(to_render)?;

    root.present().map_err(to_render)
}
