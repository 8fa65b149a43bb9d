//! Text rendering of a comparison run: per-step table and summary block.

use std::fmt::Write;

use crate::solution::SimulationRun;

/// Render the per-step comparison table.
///
/// Columns: step index, abscissa (2 decimal places), Euler value, analytic
/// value, and absolute error (6 decimal places each).
pub fn table(run: &SimulationRun) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<5} {:<10} {:<20} {:<20} {:<15}",
        "n", "t_n", "y_n (Euler)", "y(t_n) (exact)", "abs error"
    );
    let _ = writeln!(out, "{}", "-".repeat(72));
    for step in run {
        let _ = writeln!(
            out,
            "{:<5} {:<10.2} {:<20.6} {:<20.6} {:<15.6}",
            step.n, step.t, step.y_euler, step.y_exact, step.abs_error
        );
    }
    out
}

/// Render the summary block: error statistics (relative errors as
/// percentages) and the final-time values of both methods.
pub fn summary(run: &SimulationRun) -> String {
    let mut out = String::new();
    let stats = &run.stats;
    let _ = writeln!(out, "Error statistics:");
    let _ = writeln!(out, "  max absolute error:   {:.6}", stats.max_abs);
    let _ = writeln!(out, "  mean absolute error:  {:.6}", stats.mean_abs);
    let _ = writeln!(out, "  max relative error:   {:.4}%", stats.max_rel * 100.0);
    let _ = writeln!(out, "  mean relative error:  {:.4}%", stats.mean_rel * 100.0);
    if let Some(last) = run.final_step() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Final values (t = {}):", last.t);
        let _ = writeln!(out, "  analytic solution:    {:.6}", last.y_exact);
        let _ = writeln!(out, "  Euler method:         {:.6}", last.y_euler);
        let _ = writeln!(out, "  difference:           {:.6}", last.abs_error);
    }
    out
}

/// Print the table and summary to stdout.
pub fn print_report(run: &SimulationRun) {
    let params = &run.params;
    println!(
        "Problem: dy/dt = {}*y, y({}) = {}, t in [{}, {}], h = {}",
        params.k, params.t_start, params.y0, params.t_start, params.t_end, params.h
    );
    println!();
    print!("{}", table(run));
    println!();
    print!("{}", summary(run));
}
