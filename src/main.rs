//! Reference run: k = 1.5, y0 = 100, t in [0, 1], h = 0.2.
//!
//! Prints the comparison table and error summary, then writes the two chart
//! artifacts to the working directory. No CLI flags; failures exit non-zero.

use eulercmp::prelude::*;

const COMPARISON_PNG: &str = "euler_vs_analytic.png";
const ERROR_STEPS_PNG: &str = "euler_error_steps.png";

fn run() -> Result<(), Error> {
    let params = SimulationParams::builder()
        .k(1.5)
        .y0(100.0)
        .t_start(0.0)
        .t_end(1.0)
        .h(0.2)
        .build();

    let run = simulate(&params)?;
    report::print_report(&run);

    plot_comparison(&run, COMPARISON_PNG)?;
    println!("\nwrote {}", COMPARISON_PNG);
    plot_error_steps(&run, ERROR_STEPS_PNG)?;
    println!("wrote {}", ERROR_STEPS_PNG);

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("comparison failed: {}", e);
        std::process::exit(1);
    }
}
