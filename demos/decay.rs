//! # Demo: Exponential Decay
//!
//! Run the comparison on the decay model dy/dt = -y with y(0) = 1 and a
//! coarse step, showing that the error analysis works for negative k too.

use eulercmp::prelude::*;

fn main() {
    let params = SimulationParams::builder()
        .k(-1.0)
        .y0(1.0)
        .t_end(5.0)
        .h(0.5)
        .build();

    match simulate(&params) {
        Ok(run) => {
            report::print_report(&run);
            if let Err(e) = plot_comparison(&run, "decay_vs_analytic.png") {
                eprintln!("plotting failed: {}", e);
            } else {
                println!("\nwrote decay_vs_analytic.png");
            }
        }
        Err(e) => eprintln!("comparison failed: {}", e),
    }
}
