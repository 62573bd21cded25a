//! Interactive comparison of the odestep solvers.
//!
//! Solves y' = x² − 2y with y(0) = 1 on [0, 3] using every method and opens a
//! plot window with one curve per method.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot
//! cargo run --example plot --features plot -- 8
//! cargo run --example plot --features plot -- 8 error
//! ```
//!
//! The optional first argument is the number of grid points (default 30).
//! Fewer points mean larger steps, and the lower-order methods drift visibly
//! away from the exact curve. Pass `error` as the second argument to plot
//! each method's absolute error on a logarithmic scale instead.

use std::{convert::Infallible, error::Error};

use odestep_core::{Grid, Point};
use odestep_observers::{Collect, Plot, ShowConfig, max_deviation};
use odestep_solvers::{Euler, Exact, ImprovedEuler, RungeKutta, Solver};

fn main() -> Result<(), Box<dyn Error>> {
    let num_points = std::env::args()
        .nth(1)
        .as_deref()
        .map(str::parse::<usize>)
        .transpose()
        .unwrap_or_else(|_| {
            eprintln!("Invalid point count — expected an integer, e.g. 30");
            std::process::exit(1);
        })
        .unwrap_or(30);
    let show_error = match std::env::args().nth(2).as_deref() {
        None => false,
        Some("error") => true,
        Some(other) => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [points] [error]");
            std::process::exit(1);
        }
    };

    let grid = Grid::with_points(num_points, 0.0, 3.0)?;

    let mut trajectories = Vec::new();
    for solver in solvers() {
        let mut collect = Collect::with_capacity(grid.len());
        solver.solve_grid(&grid, 1.0, &mut collect)?;
        trajectories.push((solver.name(), collect.into_points()));
    }

    let exact = trajectories[0].1.clone();
    let mut plot = Plot::new();
    for (name, points) in trajectories {
        if !show_error {
            plot.extend(name, points);
        } else if name != Exact::<(), ()>::NAME {
            println!("{name}: max error {:.2e}", max_deviation(&points, &exact));
            let errors = points
                .iter()
                .zip(&exact)
                .map(|(p, e)| Point::new(p.x, (p.y - e.y).abs()));
            plot.extend(name, errors);
        }
    }

    let config = ShowConfig::new()
        .title(format!("y' = x² − 2y, y(0) = 1, h = {:.4}", grid.step()))
        .legend();
    plot.show(if show_error { config.log_y() } else { config })?;

    Ok(())
}

/// Every method, exact solution first.
fn solvers() -> Vec<Box<dyn Solver<Error = Infallible>>> {
    let f = |x: f64, y: f64| Ok::<_, Infallible>(x * x - 2.0 * y);

    vec![
        Box::new(Exact::new(
            |x: f64, c: f64| {
                Ok::<_, Infallible>(x * x / 2.0 - x / 2.0 + 0.25 + c * (-2.0 * x).exp())
            },
            |x0: f64, y0: f64| Ok((y0 - x0 * x0 / 2.0 + x0 / 2.0 - 0.25) * (2.0 * x0).exp()),
        )),
        Box::new(Euler::new(f)),
        Box::new(ImprovedEuler::new(f)),
        Box::new(RungeKutta::new(f)),
    ]
}
