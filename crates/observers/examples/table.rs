//! Tabulates every odestep solver as CSV.
//!
//! Solves y' = x² − 2y with y(0) = 1 on [0, 1] and writes one CSV table per
//! method to stdout, followed by each method's largest deviation from the
//! exact solution.
//!
//! # Usage
//!
//! ```text
//! cargo run --example table
//! cargo run --example table -- 0.05
//! RUST_LOG=debug cargo run --example table
//! ```
//!
//! The optional argument is the step size (default 0.1). Set `RUST_LOG` to
//! `debug` to log every drawn point to stderr.

use std::{error::Error, io};

use log::LevelFilter;
use odestep_core::{Drawer, Point};
use odestep_observers::{Collect, CsvDrawer, Logged, max_deviation};
use odestep_solvers::{Euler, Exact, ImprovedEuler, RungeKutta, Solver};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

#[derive(Debug, thiserror::Error)]
enum TableError {
    #[error("failed to write table: {0}")]
    Csv(#[from] csv::Error),
}

/// Writes each point as CSV while keeping a copy for the summary.
struct Tee<'a, W: io::Write> {
    table: &'a mut CsvDrawer<W>,
    collect: &'a mut Collect,
}

impl<W: io::Write> Drawer<TableError> for Tee<'_, W> {
    fn draw(&mut self, point: Point) -> Result<(), TableError> {
        Drawer::<TableError>::draw(&mut *self.table, point)?;
        Drawer::<TableError>::draw(&mut *self.collect, point)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let step = std::env::args()
        .nth(1)
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()
        .unwrap_or_else(|_| {
            eprintln!("Invalid step size — expected a number, e.g. 0.1");
            std::process::exit(1);
        })
        .unwrap_or(0.1);
    if !(step.is_finite() && step > 0.0) {
        eprintln!("Step size must be positive, got {step}");
        std::process::exit(1);
    }

    let f = |x: f64, y: f64| Ok::<_, TableError>(x * x - 2.0 * y);
    let solvers: Vec<Box<dyn Solver<Error = TableError>>> = vec![
        Box::new(Exact::new(
            |x: f64, c: f64| {
                Ok::<_, TableError>(x * x / 2.0 - x / 2.0 + 0.25 + c * (-2.0 * x).exp())
            },
            |x0: f64, y0: f64| Ok((y0 - x0 * x0 / 2.0 + x0 / 2.0 - 0.25) * (2.0 * x0).exp()),
        )),
        Box::new(Euler::new(f)),
        Box::new(ImprovedEuler::new(f)),
        Box::new(RungeKutta::new(f)),
    ];

    let mut trajectories = Vec::with_capacity(solvers.len());
    for solver in &solvers {
        println!("# {}", solver.name());

        let mut table = CsvDrawer::new(io::stdout().lock()).precision(6);
        let mut collect = Collect::new();
        let mut drawer = Logged::new(
            solver.name(),
            Tee {
                table: &mut table,
                collect: &mut collect,
            },
        );
        solver.solve(step, 0.0, 1.0, 1.0, &mut drawer)?;
        table.flush()?;

        trajectories.push((solver.name(), collect.into_points()));
        println!();
    }

    let (_, exact) = &trajectories[0];
    for (name, points) in &trajectories[1..] {
        let last = points.last().copied().unwrap_or(Point::new(f64::NAN, f64::NAN));
        println!(
            "{name:<24} last {last}  max deviation {:.6}",
            max_deviation(points, exact)
        );
    }

    Ok(())
}

fn init_logging() {
    let level = match std::env::var("RUST_LOG").as_deref() {
        Ok("trace") => LevelFilter::Trace,
        Ok("debug") => LevelFilter::Debug,
        Ok("info") => LevelFilter::Info,
        _ => LevelFilter::Warn,
    };
    let config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();
    // Fails only if a logger is already installed.
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}
