//! Exact solution evaluator.
//!
//! Rather than stepping, this solver evaluates a closed-form family of
//! solutions `y = f(x, c)` at every grid point. The integration constant `c`
//! is fixed once per solve from the initial condition, so no numerical error
//! accumulates and the result can serve as a reference for the steppers.

use odestep_core::{Drawer, Grid, Point};

use crate::Solver;

/// Evaluates a closed-form solution `y = f(x, c)` on the grid.
///
/// `constant(x0, y0)` returns the integration constant `c` that makes the
/// family pass through the initial point.
#[derive(Debug, Clone, Copy)]
pub struct Exact<F, C> {
    f: F,
    constant: C,
}

impl<F, C> Exact<F, C> {
    pub const NAME: &'static str = "Exact solution";

    /// Creates an evaluator from a solution family and its constant solver.
    pub fn new<E>(f: F, constant: C) -> Self
    where
        F: Fn(f64, f64) -> Result<f64, E>,
        C: Fn(f64, f64) -> Result<f64, E>,
    {
        Self { f, constant }
    }
}

impl<F, C, E> Solver for Exact<F, C>
where
    F: Fn(f64, f64) -> Result<f64, E>,
    C: Fn(f64, f64) -> Result<f64, E>,
{
    type Error = E;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn solve(
        &self,
        step: f64,
        x0: f64,
        y0: f64,
        x_end: f64,
        drawer: &mut dyn Drawer<E>,
    ) -> Result<(), E> {
        let grid = Grid::covering(step, x0, x_end);
        let c = (self.constant)(x0, y0)?;

        for x in &grid {
            let y = (self.f)(x, c)?;
            drawer.draw(Point::new(x, y))?;
        }

        Ok(())
    }
}
