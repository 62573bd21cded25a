//! Explicit Euler solver.
//!
//! Steps the solution with a single derivative evaluation per step:
//!
//! ```text
//! y_{n+1} = y_n + h * f(x_n, y_n)
//! ```

use odestep_core::Drawer;

use crate::{Solver, march::march};

/// Explicit (forward) Euler method, first-order accurate.
#[derive(Debug, Clone, Copy)]
pub struct Euler<F> {
    f: F,
}

impl<F> Euler<F> {
    pub const NAME: &'static str = "Euler's method";

    /// Creates an Euler solver for `y' = f(x, y)`.
    pub fn new<E>(f: F) -> Self
    where
        F: Fn(f64, f64) -> Result<f64, E>,
    {
        Self { f }
    }
}

impl<F, E> Solver for Euler<F>
where
    F: Fn(f64, f64) -> Result<f64, E>,
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
        march(step, x0, y0, x_end, drawer, |x, y| {
            Ok(y + step * (self.f)(x, y)?)
        })
    }
}
