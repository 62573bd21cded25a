//! Classical fourth-order Runge-Kutta solver.
//!
//! ```text
//! k1 = f(x_n,       y_n)
//! k2 = f(x_n + h/2, y_n + h/2 * k1)
//! k3 = f(x_n + h/2, y_n + h/2 * k2)
//! k4 = f(x_n + h,   y_n + h * k3)
//!
//! y_{n+1} = y_n + h/6 * (k1 + 2k2 + 2k3 + k4)
//! ```

use odestep_core::Drawer;

use crate::{Solver, march::march};

/// Classical four-stage Runge-Kutta method, fourth-order accurate.
#[derive(Debug, Clone, Copy)]
pub struct RungeKutta<F> {
    f: F,
}

impl<F> RungeKutta<F> {
    pub const NAME: &'static str = "Runge-Kutta's method";

    /// Creates a Runge-Kutta solver for `y' = f(x, y)`.
    pub fn new<E>(f: F) -> Self
    where
        F: Fn(f64, f64) -> Result<f64, E>,
    {
        Self { f }
    }
}

impl<F, E> Solver for RungeKutta<F>
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
        let half = step / 2.0;

        march(step, x0, y0, x_end, drawer, |x, y| {
            let k1 = (self.f)(x, y)?;
            let k2 = (self.f)(x + half, y + half * k1)?;
            let k3 = (self.f)(x + half, y + half * k2)?;
            let k4 = (self.f)(x + step, y + step * k3)?;
            Ok(y + step / 6.0 * (k1 + 2.0 * k2 + 2.0 * k3 + k4))
        })
    }
}
