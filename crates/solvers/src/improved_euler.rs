//! Improved Euler (Heun) solver.
//!
//! Predicts with an Euler step, then corrects with the average of the slopes
//! at both ends of the step:
//!
//! ```text
//! y* = y_n + h * f(x_n, y_n)
//! y_{n+1} = y_n + h/2 * (f(x_n, y_n) + f(x_n + h, y*))
//! ```

use odestep_core::Drawer;

use crate::{Solver, march::march};

/// Improved Euler (Heun's) method, second-order accurate.
#[derive(Debug, Clone, Copy)]
pub struct ImprovedEuler<F> {
    f: F,
}

impl<F> ImprovedEuler<F> {
    pub const NAME: &'static str = "Improved Euler's method";

    /// Creates an improved Euler solver for `y' = f(x, y)`.
    pub fn new<E>(f: F) -> Self
    where
        F: Fn(f64, f64) -> Result<f64, E>,
    {
        Self { f }
    }
}

impl<F, E> Solver for ImprovedEuler<F>
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
            let slope = (self.f)(x, y)?;
            let predicted = y + step * slope;
            let corrected = (self.f)(x + step, predicted)?;
            Ok(y + step / 2.0 * (slope + corrected))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{cell::Cell, convert::Infallible};

    use approx::assert_abs_diff_eq;
    use odestep_core::Point;

    #[test]
    fn name() {
        assert_eq!(ImprovedEuler::<()>::NAME, "Improved Euler's method");
        let heun = ImprovedEuler::new(|_, _| Ok::<_, Infallible>(0.0));
        assert_eq!(heun.name(), "Improved Euler's method");
    }

    #[test]
    fn linear_slope_is_exact() {
        // y' = 2x integrates to y = x² exactly under the trapezoidal rule.
        let heun = ImprovedEuler::new(|x: f64, _| Ok::<_, Infallible>(2.0 * x));
        let mut points = Vec::new();

        heun.solve(0.5, 0.0, 0.0, 2.0, &mut |p: Point| -> Result<(), Infallible> {
            points.push(p);
            Ok(())
        })
        .unwrap();

        assert_eq!(points.len(), 5);
        for p in &points {
            assert_abs_diff_eq!(p.y, p.x * p.x, epsilon = 1e-12);
        }
    }

    #[test]
    fn two_evaluations_per_step() {
        let calls = Cell::new(0);
        let heun = ImprovedEuler::new(|_, y: f64| {
            calls.set(calls.get() + 1);
            Ok::<_, Infallible>(-y)
        });

        heun.solve(0.1, 0.0, 1.0, 1.0, &mut ()).unwrap();

        assert_eq!(calls.get(), 22);
    }

    #[test]
    fn corrector_error_aborts() {
        // The corrector evaluates at x + h, so the failure surfaces while
        // stepping away from the point before the bad abscissa.
        let heun = ImprovedEuler::new(|x: f64, _| {
            if x > 0.25 { Err("singular") } else { Ok(1.0) }
        });
        let mut drawn = 0;

        let result = heun.solve(0.2, 0.0, 0.0, 1.0, &mut |_: Point| -> Result<(), &'static str> {
            drawn += 1;
            Ok(())
        });

        assert_eq!(result, Err("singular"));
        assert_eq!(drawn, 2);
    }

    #[test]
    fn predictor_error_aborts() {
        // From (0, 0) with h = 1 the corrector samples (1, 0) and lands on
        // y = 0.5, so only the predictor at (1, 0.5) sees y above 0.25.
        let calls = Cell::new(0);
        let heun = ImprovedEuler::new(|x: f64, y: f64| {
            calls.set(calls.get() + 1);
            if y > 0.25 { Err("singular") } else { Ok(x) }
        });
        let mut drawn = Vec::new();

        let result = heun.solve(1.0, 0.0, 0.0, 3.0, &mut |p: Point| -> Result<(), &'static str> {
            drawn.push(p);
            Ok(())
        });

        assert_eq!(result, Err("singular"));
        assert_eq!(calls.get(), 3);
        assert_eq!(drawn, vec![Point::new(0.0, 0.0), Point::new(1.0, 0.5)]);
    }

    #[test]
    fn corrector_error_past_the_end_is_returned() {
        let heun = ImprovedEuler::new(|x: f64, _| if x > 1.05 { Err("domain") } else { Ok(1.0) });
        let mut drawn = 0;

        let result = heun.solve(0.1, 0.0, 0.0, 1.0, &mut |_: Point| -> Result<(), &'static str> {
            drawn += 1;
            Ok(())
        });

        assert_eq!(result, Err("domain"));
        assert_eq!(drawn, 11);
    }
}
