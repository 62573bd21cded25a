use odestep_core::{Drawer, Grid};

/// A method that produces points on the solution curve of `y' = f(x, y)`.
///
/// Implementations hold only the functions they need and keep no state
/// between calls, so a single solver can be shared and reused freely.
///
/// The trait is object safe, so different methods can be stored together as
/// `Box<dyn Solver<Error = E>>`.
pub trait Solver {
    /// The error shared by the solver's functions and the drawer.
    type Error;

    /// Returns the human-readable name of the method.
    fn name(&self) -> &'static str;

    /// Solves from `(x0, y0)` to `x_end` with a fixed step.
    ///
    /// Emits the point at `x0`, then each following grid point, while `x`
    /// does not exceed `x_end`. An interval with `x_end < x0` emits nothing.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a solver function or by `drawer`.
    /// Points drawn before the failure stay drawn.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not positive and finite.
    fn solve(
        &self,
        step: f64,
        x0: f64,
        y0: f64,
        x_end: f64,
        drawer: &mut dyn Drawer<Self::Error>,
    ) -> Result<(), Self::Error>;

    /// Solves over a validated [`Grid`] starting from `y0`.
    ///
    /// # Errors
    ///
    /// Same as [`Solver::solve`].
    fn solve_grid(
        &self,
        grid: &Grid,
        y0: f64,
        drawer: &mut dyn Drawer<Self::Error>,
    ) -> Result<(), Self::Error> {
        self.solve(grid.step(), grid.start(), y0, grid.end(), drawer)
    }
}

/// Allows a shared reference to stand in for the solver itself.
impl<S: Solver + ?Sized> Solver for &S {
    type Error = S::Error;

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn solve(
        &self,
        step: f64,
        x0: f64,
        y0: f64,
        x_end: f64,
        drawer: &mut dyn Drawer<Self::Error>,
    ) -> Result<(), Self::Error> {
        (**self).solve(step, x0, y0, x_end, drawer)
    }
}

impl<S: Solver + ?Sized> Solver for Box<S> {
    type Error = S::Error;

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn solve(
        &self,
        step: f64,
        x0: f64,
        y0: f64,
        x_end: f64,
        drawer: &mut dyn Drawer<Self::Error>,
    ) -> Result<(), Self::Error> {
        (**self).solve(step, x0, y0, x_end, drawer)
    }
}
