use crate::Point;

/// Receives each point a solver computes and decides whether solving continues.
///
/// A drawer is the only way to cancel a solve: returning `Err` stops point
/// generation and the solver hands that error back to its caller unchanged.
///
/// Closures automatically implement `Drawer`, and a built-in impl for `()`
/// provides a no-op drawer that accepts every point.
pub trait Drawer<E> {
    /// Accepts a computed point, or rejects it to abort the solve.
    ///
    /// # Errors
    ///
    /// Returns `E` to stop the solver; no further points are drawn.
    fn draw(&mut self, point: Point) -> Result<(), E>;
}

/// Blanket implementation for drawer closures.
impl<E, F> Drawer<E> for F
where
    F: FnMut(Point) -> Result<(), E>,
{
    fn draw(&mut self, point: Point) -> Result<(), E> {
        self(point)
    }
}

/// A no-op drawer that accepts every point.
impl<E> Drawer<E> for () {
    fn draw(&mut self, _point: Point) -> Result<(), E> {
        Ok(())
    }
}
