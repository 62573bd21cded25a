use std::fmt::Display;

use odestep_core::{Drawer, Point};

/// Wraps a drawer and logs every point it accepts or rejects.
///
/// Accepted points are logged at `debug` level and rejections at `warn`
/// level, both prefixed with the label. The solvers never log on their own;
/// wrap a drawer in `Logged` to trace a solve.
#[derive(Debug, Clone)]
pub struct Logged<D> {
    label: String,
    inner: D,
    accepted: usize,
}

impl<D> Logged<D> {
    /// Wraps `inner`, tagging log lines with `label`.
    pub fn new(label: impl Into<String>, inner: D) -> Self {
        Self {
            label: label.into(),
            inner,
            accepted: 0,
        }
    }

    /// Number of points the wrapped drawer has accepted.
    #[must_use]
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    #[must_use]
    pub fn inner(&self) -> &D {
        &self.inner
    }

    #[must_use]
    pub fn into_inner(self) -> D {
        self.inner
    }
}

impl<D, E> Drawer<E> for Logged<D>
where
    D: Drawer<E>,
    E: Display,
{
    fn draw(&mut self, point: Point) -> Result<(), E> {
        match self.inner.draw(point) {
            Ok(()) => {
                log::debug!("{}: #{} {point}", self.label, self.accepted);
                self.accepted += 1;
                Ok(())
            }
            Err(err) => {
                log::warn!(
                    "{}: rejected {point} after {} points: {err}",
                    self.label,
                    self.accepted
                );
                Err(err)
            }
        }
    }
}
