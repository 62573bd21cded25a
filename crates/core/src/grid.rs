use thiserror::Error;

/// Relative slack, in units of `step`, allowed when deciding whether the last
/// abscissa still lies inside the interval.
const ENDPOINT_TOLERANCE: f64 = 1e-9;

/// Returns the spacing that places `num_points` samples across
/// `[x_start, x_end]`, including both ends.
///
/// Callers must supply `num_points >= 2`. Smaller counts produce a
/// meaningless result (infinite or negative spacing); use
/// [`Grid::with_points`] for a checked alternative.
#[must_use]
pub fn step_size(num_points: usize, x_start: f64, x_end: f64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let intervals = num_points as f64 - 1.0;
    (x_end - x_start) / intervals
}

/// Errors returned when a [`Grid`] cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GridError {
    #[error("step must be positive and finite, got {0}")]
    InvalidStep(f64),

    #[error("interval bounds must be finite, got [{start}, {end}]")]
    NonFiniteBound { start: f64, end: f64 },

    #[error("interval end {end} precedes start {start}")]
    ReversedInterval { start: f64, end: f64 },

    #[error("a grid needs at least two points, got {0}")]
    TooFewPoints(usize),
}

/// Evenly spaced abscissas `start, start + step, ...` up to and including `end`.
///
/// The `k`-th abscissa is computed as `start + k * step` rather than by
/// repeated addition, so it does not drift over long runs. The endpoint is
/// included when the last abscissa overshoots `end` by no more than a
/// rounding error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    start: f64,
    step: f64,
    end: f64,
    len: usize,
}

impl Grid {
    /// Creates a validated grid with the given spacing.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if either bound is not finite, if `step` is not
    /// positive and finite, or if `end < start`.
    pub fn new(step: f64, start: f64, end: f64) -> Result<Self, GridError> {
        check_bounds(start, end)?;
        if !(step.is_finite() && step > 0.0) {
            return Err(GridError::InvalidStep(step));
        }
        Ok(Self::covering(step, start, end))
    }

    /// Creates a grid with exactly `num_points` abscissas across `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TooFewPoints`] if `num_points < 2`, and the same
    /// errors as [`Grid::new`] for bad bounds or an empty interval.
    pub fn with_points(num_points: usize, start: f64, end: f64) -> Result<Self, GridError> {
        if num_points < 2 {
            return Err(GridError::TooFewPoints(num_points));
        }
        check_bounds(start, end)?;

        let step = step_size(num_points, start, end);
        if step <= 0.0 {
            return Err(GridError::InvalidStep(step));
        }

        Ok(Self {
            start,
            step,
            end,
            len: num_points,
        })
    }

    /// Creates a grid without validating the bounds.
    ///
    /// An interval with `end < start` yields an empty grid. An interval too
    /// long to count, such as one ending at infinity, saturates at
    /// `usize::MAX` points, so iteration runs until the consumer stops it.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not positive and finite.
    #[must_use]
    pub fn covering(step: f64, start: f64, end: f64) -> Self {
        assert!(
            step.is_finite() && step > 0.0,
            "grid step must be positive and finite, got {step}"
        );

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let len = if end >= start {
            (((end - start) / step + ENDPOINT_TOLERANCE).floor() as usize).saturating_add(1)
        } else {
            0
        };

        Self {
            start,
            step,
            end,
            len,
        }
    }

    /// The first abscissa.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// The inclusive upper bound of the interval.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// The spacing between neighbouring abscissas.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// The number of abscissas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the `index`-th abscissa, or `None` past the end of the grid.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        (index < self.len).then(|| self.x_at(index))
    }

    /// Iterates over the abscissas in increasing order.
    #[must_use]
    pub fn iter(&self) -> GridIter {
        GridIter {
            grid: *self,
            index: 0,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn x_at(&self, index: usize) -> f64 {
        self.start + index as f64 * self.step
    }
}

fn check_bounds(start: f64, end: f64) -> Result<(), GridError> {
    if !(start.is_finite() && end.is_finite()) {
        return Err(GridError::NonFiniteBound { start, end });
    }
    if end < start {
        return Err(GridError::ReversedInterval { start, end });
    }
    Ok(())
}

impl IntoIterator for &Grid {
    type Item = f64;
    type IntoIter = GridIter;

    fn into_iter(self) -> GridIter {
        self.iter()
    }
}

/// Iterator over the abscissas of a [`Grid`].
#[derive(Debug, Clone)]
pub struct GridIter {
    grid: Grid,
    index: usize,
}

impl Iterator for GridIter {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let x = self.grid.get(self.index)?;
        self.index += 1;
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridIter {}
