use odestep_core::{Drawer, Point};

/// A drawer that keeps every point it receives.
///
/// Never rejects a point, so it can be used with any solver error type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collect {
    points: Vec<Point>,
}

impl Collect {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collector with room for `capacity` points.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// The points received so far, in drawing order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl<E> Drawer<E> for Collect {
    fn draw(&mut self, point: Point) -> Result<(), E> {
        self.points.push(point);
        Ok(())
    }
}

/// Returns the largest `|a.y - b.y|` over points paired by position.
///
/// Extra points in the longer slice are ignored. Two empty slices have zero
/// deviation.
#[must_use]
pub fn max_deviation(a: &[Point], b: &[Point]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(p, q)| (p.y - q.y).abs())
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;
    use odestep_solvers::{Euler, Solver};

    #[test]
    fn keeps_points_in_order() {
        let mut collect = Collect::new();

        let _: Result<(), Infallible> = collect.draw(Point::new(0.0, 1.0));
        let _: Result<(), Infallible> = collect.draw(Point::new(0.5, 2.0));

        assert_eq!(collect.len(), 2);
        assert_eq!(
            collect.points(),
            [Point::new(0.0, 1.0), Point::new(0.5, 2.0)]
        );
    }

    #[test]
    fn collects_a_solve() {
        let euler = Euler::new(|_, _| Ok::<_, Infallible>(1.0));
        let mut collect = Collect::with_capacity(5);

        euler.solve(0.25, 0.0, 0.0, 1.0, &mut collect).unwrap();

        let points = collect.into_points();
        assert_eq!(points.len(), 5);
        assert_relative_eq!(points[4].y, 1.0);
    }

    #[test]
    fn max_deviation_picks_largest_gap() {
        let a = [Point::new(0.0, 1.0), Point::new(1.0, 2.0), Point::new(2.0, 3.0)];
        let b = [Point::new(0.0, 1.5), Point::new(1.0, 1.0), Point::new(2.0, 3.0)];

        assert_relative_eq!(max_deviation(&a, &b), 1.0);
    }

    #[test]
    fn max_deviation_of_empty_is_zero() {
        assert_relative_eq!(max_deviation(&[], &[Point::new(0.0, 1.0)]), 0.0);
    }
}
