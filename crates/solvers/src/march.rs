use odestep_core::{Drawer, Grid, Point};

/// Walks the grid covering `[x0, x_end]`, drawing each point before advancing.
///
/// `advance` maps `(x_n, y_n)` to `y_{n+1}` and runs after every drawn point,
/// the last one included. An error from that final advance is returned even
/// though the point it would produce lies past `x_end`.
///
/// # Panics
///
/// Panics if `step` is not positive and finite.
pub(crate) fn march<E, A>(
    step: f64,
    x0: f64,
    y0: f64,
    x_end: f64,
    drawer: &mut dyn Drawer<E>,
    mut advance: A,
) -> Result<(), E>
where
    A: FnMut(f64, f64) -> Result<f64, E>,
{
    let grid = Grid::covering(step, x0, x_end);
    let mut y = y0;

    for x in &grid {
        drawer.draw(Point::new(x, y))?;
        y = advance(x, y)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    #[test]
    fn advance_follows_every_point() {
        let mut advances = 0;
        let mut points = Vec::new();

        march(
            0.25,
            0.0,
            0.0,
            1.0,
            &mut |p: Point| -> Result<(), Infallible> {
                points.push(p);
                Ok(())
            },
            |_, y| {
                advances += 1;
                Ok(y + 1.0)
            },
        )
        .unwrap();

        assert_eq!(points.len(), 5);
        assert_eq!(advances, 5);
        assert_relative_eq!(points[4].x, 1.0);
        assert_relative_eq!(points[4].y, 4.0);
    }

    #[test]
    fn advance_error_stops_after_current_point() {
        let mut points = Vec::new();

        let result = march(
            0.5,
            0.0,
            0.0,
            2.0,
            &mut |p: Point| -> Result<(), &'static str> {
                points.push(p);
                Ok(())
            },
            |x, y| if x < 0.5 { Ok(y) } else { Err("blew up") },
        );

        assert_eq!(result, Err("blew up"));
        assert_eq!(points, vec![Point::new(0.0, 0.0), Point::new(0.5, 0.0)]);
    }

    #[test]
    fn final_advance_error_is_returned() {
        let mut points = Vec::new();

        let result = march(
            0.5,
            0.0,
            0.0,
            1.0,
            &mut |p: Point| -> Result<(), &'static str> {
                points.push(p);
                Ok(())
            },
            |x, y| if x < 1.0 { Ok(y + 1.0) } else { Err("past the end") },
        );

        assert_eq!(result, Err("past the end"));
        assert_eq!(points.len(), 3);
        assert_relative_eq!(points[2].y, 2.0);
    }
}
