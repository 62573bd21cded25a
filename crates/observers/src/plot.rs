//! Plotting drawer for viewing solution curves.
//!
//! See [`Plot`] and [`ShowConfig`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, PlotPoints};
use odestep_core::{Drawer, Point};

/// Configuration for rendering a [`Plot`].
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
/// All fields are independent with sensible defaults.
///
/// # Example
///
/// ```ignore
/// plot.show(ShowConfig::new().title("y' = x² − 2y").legend())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    log_y: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend, linear scale.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            log_y: false,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Enables a logarithmic y-axis (base 10).
    ///
    /// y values are transformed with log₁₀ before plotting. Non-positive
    /// values are silently skipped.
    #[must_use]
    pub fn log_y(mut self) -> Self {
        self.log_y = true;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Collects named solution curves and displays them via egui.
///
/// Each curve is filled through a [`Trace`], a drawer borrowed from the plot
/// with [`Plot::trace`]. Typically one trace per solver, named after it.
///
/// # Example
///
/// ```ignore
/// let mut plot = Plot::new();
/// for solver in &solvers {
///     solver.solve(0.1, 0.0, 1.0, 3.0, &mut plot.trace(solver.name()))?;
/// }
/// plot.show(ShowConfig::new().title("Comparison").legend())?;
/// ```
#[derive(Debug, Default)]
pub struct Plot {
    traces: Vec<(String, Vec<[f64; 2]>)>,
}

impl Plot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a drawer appending to the trace called `name`.
    ///
    /// The trace is created on first use; later calls with the same name
    /// continue the existing curve.
    pub fn trace(&mut self, name: impl Into<String>) -> Trace<'_> {
        let name = name.into();
        let index = match self.traces.iter().position(|(n, _)| *n == name) {
            Some(index) => index,
            None => {
                self.traces.push((name, Vec::new()));
                self.traces.len() - 1
            }
        };
        Trace {
            points: &mut self.traces[index].1,
        }
    }

    /// Appends already computed points to the trace called `name`.
    pub fn extend(&mut self, name: impl Into<String>, points: impl IntoIterator<Item = Point>) {
        self.trace(name)
            .points
            .extend(points.into_iter().map(<[f64; 2]>::from));
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();
        let traces = self.traces;

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    traces,
                    legend: config.legend,
                    log_y: config.log_y,
                }))
            }),
        )
    }
}

/// A drawer that appends points to one curve of a [`Plot`].
///
/// Never rejects a point.
#[derive(Debug)]
pub struct Trace<'a> {
    points: &'a mut Vec<[f64; 2]>,
}

impl<E> Drawer<E> for Trace<'_> {
    fn draw(&mut self, point: Point) -> Result<(), E> {
        self.points.push(point.into());
        Ok(())
    }
}

/// Points as they should be rendered, applying the log₁₀ y transform if requested.
fn rendered(points: &[[f64; 2]], log_y: bool) -> Vec<[f64; 2]> {
    if log_y {
        points
            .iter()
            .filter(|p| p[1] > 0.0)
            .map(|p| [p[0], p[1].log10()])
            .collect()
    } else {
        points.to_vec()
    }
}

/// The egui [`eframe::App`] that renders collected traces.
struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    legend: bool,
    log_y: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = egui_plot::Plot::new("odestep_plot").x_axis_label("x");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            plot = plot.y_axis_label(if self.log_y { "log₁₀ y" } else { "y" });
            let log_y = self.log_y;
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.traces {
                    let plot_points: PlotPoints = rendered(points, log_y).into_iter().collect();
                    plot_ui.line(Line::new(plot_points).name(name));
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use odestep_solvers::{Euler, Solver};

    fn feed(trace: &mut Trace<'_>, point: Point) {
        let _: Result<(), Infallible> = trace.draw(point);
    }

    #[test]
    fn trace_records_points() {
        let mut plot = Plot::new();
        feed(&mut plot.trace("a"), Point::new(1.0, 2.0));

        assert_eq!(plot.traces.len(), 1);
        assert_eq!(plot.traces[0].0, "a");
        assert_eq!(plot.traces[0].1, [[1.0, 2.0]]);
    }

    #[test]
    fn same_name_continues_trace() {
        let mut plot = Plot::new();
        feed(&mut plot.trace("a"), Point::new(1.0, 10.0));
        feed(&mut plot.trace("b"), Point::new(1.0, 20.0));
        feed(&mut plot.trace("a"), Point::new(2.0, 11.0));

        assert_eq!(plot.traces.len(), 2);
        assert_eq!(plot.traces[0].1, [[1.0, 10.0], [2.0, 11.0]]);
        assert_eq!(plot.traces[1].1, [[1.0, 20.0]]);
    }

    #[test]
    fn solver_fills_trace_named_after_it() {
        let euler = Euler::new(|_, _| Ok::<_, Infallible>(1.0));
        let mut plot = Plot::new();

        euler
            .solve(0.5, 0.0, 0.0, 1.0, &mut plot.trace(euler.name()))
            .unwrap();

        assert_eq!(plot.traces[0].0, "Euler's method");
        assert_eq!(plot.traces[0].1, [[0.0, 0.0], [0.5, 0.5], [1.0, 1.0]]);
    }

    #[test]
    fn extend_appends_precomputed_points() {
        let mut plot = Plot::new();
        plot.extend("error", [Point::new(0.0, 0.1), Point::new(1.0, 0.2)]);
        plot.extend("error", [Point::new(2.0, 0.3)]);

        assert_eq!(plot.traces.len(), 1);
        assert_eq!(plot.traces[0].1, [[0.0, 0.1], [1.0, 0.2], [2.0, 0.3]]);
    }

    #[test]
    fn log_scale_skips_non_positive_values() {
        let points = [[0.0, 100.0], [1.0, 0.0], [2.0, -1.0], [3.0, 10.0]];

        assert_eq!(rendered(&points, true), vec![[0.0, 2.0], [3.0, 1.0]]);
        assert_eq!(rendered(&points, false), points.to_vec());
    }
}
