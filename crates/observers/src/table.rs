use std::io;

use odestep_core::{Drawer, Point};

/// A drawer that writes each point as a CSV record.
///
/// The header row is written before the first point. Coordinates are written
/// at full precision unless [`precision`][CsvDrawer::precision] is set.
///
/// Fails with the solver's error type, which must be constructible from a
/// [`csv::Error`].
///
/// # Example
///
/// ```ignore
/// let mut table = CsvDrawer::new(std::io::stdout()).headers("t", "v").precision(4);
/// solver.solve(0.1, 0.0, 1.0, 1.0, &mut table)?;
/// table.flush()?;
/// ```
pub struct CsvDrawer<W: io::Write> {
    writer: csv::Writer<W>,
    headers: [String; 2],
    precision: Option<usize>,
    wrote_headers: bool,
}

impl<W: io::Write> CsvDrawer<W> {
    /// Creates a drawer writing to `inner` with `x,y` headers.
    pub fn new(inner: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(inner),
            headers: ["x".to_owned(), "y".to_owned()],
            precision: None,
            wrote_headers: false,
        }
    }

    /// Sets the column headers.
    #[must_use]
    pub fn headers(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.headers = [x.into(), y.into()];
        self
    }

    /// Rounds both coordinates to `digits` decimal places.
    #[must_use]
    pub fn precision(mut self, digits: usize) -> Self {
        self.precision = Some(digits);
        self
    }

    /// Flushes buffered records to the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Flushes and returns the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the final flush fails.
    pub fn into_inner(self) -> Result<W, csv::IntoInnerError<csv::Writer<W>>> {
        self.writer.into_inner()
    }

    fn format(&self, value: f64) -> String {
        match self.precision {
            Some(digits) => format!("{value:.digits$}"),
            None => value.to_string(),
        }
    }
}

impl<W, E> Drawer<E> for CsvDrawer<W>
where
    W: io::Write,
    E: From<csv::Error>,
{
    fn draw(&mut self, point: Point) -> Result<(), E> {
        if !self.wrote_headers {
            self.writer.write_record(&self.headers)?;
            self.wrote_headers = true;
        }
        let record = [self.format(point.x), self.format(point.y)];
        self.writer.write_record(&record)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use odestep_solvers::{Euler, Solver};

    #[derive(Debug, thiserror::Error)]
    enum TableError {
        #[error(transparent)]
        Csv(#[from] csv::Error),
    }

    fn written(table: CsvDrawer<Vec<u8>>) -> String {
        String::from_utf8(table.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn writes_header_then_points() {
        let mut table = CsvDrawer::new(Vec::new());

        Drawer::<TableError>::draw(&mut table, Point::new(0.0, 1.0)).unwrap();
        Drawer::<TableError>::draw(&mut table, Point::new(0.5, 0.25)).unwrap();

        assert_eq!(written(table), "x,y\n0,1\n0.5,0.25\n");
    }

    #[test]
    fn custom_headers_and_precision() {
        let euler = Euler::new(|_, _| Ok::<_, TableError>(1.0));
        let mut table = CsvDrawer::new(Vec::new()).headers("t", "v").precision(2);

        euler.solve(0.5, 0.0, 0.0, 1.0, &mut table).unwrap();

        assert_eq!(written(table), "t,v\n0.00,0.00\n0.50,0.50\n1.00,1.00\n");
    }

    #[test]
    fn nothing_written_without_points() {
        let table = CsvDrawer::new(Vec::new());
        assert_eq!(written(table), "");
    }
}
