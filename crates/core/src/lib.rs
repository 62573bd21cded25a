//! Core types for the odestep solvers.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Point`] — an `(x, y)` sample on a solution curve
//! - [`Drawer`] — receives each computed point and may abort the solve
//! - [`Grid`] — a validated, evenly spaced set of abscissas
//! - [`step_size`] — the spacing that places a given number of points on an
//!   interval

mod drawer;
mod grid;
mod point;

pub use drawer::Drawer;
pub use grid::{Grid, GridError, GridIter, step_size};
pub use point::Point;
