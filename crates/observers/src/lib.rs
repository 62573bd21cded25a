//! Reusable drawers for odestep solvers.
//!
//! This crate provides [`Drawer`] implementations that work with every
//! solver in `odestep-solvers`:
//!
//! - [`Collect`] — keeps every point in memory
//! - [`CsvDrawer`] — writes points as CSV records
//! - [`Logged`] — logs each point before handing it to another drawer
//!
//! # Features
//!
//! - `plot` — Enables [`Plot`] for viewing solution curves via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Drawer`]: odestep_core::Drawer

mod collect;
mod logged;
mod table;

pub use collect::{Collect, max_deviation};
pub use logged::Logged;
pub use table::CsvDrawer;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::{Plot, ShowConfig, Trace};
