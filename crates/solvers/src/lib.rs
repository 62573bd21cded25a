//! Fixed-step solvers for first-order ODEs of the form `y' = f(x, y)`.
//!
//! Every solver implements [`Solver`]: given a step size, an initial
//! condition, and an inclusive end point, it walks the grid
//! `x0, x0 + step, ...` and hands each `(x, y)` sample to a [`Drawer`].
//!
//! # Solvers
//!
//! - [`Euler`] — explicit Euler, first order
//! - [`ImprovedEuler`] — Heun's predictor-corrector, second order
//! - [`RungeKutta`] — classical four-stage Runge-Kutta, fourth order
//! - [`Exact`] — evaluates a closed-form solution, used as ground truth
//!
//! # Errors
//!
//! A solver's error type is the caller's. The derivative function, the
//! integration-constant function, and the drawer all return the same `E`, and
//! the first failure is returned unchanged.
//!
//! [`Drawer`]: odestep_core::Drawer

mod euler;
mod exact;
mod improved_euler;
mod march;
mod runge_kutta;
mod solver;

pub use euler::Euler;
pub use exact::Exact;
pub use improved_euler::ImprovedEuler;
pub use runge_kutta::RungeKutta;
pub use solver::Solver;
