//! Simulated annealing over schedule swaps.
//!
//! Each step swaps two random slots, recomputes the total cost and keeps the
//! swap if it does not worsen the cost. A worsening swap survives with the
//! Metropolis probability `exp(-delta / T)`; otherwise it is undone.
//!
//! The temperature after step `k` (zero-based) is `T / (k + 1)`, so it falls
//! as `T0 / k!`. Uphill moves stop being accepted after a few dozen steps and
//! the rest of the run is a greedy descent. The run always takes exactly
//! `max_steps` steps.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;

pub use config::AnnealConfig;
pub use runner::{AnnealResult, AnnealRunner, AnnealState, Annealer};
