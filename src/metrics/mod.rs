//! Read-only analyses over a schedule grid.
//!
//! Nothing here is cached. Each call walks the current grid, so a result
//! taken before a swap says nothing about the schedule after it.

mod engine;
mod types;

pub use types::{AlliesAndOpponents, TurnaroundTable, NO_TURNAROUND};
