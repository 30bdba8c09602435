//! Scalar penalties derived from schedule metrics.
//!
//! Three terms, summed without weights:
//!
//! - **Turnaround**: short gaps between a team's matches cost `10^k` where
//!   `k` grows with the shortfall below the optimal spacing. Very long gaps
//!   (at least twice optimal) pay the largest tier.
//! - **Ally**: `2^(max_allies - distinct_allies)` per team.
//! - **Opponent**: `10^(max_opponents - distinct_opponents)` per team.
//!
//! Lower is better.

mod model;
mod types;

pub use model::turnaround_cost_table;
pub use types::CostBreakdown;
