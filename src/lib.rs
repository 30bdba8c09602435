//! Match schedule generation for three-vs-three competitions.
//!
//! A schedule assigns teams to the six slots (three blue, three red) of each
//! match so that every team plays roughly `matches_per_team` times. This
//! crate provides:
//!
//! - **Schedule grid**: round-robin construction, uniform shuffle, single
//!   swaps, and a per-match view for printing or serialization.
//! - **Metrics**: per-team match counts, per-match duplicates, turnaround
//!   gaps between a team's matches, and the distinct allies and opponents
//!   each team meets.
//! - **Cost model**: exponential penalties for short turnarounds and for
//!   low ally/opponent diversity, summed into one scalar.
//! - **Annealing**: simulated annealing with a pairwise-swap neighborhood
//!   and the Metropolis acceptance rule.
//!
//! Metrics and costs are never cached; they are recomputed from the grid on
//! every call.
//!
//! # Example
//!
//! ```
//! use match_schedule::Schedule;
//!
//! let mut schedule = Schedule::with_seed(30, 12, 42).unwrap();
//! assert_eq!(schedule.num_matches(), 60);
//! assert_eq!(schedule.get_turnaround_cost().unwrap(), 0.0);
//!
//! schedule.shuffle();
//! let result = schedule.optimize(1000.0, 500).unwrap();
//! assert!(result.best_cost <= result.initial_cost);
//! ```

pub mod anneal;
pub mod cost;
pub mod error;
pub mod metrics;
pub mod schedule;

pub use anneal::{AnnealConfig, AnnealResult};
pub use cost::CostBreakdown;
pub use error::{Result, ScheduleError};
pub use schedule::{Schedule, Team, DEFAULT_MATCHES_PER_TEAM};
