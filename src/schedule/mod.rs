//! Schedule grid and slot indexing.
//!
//! A schedule is a table of `num_matches` rows, each holding six team ids.
//! Positions 0-2 form the blue alliance and 3-5 the red alliance. Slots can
//! also be addressed by a flat index `6 * match + pos`.

mod grid;
mod index;

pub use grid::{Schedule, Team, DEFAULT_MATCHES_PER_TEAM};
pub use index::{
    ally_positions, opponent_positions, to_flat_index, to_match_and_pos, Alliance, ALLIANCE_SIZE,
    SLOTS_PER_MATCH,
};
