//! Conversion between flat slot indices and `(match, position)` pairs.
//!
//! Neither direction checks bounds. Passing a position outside `0..6` or a
//! flat index past the end of a grid yields a consistent number that does
//! not name a real slot; callers own that check.

/// Number of team slots in one match (three blue, three red).
pub const SLOTS_PER_MATCH: usize = 6;

/// Number of slots on one alliance.
pub const ALLIANCE_SIZE: usize = 3;

/// Linearizes `(match, pos)` as `6 * match + pos`.
#[inline]
pub fn to_flat_index(match_index: usize, pos: usize) -> usize {
    SLOTS_PER_MATCH * match_index + pos
}

/// Splits a flat index into `(match, pos)`.
#[inline]
pub fn to_match_and_pos(flat: usize) -> (usize, usize) {
    (flat / SLOTS_PER_MATCH, flat % SLOTS_PER_MATCH)
}

/// Alliance color of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alliance {
    /// Positions 0-2.
    Blue,
    /// Positions 3-5.
    Red,
}

impl Alliance {
    /// Alliance of a position. Positions `>= 6` wrap like [`to_match_and_pos`].
    pub fn of(pos: usize) -> Self {
        if pos % SLOTS_PER_MATCH < ALLIANCE_SIZE {
            Alliance::Blue
        } else {
            Alliance::Red
        }
    }

    /// The opposing alliance.
    pub fn opposite(self) -> Self {
        match self {
            Alliance::Blue => Alliance::Red,
            Alliance::Red => Alliance::Blue,
        }
    }

    /// Positions belonging to this alliance.
    pub fn positions(self) -> std::ops::Range<usize> {
        match self {
            Alliance::Blue => 0..ALLIANCE_SIZE,
            Alliance::Red => ALLIANCE_SIZE..SLOTS_PER_MATCH,
        }
    }
}

/// The two positions sharing an alliance with `pos`.
pub fn ally_positions(pos: usize) -> impl Iterator<Item = usize> {
    Alliance::of(pos).positions().filter(move |&p| p != pos)
}

/// The three positions on the alliance opposing `pos`.
pub fn opponent_positions(pos: usize) -> std::ops::Range<usize> {
    Alliance::of(pos).opposite().positions()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_index_layout() {
        assert_eq!(to_flat_index(0, 0), 0);
        assert_eq!(to_flat_index(0, 5), 5);
        assert_eq!(to_flat_index(1, 0), 6);
        assert_eq!(to_flat_index(59, 5), 359);
    }

    #[test]
    fn test_round_trip() {
        for m in 0..100 {
            for p in 0..SLOTS_PER_MATCH {
                assert_eq!(to_match_and_pos(to_flat_index(m, p)), (m, p));
            }
        }
    }

    #[test]
    fn test_out_of_range_position_is_consistent() {
        // Position 7 of match 0 aliases position 1 of match 1.
        assert_eq!(to_flat_index(0, 7), to_flat_index(1, 1));
    }

    #[test]
    fn test_alliance_of() {
        assert_eq!(Alliance::of(0), Alliance::Blue);
        assert_eq!(Alliance::of(2), Alliance::Blue);
        assert_eq!(Alliance::of(3), Alliance::Red);
        assert_eq!(Alliance::of(5), Alliance::Red);
        assert_eq!(Alliance::Blue.opposite(), Alliance::Red);
        assert_eq!(Alliance::Red.positions(), 3..6);
    }

    #[test]
    fn test_position_tables() {
        assert_eq!(ally_positions(1).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(ally_positions(5).collect::<Vec<_>>(), vec![3, 4]);
        assert_eq!(opponent_positions(0), 3..6);
        assert_eq!(opponent_positions(4), 0..3);
    }
}
