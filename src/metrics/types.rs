//! Result types produced by the metrics engine.

use std::collections::BTreeSet;

use crate::schedule::Team;

/// Marks an unused turnaround cell.
pub const NO_TURNAROUND: i64 = -1;

/// Per-team turnaround gaps, `num_teams` rows of `matches_per_team` cells.
///
/// Row `t` lists the differences between consecutive match indices in which
/// team `t` plays, left-aligned and padded with [`NO_TURNAROUND`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TurnaroundTable {
    rows: Vec<Vec<i64>>,
}

impl TurnaroundTable {
    pub(crate) fn new(num_teams: usize, width: usize) -> Self {
        Self {
            rows: vec![vec![NO_TURNAROUND; width]; num_teams],
        }
    }

    pub(crate) fn set(&mut self, team: Team, slot: usize, gap: i64) {
        self.rows[team][slot] = gap;
    }

    /// All rows, indexed by team.
    pub fn rows(&self) -> &[Vec<i64>] {
        &self.rows
    }

    /// Row for one team, sentinels included.
    pub fn row(&self, team: Team) -> Option<&[i64]> {
        self.rows.get(team).map(Vec::as_slice)
    }

    /// Non-sentinel gaps of one team, in match order.
    pub fn gaps(&self, team: Team) -> impl Iterator<Item = i64> + '_ {
        self.rows
            .get(team)
            .into_iter()
            .flatten()
            .copied()
            .filter(|&g| g != NO_TURNAROUND)
    }

    /// Every non-sentinel gap in the table.
    pub fn all_gaps(&self) -> impl Iterator<Item = i64> + '_ {
        self.rows
            .iter()
            .flatten()
            .copied()
            .filter(|&g| g != NO_TURNAROUND)
    }

    /// Number of teams (rows).
    pub fn num_teams(&self) -> usize {
        self.rows.len()
    }
}

/// Distinct allies and opponents each team has met.
///
/// A team is never recorded as its own ally or opponent, even when it fills
/// two slots of the same match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlliesAndOpponents {
    pub(crate) allies: Vec<BTreeSet<Team>>,
    pub(crate) opponents: Vec<BTreeSet<Team>>,
}

impl AlliesAndOpponents {
    pub(crate) fn new(num_teams: usize) -> Self {
        Self {
            allies: vec![BTreeSet::new(); num_teams],
            opponents: vec![BTreeSet::new(); num_teams],
        }
    }

    /// Teams that shared an alliance with `team`.
    pub fn allies(&self, team: Team) -> Option<&BTreeSet<Team>> {
        self.allies.get(team)
    }

    /// Teams that played against `team`.
    pub fn opponents(&self, team: Team) -> Option<&BTreeSet<Team>> {
        self.opponents.get(team)
    }

    /// Distinct ally count per team.
    pub fn ally_counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.allies.iter().map(BTreeSet::len)
    }

    /// Distinct opponent count per team.
    pub fn opponent_counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.opponents.iter().map(BTreeSet::len)
    }
}
