//! Metric computations, implemented directly on [`Schedule`].

use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;

use super::types::{AlliesAndOpponents, TurnaroundTable};
use crate::error::{Result, ScheduleError};
use crate::schedule::{ally_positions, opponent_positions, Schedule, Team, SLOTS_PER_MATCH};

impl<R: Rng> Schedule<R> {
    /// Appearance count of every team id present in the grid.
    ///
    /// Keyed by team id. A team that never appears has no entry, so the map
    /// can be shorter than `num_teams`.
    pub fn matches_by_team(&self) -> BTreeMap<Team, usize> {
        let mut counts = BTreeMap::new();
        for &team in self.matches().iter().flatten() {
            *counts.entry(team).or_insert(0) += 1;
        }
        counts
    }

    /// For each match, `6 - distinct teams in that match`.
    pub fn get_match_duplicates(&self) -> Vec<usize> {
        self.matches()
            .iter()
            .map(|row| SLOTS_PER_MATCH - row.iter().collect::<BTreeSet<_>>().len())
            .collect()
    }

    /// Match indices in which each team plays, ascending, one entry per slot.
    fn appearances(&self) -> Vec<Vec<usize>> {
        let mut seen = vec![Vec::new(); self.num_teams()];
        for (m, row) in self.matches().iter().enumerate() {
            for &team in row {
                seen[team].push(m);
            }
        }
        seen
    }

    /// Gaps between consecutive appearances of each team.
    ///
    /// Rows are `matches_per_team` wide; unused cells hold
    /// [`NO_TURNAROUND`](super::NO_TURNAROUND). A team filling two slots of
    /// one match contributes a gap of 0.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::CapacityOverflow`] if a team has more gaps than the
    /// row width, which happens when padding gives very small schedules many
    /// extra appearances.
    pub fn get_turnarounds(&self) -> Result<TurnaroundTable> {
        let width = self.matches_per_team();
        let mut table = TurnaroundTable::new(self.num_teams(), width);

        for (team, played) in self.appearances().iter().enumerate() {
            let gaps = played.len().saturating_sub(1);
            if gaps > width {
                return Err(ScheduleError::CapacityOverflow {
                    team,
                    gaps,
                    capacity: width,
                });
            }
            for (slot, pair) in played.windows(2).enumerate() {
                table.set(team, slot, (pair[1] - pair[0]) as i64);
            }
        }

        Ok(table)
    }

    /// Distinct allies and opponents met by every team across all matches.
    pub fn get_allies_and_opponents(&self) -> AlliesAndOpponents {
        let mut result = AlliesAndOpponents::new(self.num_teams());
        for row in self.matches() {
            for (pos, &team) in row.iter().enumerate() {
                for other in ally_positions(pos).map(|p| row[p]) {
                    if other != team {
                        result.allies[team].insert(other);
                    }
                }
                for other in opponent_positions(pos).map(|p| row[p]) {
                    if other != team {
                        result.opponents[team].insert(other);
                    }
                }
            }
        }
        result
    }
}
