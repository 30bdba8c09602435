//! The `num_matches x 6` assignment table.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::index::{to_match_and_pos, Alliance, SLOTS_PER_MATCH};
use crate::error::{Result, ScheduleError};

/// Team identifier in `0..num_teams`.
pub type Team = usize;

/// Default per-team match quota.
pub const DEFAULT_MATCHES_PER_TEAM: usize = 12;

/// A match schedule: `num_matches` rows of six team ids.
///
/// The grid is the only mutable state. Every metric and cost is recomputed
/// from it on each call, so results obtained before a [`swap`](Self::swap),
/// [`shuffle`](Self::shuffle) or [`optimize`](Self::optimize) describe the
/// old grid and must be recomputed afterwards.
///
/// The random generator is owned by the schedule. Use
/// [`with_seed`](Self::with_seed) or [`with_rng`](Self::with_rng) for
/// reproducible runs.
#[derive(Debug, Clone)]
pub struct Schedule<R: Rng = StdRng> {
    num_teams: usize,
    matches_per_team: usize,
    num_matches: usize,
    grid: Vec<[Team; SLOTS_PER_MATCH]>,
    rng: R,
}

impl Schedule<StdRng> {
    /// Builds a round-robin schedule with an entropy-seeded generator.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::Configuration`] if either argument is zero.
    pub fn new(num_teams: usize, matches_per_team: usize) -> Result<Self> {
        Self::with_seed(num_teams, matches_per_team, rand::random())
    }

    /// Builds a round-robin schedule with the default quota of
    /// [`DEFAULT_MATCHES_PER_TEAM`].
    pub fn with_default_quota(num_teams: usize) -> Result<Self> {
        Self::new(num_teams, DEFAULT_MATCHES_PER_TEAM)
    }

    /// Builds a round-robin schedule whose generator is seeded with `seed`.
    pub fn with_seed(num_teams: usize, matches_per_team: usize, seed: u64) -> Result<Self> {
        Self::with_rng(num_teams, matches_per_team, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Schedule<R> {
    /// Builds a round-robin schedule that draws randomness from `rng`.
    ///
    /// `num_matches = ceil(num_teams * matches_per_team / 6)`. Slots are filled
    /// in flat order with `0, 1, .., num_teams - 1, 0, 1, ..`, so the last
    /// match may pad some teams with one extra appearance.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::Configuration`] if either argument is zero or the
    /// slot count overflows `usize`.
    pub fn with_rng(num_teams: usize, matches_per_team: usize, rng: R) -> Result<Self> {
        check_dimensions(num_teams, matches_per_team)?;
        let appearances = num_teams.checked_mul(matches_per_team).ok_or_else(|| {
            ScheduleError::configuration(format!(
                "{num_teams} teams x {matches_per_team} matches overflows the slot count"
            ))
        })?;
        let num_matches = appearances.div_ceil(SLOTS_PER_MATCH);

        let mut grid = vec![[0; SLOTS_PER_MATCH]; num_matches];
        for (m, row) in grid.iter_mut().enumerate() {
            for (pos, slot) in row.iter_mut().enumerate() {
                *slot = (m * SLOTS_PER_MATCH + pos) % num_teams;
            }
        }

        debug!(num_teams, matches_per_team, num_matches, "constructed round-robin schedule");

        Ok(Self {
            num_teams,
            matches_per_team,
            num_matches,
            grid,
            rng,
        })
    }

    /// Wraps an existing assignment table, e.g. one loaded for evaluation.
    ///
    /// `num_matches` is taken from `matches.len()` rather than derived from
    /// the quota.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::Configuration`] if `num_teams` or `matches_per_team`
    /// is zero, `matches` is empty, or a slot holds a team `>= num_teams`.
    pub fn from_matches(
        num_teams: usize,
        matches_per_team: usize,
        matches: Vec<[Team; SLOTS_PER_MATCH]>,
        rng: R,
    ) -> Result<Self> {
        check_dimensions(num_teams, matches_per_team)?;
        if matches.is_empty() {
            return Err(ScheduleError::configuration("schedule has no matches"));
        }
        if let Some((m, &team)) = matches
            .iter()
            .enumerate()
            .find_map(|(m, row)| row.iter().find(|&&t| t >= num_teams).map(|t| (m, t)))
        {
            return Err(ScheduleError::configuration(format!(
                "match {m} holds team {team} but only {num_teams} teams exist"
            )));
        }

        Ok(Self {
            num_teams,
            matches_per_team,
            num_matches: matches.len(),
            grid: matches,
            rng,
        })
    }

    /// Number of teams.
    pub fn num_teams(&self) -> usize {
        self.num_teams
    }

    /// Requested matches per team.
    pub fn matches_per_team(&self) -> usize {
        self.matches_per_team
    }

    /// Number of matches (grid rows).
    pub fn num_matches(&self) -> usize {
        self.num_matches
    }

    /// Total slot count, `num_matches * 6`.
    pub fn array_count(&self) -> usize {
        self.num_matches * SLOTS_PER_MATCH
    }

    /// All matches in order.
    pub fn matches(&self) -> &[[Team; SLOTS_PER_MATCH]] {
        &self.grid
    }

    /// The six teams of match `match_index`, or `None` past the end.
    pub fn match_teams(&self, match_index: usize) -> Option<&[Team; SLOTS_PER_MATCH]> {
        self.grid.get(match_index)
    }

    /// Teams on one alliance of a match.
    pub fn alliance(&self, match_index: usize, alliance: Alliance) -> Option<&[Team]> {
        self.grid
            .get(match_index)
            .map(|row| &row[alliance.positions()])
    }

    /// Blue alliance (positions 0-2) of a match.
    pub fn blue(&self, match_index: usize) -> Option<&[Team]> {
        self.alliance(match_index, Alliance::Blue)
    }

    /// Red alliance (positions 3-5) of a match.
    pub fn red(&self, match_index: usize) -> Option<&[Team]> {
        self.alliance(match_index, Alliance::Red)
    }

    /// Team at `(match_index, pos)`, or `None` if out of range.
    pub fn get(&self, match_index: usize, pos: usize) -> Option<Team> {
        if pos >= SLOTS_PER_MATCH {
            return None;
        }
        self.grid.get(match_index).map(|row| row[pos])
    }

    /// Team at a flat index, or `None` past the end.
    pub fn team_at(&self, flat: usize) -> Option<Team> {
        let (m, pos) = to_match_and_pos(flat);
        self.get(m, pos)
    }

    /// All slots in flat order.
    pub fn flattened(&self) -> Vec<Team> {
        self.grid.iter().flatten().copied().collect()
    }

    /// Exchanges the teams at two flat indices.
    ///
    /// # Panics
    ///
    /// If either index is `>= array_count()`.
    pub fn swap(&mut self, flat_a: usize, flat_b: usize) {
        let (ma, pa) = to_match_and_pos(flat_a);
        let (mb, pb) = to_match_and_pos(flat_b);
        let a = self.grid[ma][pa];
        self.grid[ma][pa] = self.grid[mb][pb];
        self.grid[mb][pb] = a;
    }

    /// Uniform in-place permutation of every slot.
    ///
    /// Forward Fisher-Yates: position `p` is exchanged with a uniformly drawn
    /// `q` in `p..count`.
    pub fn shuffle(&mut self) {
        let count = self.array_count();
        for p in 0..count {
            let q = self.rng.random_range(p..count);
            self.swap(p, q);
        }
        debug!(slots = count, "shuffled schedule");
    }

    /// Draws two distinct flat indices uniformly, redrawing on collision.
    pub fn random_swap_indices(&mut self) -> (usize, usize) {
        let count = self.array_count();
        let a = self.rng.random_range(0..count);
        let mut b = self.rng.random_range(0..count);
        while b == a {
            b = self.rng.random_range(0..count);
        }
        (a, b)
    }

    /// Uniform draw in `[0, 1)` from the schedule's generator.
    pub(crate) fn random_unit(&mut self) -> f64 {
        self.rng.random_range(0.0..1.0)
    }
}

fn check_dimensions(num_teams: usize, matches_per_team: usize) -> Result<()> {
    if num_teams == 0 {
        return Err(ScheduleError::configuration("num_teams must be positive"));
    }
    if matches_per_team == 0 {
        return Err(ScheduleError::configuration(
            "matches_per_team must be positive",
        ));
    }
    Ok(())
}

#[cfg(feature = "serde")]
impl<R: Rng> serde::Serialize for Schedule<R> {
    /// Serializes as a sequence of six-team matches.
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.grid.iter())
    }
}
