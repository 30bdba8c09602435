//! Cost computations, implemented directly on [`Schedule`].

use rand::Rng;

use super::types::CostBreakdown;
use crate::error::Result;
use crate::schedule::{Schedule, ALLIANCE_SIZE};

/// Per-gap turnaround penalty for gaps `0..=optimal`.
///
/// Entries `optimal - 1` and `optimal` are free; below that each missing
/// match multiplies the cost by ten: `table[i] = 10^(optimal - i - 1)`.
///
/// Tiers above `10^308` are infinite in `f64`, which happens once `optimal`
/// exceeds 309 (around 1,860 teams at quota 1). Annealing never keeps a
/// swap with an infinite cost.
///
/// ```
/// use match_schedule::cost::turnaround_cost_table;
///
/// assert_eq!(turnaround_cost_table(5), vec![10_000.0, 1_000.0, 100.0, 10.0, 0.0, 0.0]);
/// assert_eq!(turnaround_cost_table(0), vec![0.0]);
/// ```
pub fn turnaround_cost_table(optimal: usize) -> Vec<f64> {
    let free_from = optimal.saturating_sub(1);
    (0..=optimal)
        .map(|i| {
            if i >= free_from {
                0.0
            } else {
                10f64.powi(clamp_exponent((optimal - i - 1) as i64))
            }
        })
        .collect()
}

/// `base^(max - seen)`; exponent is negative when a padded team exceeds `max`.
fn shortfall_penalty(base: f64, max: usize, seen: usize) -> f64 {
    base.powi(clamp_exponent(max as i64 - seen as i64))
}

fn clamp_exponent(e: i64) -> i32 {
    e.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

impl<R: Rng> Schedule<R> {
    /// Even spacing between a team's matches: `num_matches / matches_per_team`.
    pub fn optimal_turnaround(&self) -> usize {
        self.num_matches() / self.matches_per_team()
    }

    /// Most distinct allies a team could meet: `min(2 * quota, num_teams - 1)`.
    pub fn max_allies(&self) -> usize {
        ((ALLIANCE_SIZE - 1) * self.matches_per_team()).min(self.num_teams() - 1)
    }

    /// Most distinct opponents a team could meet: `min(3 * quota, num_teams - 1)`.
    pub fn max_opponents(&self) -> usize {
        (ALLIANCE_SIZE * self.matches_per_team()).min(self.num_teams() - 1)
    }

    /// Sum of turnaround penalties over every team and gap.
    ///
    /// Gaps strictly between `optimal` and `2 * optimal` cost nothing.
    ///
    /// # Errors
    ///
    /// Propagates [`CapacityOverflow`](crate::ScheduleError::CapacityOverflow)
    /// from [`get_turnarounds`](Self::get_turnarounds).
    pub fn get_turnaround_cost(&self) -> Result<f64> {
        let optimal = self.optimal_turnaround();
        let table = turnaround_cost_table(optimal);
        let long_gap = table[0];
        let optimal = optimal as i64;

        let cost: f64 = self
            .get_turnarounds()?
            .all_gaps()
            .map(|gap| {
                let mut c = 0.0;
                if gap <= optimal {
                    c += table[gap as usize];
                }
                if gap >= 2 * optimal {
                    c += long_gap;
                }
                c
            })
            .sum();
        Ok(cost)
    }

    /// `(ally_cost, opponent_cost)` summed over all teams.
    pub fn get_ally_opponent_cost(&self) -> (f64, f64) {
        let met = self.get_allies_and_opponents();
        let max_allies = self.max_allies();
        let max_opponents = self.max_opponents();

        let ally: f64 = met
            .ally_counts()
            .map(|seen| shortfall_penalty(2.0, max_allies, seen))
            .sum();
        let opponent: f64 = met
            .opponent_counts()
            .map(|seen| shortfall_penalty(10.0, max_opponents, seen))
            .sum();
        (ally, opponent)
    }

    /// All three cost terms.
    pub fn cost_breakdown(&self) -> Result<CostBreakdown> {
        let turnaround = self.get_turnaround_cost()?;
        let (ally, opponent) = self.get_ally_opponent_cost();
        Ok(CostBreakdown::new(turnaround, ally, opponent))
    }

    /// Total cost, `turnaround + ally + opponent`. Lower is better.
    pub fn get_cost(&self) -> Result<f64> {
        Ok(self.cost_breakdown()?.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_table_small_optimal() {
        assert_eq!(turnaround_cost_table(1), vec![0.0, 0.0]);
        assert_eq!(turnaround_cost_table(2), vec![10.0, 0.0, 0.0]);
        assert_eq!(turnaround_cost_table(3), vec![100.0, 10.0, 0.0, 0.0]);
    }

    #[test]
    fn test_cost_table_tiers_grow_tenfold() {
        let table = turnaround_cost_table(8);
        assert_eq!(table.len(), 9);
        for i in 0..6 {
            assert!((table[i] / table[i + 1] - 10.0).abs() < 1e-9);
        }
        assert_eq!(&table[7..], &[0.0, 0.0]);
    }

    #[test]
    fn test_turnaround_cost_round_robin_is_zero() {
        let s = Schedule::with_seed(30, 12, 1).unwrap();
        assert_eq!(s.optimal_turnaround(), 5);
        assert_eq!(s.get_turnaround_cost().unwrap(), 0.0);
    }

    #[test]
    fn test_turnaround_cost_short_gaps() {
        // 30 teams, quota 2: 10 matches, optimal 5, every gap is 5.
        let mut s = Schedule::with_seed(30, 2, 1).unwrap();
        assert_eq!(s.get_turnaround_cost().unwrap(), 0.0);

        // Team 0 moves from match 5 to match 1, team 6 from 1 to 5:
        // both now have a gap of 1, costing 10^3 each.
        s.swap(30, 6);
        assert_eq!(s.get_turnaround_cost().unwrap(), 2_000.0);
    }

    #[test]
    fn test_turnaround_cost_gap_between_optimal_and_double_is_free() {
        let mut s = Schedule::with_seed(30, 2, 1).unwrap();
        // Team 0 moves to match 9 (gap 9, unpenalized); team 24 lands in
        // match 5 next to its match 4 (gap 1).
        s.swap(30, 54);
        let table = s.get_turnarounds().unwrap();
        assert_eq!(table.gaps(0).collect::<Vec<_>>(), vec![9]);
        assert_eq!(table.gaps(24).collect::<Vec<_>>(), vec![1]);
        assert_eq!(s.get_turnaround_cost().unwrap(), 1_000.0);
    }

    #[test]
    fn test_turnaround_cost_long_gap_pays_largest_tier() {
        // 21 teams, quota 2: 7 matches, optimal 3, table [100, 10, 0, 0].
        let mut s = Schedule::with_seed(21, 2, 1).unwrap();
        assert_eq!(s.optimal_turnaround(), 3);
        assert_eq!(s.get_turnaround_cost().unwrap(), 0.0);

        // Team 0 goes from match 3 to match 6 (gap 6 = 2 * optimal);
        // team 15 goes from match 6 to match 3 (gap 1).
        s.swap(21, 36);
        let table = s.get_turnarounds().unwrap();
        assert_eq!(table.gaps(0).collect::<Vec<_>>(), vec![6]);
        assert_eq!(table.gaps(15).collect::<Vec<_>>(), vec![1]);
        assert_eq!(s.get_turnaround_cost().unwrap(), 100.0 + 10.0);
    }

    #[test]
    fn test_max_allies_and_opponents() {
        let s = Schedule::with_seed(30, 12, 1).unwrap();
        assert_eq!(s.max_allies(), 24);
        assert_eq!(s.max_opponents(), 29);

        let s = Schedule::with_seed(100, 4, 1).unwrap();
        assert_eq!(s.max_allies(), 8);
        assert_eq!(s.max_opponents(), 12);
    }

    #[test]
    fn test_ally_opponent_cost_single_match() {
        // Six teams, one match: 2 allies of max 2, 3 opponents of max 3.
        let s = Schedule::with_seed(6, 1, 1).unwrap();
        let (ally, opponent) = s.get_ally_opponent_cost();
        assert_eq!(ally, 6.0);
        assert_eq!(opponent, 6.0);
    }

    #[test]
    fn test_opponent_cost_sums_all_teams() {
        // Each team's shortfall contributes, not only the last team's.
        let s = Schedule::with_seed(7, 1, 1).unwrap();
        let met = s.get_allies_and_opponents();
        let expected: f64 = met
            .opponent_counts()
            .map(|seen| 10f64.powi(s.max_opponents() as i32 - seen as i32))
            .sum();
        let last = met.opponent_counts().last().unwrap();
        let (_, opponent) = s.get_ally_opponent_cost();
        assert!((opponent - expected).abs() < 1e-9);
        assert!(opponent > 10f64.powi(s.max_opponents() as i32 - last as i32));
    }

    #[test]
    fn test_cost_breakdown_total() {
        let mut s = Schedule::with_seed(30, 12, 3).unwrap();
        s.shuffle();
        let b = s.cost_breakdown().unwrap();
        assert_eq!(b.total, b.turnaround + b.ally + b.opponent);
        assert_eq!(s.get_cost().unwrap(), b.total);
    }

    #[test]
    fn test_cost_propagates_capacity_overflow() {
        let s = Schedule::with_seed(1, 1, 1).unwrap();
        assert!(s.get_cost().is_err());
    }
}
