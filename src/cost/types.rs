//! Cost report types.

/// The three cost terms of a schedule and their sum.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CostBreakdown {
    /// Penalty for uneven spacing between a team's matches.
    pub turnaround: f64,
    /// Penalty for repeated alliance partners.
    pub ally: f64,
    /// Penalty for repeated opponents.
    pub opponent: f64,
    /// `turnaround + ally + opponent`.
    pub total: f64,
}

impl CostBreakdown {
    pub(crate) fn new(turnaround: f64, ally: f64, opponent: f64) -> Self {
        Self {
            turnaround,
            ally,
            opponent,
            total: turnaround + ally + opponent,
        }
    }
}

impl std::fmt::Display for CostBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "total {:.3e} (turnaround {:.3e}, ally {:.3e}, opponent {:.3e})",
            self.total, self.turnaround, self.ally, self.opponent
        )
    }
}
