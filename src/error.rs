//! Error types for schedule construction and evaluation.

/// Errors produced while building, measuring or optimizing a schedule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// A construction or annealing parameter is out of range.
    #[error("invalid configuration: {message}")]
    Configuration {
        /// Human-readable description of the rejected parameter.
        message: String,
    },

    /// A team has more turnaround gaps than the turnaround table can hold.
    #[error("team {team} has {gaps} turnaround gaps but the table holds only {capacity}")]
    CapacityOverflow {
        /// The offending team id.
        team: usize,
        /// Number of gaps observed for that team.
        gaps: usize,
        /// Row width of the turnaround table (`matches_per_team`).
        capacity: usize,
    },
}

impl ScheduleError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        ScheduleError::Configuration {
            message: message.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScheduleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_message() {
        let err = ScheduleError::configuration("num_teams must be positive");
        assert_eq!(
            err.to_string(),
            "invalid configuration: num_teams must be positive"
        );
    }

    #[test]
    fn test_capacity_overflow_message() {
        let err = ScheduleError::CapacityOverflow {
            team: 0,
            gaps: 5,
            capacity: 1,
        };
        assert_eq!(
            err.to_string(),
            "team 0 has 5 turnaround gaps but the table holds only 1"
        );
    }
}
