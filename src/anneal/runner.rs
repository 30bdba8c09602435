//! Annealing loop.

use rand::Rng;
use tracing::{debug, info, trace};

use super::config::AnnealConfig;
use crate::error::Result;
use crate::schedule::Schedule;

/// Whether an [`Annealer`] has steps left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnealState {
    /// Fewer than `max_steps` steps taken.
    Running,
    /// All steps taken. Terminal.
    Done,
}

/// Statistics of a finished annealing run.
///
/// The schedule is left in its final state, which is not necessarily the
/// best state visited.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AnnealResult {
    /// Cost before the first step.
    pub initial_cost: f64,

    /// Cost of the schedule as left by the run.
    pub final_cost: f64,

    /// Lowest cost seen at any step.
    pub best_cost: f64,

    /// Steps taken.
    pub steps: usize,

    /// Swaps kept, including improving and equal-cost ones.
    pub accepted_moves: usize,

    /// Swaps that strictly lowered the cost.
    pub improving_moves: usize,

    /// Worsening swaps kept by the Metropolis rule.
    pub uphill_moves: usize,

    /// Temperature after the last cooling.
    pub final_temperature: f64,

    /// Best cost sampled every `history_interval` steps.
    pub cost_history: Vec<f64>,
}

/// Step-wise annealer over a borrowed schedule.
///
/// ```
/// use match_schedule::anneal::{AnnealConfig, AnnealState, Annealer};
/// use match_schedule::Schedule;
///
/// let mut schedule = Schedule::with_seed(12, 4, 7).unwrap();
/// schedule.shuffle();
/// let config = AnnealConfig::default().with_max_steps(3);
/// let mut annealer = Annealer::new(&mut schedule, &config).unwrap();
/// while annealer.step().unwrap() == AnnealState::Running {}
/// assert_eq!(annealer.finish().steps, 3);
/// ```
pub struct Annealer<'a, R: Rng> {
    schedule: &'a mut Schedule<R>,
    max_steps: usize,
    history_interval: usize,
    temperature: f64,
    step: usize,
    initial_cost: f64,
    current_cost: f64,
    best_cost: f64,
    accepted_moves: usize,
    improving_moves: usize,
    uphill_moves: usize,
    cost_history: Vec<f64>,
}

impl<'a, R: Rng> Annealer<'a, R> {
    /// Validates `config` and evaluates the starting cost.
    ///
    /// # Errors
    ///
    /// Configuration errors from [`AnnealConfig::validate`] and
    /// capacity errors from the cost evaluation.
    pub fn new(schedule: &'a mut Schedule<R>, config: &AnnealConfig) -> Result<Self> {
        config.validate()?;
        let initial_cost = schedule.get_cost()?;
        Ok(Self {
            schedule,
            max_steps: config.max_steps,
            history_interval: config.history_interval,
            temperature: config.initial_temperature,
            step: 0,
            initial_cost,
            current_cost: initial_cost,
            best_cost: initial_cost,
            accepted_moves: 0,
            improving_moves: 0,
            uphill_moves: 0,
            cost_history: vec![initial_cost],
        })
    }

    /// Current state.
    pub fn state(&self) -> AnnealState {
        if self.step >= self.max_steps {
            AnnealState::Done
        } else {
            AnnealState::Running
        }
    }

    /// Cost of the schedule as it stands.
    pub fn current_cost(&self) -> f64 {
        self.current_cost
    }

    /// Current temperature.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Takes one swap step and returns the state afterwards.
    ///
    /// Calling this when already [`Done`](AnnealState::Done) does nothing.
    ///
    /// # Errors
    ///
    /// A failed cost evaluation. The swap is undone before returning.
    pub fn step(&mut self) -> Result<AnnealState> {
        if self.state() == AnnealState::Done {
            return Ok(AnnealState::Done);
        }

        let (a, b) = self.schedule.random_swap_indices();
        self.schedule.swap(a, b);
        let new_cost = match self.schedule.get_cost() {
            Ok(cost) => cost,
            Err(e) => {
                self.schedule.swap(a, b);
                return Err(e);
            }
        };

        // An infinite cost cannot be compared against another, so such a
        // swap is never kept.
        let accept = if !new_cost.is_finite() {
            false
        } else if new_cost <= self.current_cost {
            if new_cost < self.current_cost {
                self.improving_moves += 1;
            }
            true
        } else {
            let probability = (-(new_cost - self.current_cost) / self.temperature).exp();
            let accepted = self.schedule.random_unit() < probability;
            if accepted {
                self.uphill_moves += 1;
                debug!(
                    step = self.step,
                    from = self.current_cost,
                    to = new_cost,
                    temperature = self.temperature,
                    "accepted uphill swap"
                );
            }
            accepted
        };

        if accept {
            self.current_cost = new_cost;
            self.accepted_moves += 1;
            if new_cost < self.best_cost {
                self.best_cost = new_cost;
            }
        } else {
            self.schedule.swap(a, b);
        }

        trace!(step = self.step, a, b, accept, cost = self.current_cost, "anneal step");

        self.temperature /= (self.step + 1) as f64;
        self.step += 1;

        if self.history_interval > 0 && self.step % self.history_interval == 0 {
            self.cost_history.push(self.best_cost);
        }

        Ok(self.state())
    }

    /// Consumes the annealer and reports the run.
    pub fn finish(mut self) -> AnnealResult {
        if self
            .cost_history
            .last()
            .is_none_or(|&last| (last - self.best_cost).abs() > 1e-15)
        {
            self.cost_history.push(self.best_cost);
        }

        AnnealResult {
            initial_cost: self.initial_cost,
            final_cost: self.current_cost,
            best_cost: self.best_cost,
            steps: self.step,
            accepted_moves: self.accepted_moves,
            improving_moves: self.improving_moves,
            uphill_moves: self.uphill_moves,
            final_temperature: self.temperature,
            cost_history: self.cost_history,
        }
    }
}

/// Runs an [`Annealer`] to completion.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Anneals `schedule` in place for `config.max_steps` steps.
    ///
    /// # Errors
    ///
    /// See [`Annealer::new`] and [`Annealer::step`].
    pub fn run<R: Rng>(schedule: &mut Schedule<R>, config: &AnnealConfig) -> Result<AnnealResult> {
        let mut annealer = Annealer::new(schedule, config)?;
        while annealer.step()? == AnnealState::Running {}
        let result = annealer.finish();

        info!(
            steps = result.steps,
            initial_cost = result.initial_cost,
            final_cost = result.final_cost,
            accepted = result.accepted_moves,
            improving = result.improving_moves,
            uphill = result.uphill_moves,
            "annealing finished"
        );

        Ok(result)
    }
}

impl<R: Rng> Schedule<R> {
    /// Anneals this schedule for `max_steps` swap steps.
    ///
    /// `optimize(t, 0)` leaves the grid unchanged. Swaps whose cost is not
    /// finite are always undone, so a schedule too large for `f64` costs
    /// (optimal turnaround above roughly 309 matches) is left as it is.
    pub fn optimize(&mut self, initial_temperature: f64, max_steps: usize) -> Result<AnnealResult> {
        let config = AnnealConfig::default()
            .with_initial_temperature(initial_temperature)
            .with_max_steps(max_steps);
        AnnealRunner::run(self, &config)
    }
}
