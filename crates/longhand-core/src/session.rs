//! Session orchestration: the trial tracker.
//!
//! A [`Session`] owns everything that lives across trials — the config,
//! the generator, and the running counters — plus the single active
//! trial (problem, decomposition, grid). Trials are strictly sequential:
//! one problem visible and editable at a time, and the grid is replaced
//! wholesale when the next problem is generated.
//!
//! There are no ambient globals and no UI callbacks: the caller drives
//! the session through explicit `submit` calls and reads state back
//! through typed accessors.

use tracing::info;

use crate::decompose::{decompose, Decomposition};
use crate::error::{ConfigError, SessionError, MAX_DIGIT_RANGE};
use crate::generator::ProblemGenerator;
use crate::grid::{GridSchema, Row};
use crate::model::{Problem, TrialOutcome};
use crate::report::{TerminalReport, TrialRecord};
use crate::verify::{grade, grade_grid};

/// Configuration a session starts from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// Decimal digits per factor.
    pub digit_range: u32,
    /// Problems in the session; must be positive.
    pub total_trials: u32,
    /// Accuracy threshold in `[0, 100]` for the session to pass.
    pub required_percent: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            digit_range: 2,
            total_trials: 5,
            required_percent: 75.0,
        }
    }
}

impl SessionConfig {
    /// Reject configurations under which a session cannot start.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_trials == 0 {
            return Err(ConfigError::ZeroTrials);
        }
        if self.digit_range == 0 || self.digit_range > MAX_DIGIT_RANGE {
            return Err(ConfigError::DigitRange(self.digit_range));
        }
        if !(0.0..=100.0).contains(&self.required_percent) || self.required_percent.is_nan() {
            return Err(ConfigError::RequiredPercent(self.required_percent));
        }
        Ok(())
    }
}

/// Progress reporting trait for callers that display feedback.
pub trait ProgressReporter {
    /// A fresh problem was posed; `trial` is 1-based.
    fn on_trial_start(&self, trial: u32, problem: &Problem);
    fn on_trial_graded(&self, trial: u32, record: &TrialRecord);
    fn on_session_complete(&self, report: &TerminalReport);
}

/// No-op progress reporter for headless use.
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn on_trial_start(&self, _: u32, _: &Problem) {}
    fn on_trial_graded(&self, _: u32, _: &TrialRecord) {}
    fn on_session_complete(&self, _: &TerminalReport) {}
}

/// Session lifecycle: trials are accepted only while in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Complete,
}

/// The single trial currently in front of the learner.
#[derive(Debug)]
struct ActiveTrial {
    problem: Problem,
    decomposition: Decomposition,
    grid: GridSchema,
}

impl ActiveTrial {
    fn pose(generator: &mut ProblemGenerator, digit_range: u32) -> Self {
        let problem = generator.generate(digit_range);
        let decomposition = decompose(&problem);
        let grid = GridSchema::for_decomposition(&decomposition);
        info!(%problem, width = decomposition.width(), rows = decomposition.len(), "posed problem");
        Self {
            problem,
            decomposition,
            grid,
        }
    }
}

/// A fixed sequence of trials graded against an accuracy threshold.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    generator: ProblemGenerator,
    state: SessionState,
    trials_completed: u32,
    correct_trials: u32,
    records: Vec<TrialRecord>,
    trial: Option<ActiveTrial>,
    report: Option<TerminalReport>,
}

impl Session {
    /// Validate the config and pose the first problem, announcing it
    /// through `progress`.
    ///
    /// Returns [`ConfigError`] without generating anything if the session
    /// cannot start.
    pub fn new(
        config: SessionConfig,
        mut generator: ProblemGenerator,
        progress: &dyn ProgressReporter,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let trial = ActiveTrial::pose(&mut generator, config.digit_range);
        progress.on_trial_start(1, &trial.problem);
        Ok(Self {
            config,
            generator,
            state: SessionState::InProgress,
            trials_completed: 0,
            correct_trials: 0,
            records: Vec::with_capacity(config.total_trials as usize),
            trial: Some(trial),
            report: None,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == SessionState::Complete
    }

    pub fn trials_completed(&self) -> u32 {
        self.trials_completed
    }

    pub fn correct_trials(&self) -> u32 {
        self.correct_trials
    }

    /// Share of the session already graded, in `[0, 100]`.
    pub fn progress_percent(&self) -> f64 {
        100.0 * f64::from(self.trials_completed) / f64::from(self.config.total_trials)
    }

    /// The problem in front of the learner; `None` once complete.
    pub fn current_problem(&self) -> Option<&Problem> {
        self.trial.as_ref().map(|t| &t.problem)
    }

    /// The answer key for the active trial. Internal use only — never
    /// shown to the learner.
    pub fn current_decomposition(&self) -> Option<&Decomposition> {
        self.trial.as_ref().map(|t| &t.decomposition)
    }

    pub fn grid(&self) -> Option<&GridSchema> {
        self.trial.as_ref().map(|t| &t.grid)
    }

    /// Mutable grid handle for the input surface.
    pub fn grid_mut(&mut self) -> Option<&mut GridSchema> {
        self.trial.as_mut().map(|t| &mut t.grid)
    }

    /// Discard the active trial without grading it and pose a fresh one.
    /// An abandoned trial does not count toward `trials_completed`, so the
    /// replacement is announced under the same trial number.
    pub fn abandon_trial(&mut self, progress: &dyn ProgressReporter) -> Result<(), SessionError> {
        if self.is_complete() {
            return Err(SessionError::Complete(self.trials_completed));
        }
        let trial = ActiveTrial::pose(&mut self.generator, self.config.digit_range);
        progress.on_trial_start(self.trials_completed + 1, &trial.problem);
        self.trial = Some(trial);
        Ok(())
    }

    /// Grade externally supplied rows against the active decomposition
    /// and record the trial.
    pub fn submit_trial(
        &mut self,
        rows: &[Row],
        final_row: &Row,
        progress: &dyn ProgressReporter,
    ) -> Result<TrialOutcome, SessionError> {
        let trial = match (&self.state, &self.trial) {
            (SessionState::InProgress, Some(trial)) => trial,
            _ => return Err(SessionError::Complete(self.trials_completed)),
        };
        let outcome = grade(&trial.decomposition, rows, final_row);
        self.record_outcome(outcome, progress)
    }

    /// Grade the session-owned grid and record the trial. This is the
    /// explicit "submit/check" action — there is no event-loop hook.
    pub fn submit_grid(
        &mut self,
        progress: &dyn ProgressReporter,
    ) -> Result<TrialOutcome, SessionError> {
        let trial = match (&self.state, &self.trial) {
            (SessionState::InProgress, Some(trial)) => trial,
            _ => return Err(SessionError::Complete(self.trials_completed)),
        };
        let outcome = grade_grid(&trial.decomposition, &trial.grid);
        self.record_outcome(outcome, progress)
    }

    fn record_outcome(
        &mut self,
        outcome: TrialOutcome,
        progress: &dyn ProgressReporter,
    ) -> Result<TrialOutcome, SessionError> {
        let trial = self.trial.take().expect("active trial present");
        let record = TrialRecord::new(&trial.problem, &outcome);

        self.trials_completed += 1;
        if outcome.is_correct() {
            self.correct_trials += 1;
        }
        info!(
            trial = self.trials_completed,
            total = self.config.total_trials,
            correct = outcome.is_correct(),
            "graded trial"
        );
        progress.on_trial_graded(self.trials_completed, &record);
        self.records.push(record);

        if self.trials_completed == self.config.total_trials {
            self.finalize(progress);
        } else {
            let trial = ActiveTrial::pose(&mut self.generator, self.config.digit_range);
            progress.on_trial_start(self.trials_completed + 1, &trial.problem);
            self.trial = Some(trial);
        }

        Ok(outcome)
    }

    fn finalize(&mut self, progress: &dyn ProgressReporter) {
        let percent =
            100.0 * f64::from(self.correct_trials) / f64::from(self.config.total_trials);
        let report = TerminalReport {
            id: uuid::Uuid::new_v4(),
            created_at: chrono::Utc::now(),
            digit_range: self.config.digit_range,
            total_trials: self.config.total_trials,
            correct_trials: self.correct_trials,
            percent,
            required_percent: self.config.required_percent,
            passed: percent >= self.config.required_percent,
            trials: self.records.clone(),
        };
        info!(
            percent,
            passed = report.passed,
            "session complete"
        );
        self.state = SessionState::Complete;
        progress.on_session_complete(&report);
        self.report = Some(report);
    }

    /// The frozen result; `Some` only once the session is complete.
    pub fn terminal_report(&self) -> Option<&TerminalReport> {
        self.report.as_ref()
    }
}
