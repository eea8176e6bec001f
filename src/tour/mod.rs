//! Guided walkthrough sequencer.
//!
//! A finite, branching sequence of anchored steps with two rules: a running
//! tour cannot be restarted, and the one conditional step (refresh active
//! devices) is decided once at start from the device snapshot passed in,
//! never re-evaluated mid-run.
mod steps;


pub use steps::{Step, StepId, build_steps};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourState {
    Idle,
    Running { cursor: usize },
}

#[derive(Debug)]
pub struct Tour {
    state: TourState,
    steps: Vec<Step>,
}

impl Tour {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: TourState::Idle,
            steps: Vec::new(),
        }
    }

    /// Begins the walkthrough at step 0. No-op while a run is in progress.
    /// The step list is built once from `active_device_present`.
    pub fn start(&mut self, active_device_present: bool) {
        if matches!(self.state, TourState::Running { .. }) {
            return;
        }
        self.steps = build_steps(active_device_present);
        self.state = TourState::Running { cursor: 0 };
    }

    /// Advances to the next step. No-op when idle; advancing past the last
    /// step ends the run.
    pub fn next(&mut self) {
        match self.state {
            TourState::Idle => {}
            TourState::Running { cursor } => {
                let advanced = cursor.saturating_add(1);
                if advanced >= self.steps.len() {
                    self.state = TourState::Idle;
                } else {
                    self.state = TourState::Running { cursor: advanced };
                }
            }
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Step> {
        match self.state {
            TourState::Idle => None,
            TourState::Running { cursor } => self.steps.get(cursor),
        }
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, TourState::Running { .. })
    }

    #[must_use]
    pub const fn state(&self) -> TourState {
        self.state
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Default for Tour {
    fn default() -> Self {
        Self::new()
    }
}
