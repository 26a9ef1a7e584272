/// Lifecycle of the contact form's single submission slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

/// Events that move the submission slot between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionIntent {
    /// A validated request is about to be sent.
    Begin,
    /// The backend call finished, one way or another.
    Settle,
}

impl SubmissionState {
    /// Pure transition function: (State, Intent) -> State.
    pub fn reduce(self, intent: SubmissionIntent) -> Self {
        match intent {
            SubmissionIntent::Begin => SubmissionState::Submitting,
            SubmissionIntent::Settle => SubmissionState::Idle,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }
}
