//! Session module - the state of one reframing exercise
//!
//! A session progresses linearly:
//! - Idle: nothing entered yet
//! - Composing: the user is editing thought, emotions or support text
//! - ShowingResult: the composed reframe is on screen
//! - Grounding: grounding activities are shown below the reframe

use crate::catalog::GROUNDING_ACTIVITIES;
use crate::emotion::EmotionSelection;
use crate::reframe::{Reframe, ReframeRequest};
use std::fmt;

/// Stage of a reframing session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    /// Nothing entered yet
    #[default]
    Idle,

    /// Inputs are being edited
    Composing,

    /// The reframe is shown
    ShowingResult,

    /// Grounding activities are shown
    Grounding,
}

impl SessionState {
    /// Get the state name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Composing => "composing",
            SessionState::ShowingResult => "showing-result",
            SessionState::Grounding => "grounding",
        }
    }

    /// Get the next state in the progression
    pub fn next(&self) -> Option<Self> {
        match self {
            SessionState::Idle => Some(SessionState::Composing),
            SessionState::Composing => Some(SessionState::ShowingResult),
            SessionState::ShowingResult => Some(SessionState::Grounding),
            SessionState::Grounding => None,
        }
    }

    /// Get the previous state in the progression
    pub fn previous(&self) -> Option<Self> {
        match self {
            SessionState::Idle => None,
            SessionState::Composing => Some(SessionState::Idle),
            SessionState::ShowingResult => Some(SessionState::Composing),
            SessionState::Grounding => Some(SessionState::ShowingResult),
        }
    }
}

/// Errors raised by illegal session transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The requested transition is not allowed from the current state
    InvalidTransition {
        /// State the session was in
        from: SessionState,
        /// Action that was attempted
        action: &'static str,
    },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidTransition { from, action } => {
                write!(f, "Cannot {} while {}", action, from.as_str())
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// One reframing exercise: inputs plus the visible stage
///
/// The reframe is recomputed from the inputs whenever it is asked for;
/// any edit after a reveal sends the session back to composing.
#[derive(Debug, Clone, Default)]
pub struct ReframeSession {
    request: ReframeRequest,
    state: SessionState,
}

impl ReframeSession {
    /// Create an idle session
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Current inputs
    pub fn request(&self) -> &ReframeRequest {
        &self.request
    }

    /// Selected emotions
    pub fn emotions(&self) -> &EmotionSelection {
        &self.request.emotions
    }

    /// Set the negative thought
    pub fn set_thought(&mut self, thought: impl Into<String>) {
        self.request.thought = thought.into();
        self.touch();
    }

    /// Set what the user would say to a friend
    pub fn set_support(&mut self, support: impl Into<String>) {
        self.request.support = support.into();
        self.touch();
    }

    /// Toggle one emotion; returns whether it is selected afterwards
    pub fn toggle_emotion(&mut self, label: &str) -> bool {
        let selected = self.request.emotions.toggle(label);
        self.touch();
        selected
    }

    /// Replace the emotions from a comma-separated input line
    pub fn set_emotions_from_input(&mut self, input: &str) {
        self.request.emotions = EmotionSelection::parse(input);
        self.touch();
    }

    /// The reframe for the current inputs, or `None` if not producible
    pub fn reframe(&self) -> Option<Reframe> {
        self.request.build()
    }

    /// Show the reframe
    ///
    /// Returns `Ok(None)` and stays put when the inputs are incomplete.
    ///
    /// # Errors
    /// Returns error unless the session is composing
    pub fn reveal(&mut self) -> Result<Option<Reframe>, SessionError> {
        if self.state != SessionState::Composing {
            return Err(SessionError::InvalidTransition {
                from: self.state,
                action: "reveal a reframe",
            });
        }

        let reframe = self.request.build();
        if reframe.is_some() {
            self.state = SessionState::ShowingResult;
        }
        Ok(reframe)
    }

    /// Show or hide grounding activities; returns them when shown
    ///
    /// # Errors
    /// Returns error unless a reframe is showing
    pub fn toggle_grounding(&mut self) -> Result<Option<&'static [&'static str]>, SessionError> {
        match self.state {
            SessionState::ShowingResult => {
                self.state = SessionState::Grounding;
                Ok(Some(&GROUNDING_ACTIVITIES))
            }
            SessionState::Grounding => {
                self.state = SessionState::ShowingResult;
                Ok(None)
            }
            from => Err(SessionError::InvalidTransition {
                from,
                action: "toggle grounding",
            }),
        }
    }

    /// Clear all inputs and return to idle
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn touch(&mut self) {
        self.state = SessionState::Composing;
    }
}
