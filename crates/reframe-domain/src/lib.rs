//! Reframe Domain Layer
//!
//! This crate holds the pure core of the reframing tool: the perspective
//! rewriter that turns a second-person supportive statement into a
//! first-person affirmation, the emotion list formatter, and the session
//! model around them. It performs no I/O.
//!
//! ## Key Concepts
//!
//! - **Substitution rule**: a (pattern, replacement) pair with a match mode
//! - **Phase**: an ordered stage of the rewrite (contraction → phrase → pronoun → normalization)
//! - **Emotion selection**: a canonicalised set of emotion labels
//! - **Reframe**: `"I feel <emotions>, but this feeling doesn’t define me. <statement>"`
//! - **Session**: idle → composing → showing-result → grounding
//!
//! ## Architecture
//!
//! - Pure functions only; every call is independent
//! - Rule order is an explicit `Vec`, never a map
//! - Trait definitions for storage live here, implementations elsewhere

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod emotion;
pub mod formatter;
pub mod reframe;
pub mod rewriter;
pub mod rule;
pub mod session;
pub mod traits;

// Re-exports for convenience
pub use catalog::Catalog;
pub use emotion::EmotionSelection;
pub use formatter::{compose, format_list};
pub use reframe::{reframe, Reframe, ReframeId, ReframeRequest, SavedReframe};
pub use rewriter::{rewrite, Phase, PhaseKind, PerspectiveRewriter, Step};
pub use rule::{MatchMode, RuleError, SubstitutionRule};
pub use session::{ReframeSession, SessionError, SessionState};
