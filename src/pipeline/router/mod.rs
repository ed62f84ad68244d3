//! Utterance routing and per-conversation turn handling.

pub mod classify;
pub mod controller;

pub use classify::{classify_utterance, Intent, WellnessTopic};
pub use controller::{ControllerConfig, DialogueController};
