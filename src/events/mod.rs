//! Event types used by the engine.
//!
//! Submodules:
//! - [`event`] – ordered multi-slot signal
//! - [`handler`] – named event registry with protected default events
//! - [`collision`] – collision notifications emitted by the game processor
pub mod collision;
pub mod event;
pub mod handler;
