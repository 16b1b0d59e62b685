//! Per-frame phases run by the [`GameProcessor`](crate::processor::GameProcessor).
//!
//! Submodules overview
//! - [`render`] – draw every sprite once
//! - [`collision`] – pairwise overlap checks and `on_collision` dispatch

pub mod collision;
pub mod render;
