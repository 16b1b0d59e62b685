//! Collaborators and settings the engine works with.
//!
//! Overview
//! - `texture` – rendering backend trait, opaque image handle, headless backend
//! - `engineconfig` – INI-backed settings for the frame driver and demo scene
pub mod engineconfig;
pub mod texture;
