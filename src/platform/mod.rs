//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (keyboard codes to logical actions)

pub mod input;

pub use input::{Action, KeyboardState};
