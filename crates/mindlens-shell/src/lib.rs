//! mindlens-shell
//!
//! Application-shell state for the MindLens single-page app: the current
//! page, the single modal slot and whatever flow is mounted in it, the
//! floating assistant dock, and the practice presentation config.
//! Rendering and the generative assistant backend live outside this
//! crate; they read from and write through the state here.

pub mod assistant;
pub mod config;
pub mod error;
pub mod events;
pub mod state;
