//! mindlens-core
//!
//! Pure domain types and practice directory constants. No I/O; this is
//! the shared vocabulary of the MindLens system.

pub mod directory;
pub mod models;
