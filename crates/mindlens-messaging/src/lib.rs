//! mindlens-messaging
//!
//! Direct messages to the practice: draft composition and the dispatch
//! that turns a valid draft into a receipt with a promised reply
//! window.

pub mod dispatch;
pub mod draft;
pub mod error;
