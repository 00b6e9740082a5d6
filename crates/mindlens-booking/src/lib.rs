//! mindlens-booking
//!
//! The session booking flow: the service catalog, the bookable slot
//! grid, and the step-gated wizard that walks a visitor from service
//! selection to a confirmed session.

pub mod catalog;
pub mod confirmation;
pub mod error;
pub mod wizard;
