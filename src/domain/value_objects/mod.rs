//! Domain Value Objects
//!
//! Immutable value types that represent durations in hours:minutes:seconds.

mod components;
mod hms_time;

pub use components::HmsComponents;
pub use hms_time::HmsTime;
