//! Command handlers for the hmscalc binary

pub mod calc;
pub mod convert;
pub mod explain;
