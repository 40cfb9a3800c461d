//! Domain Layer
//!
//! Pure value types without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (HmsTime, HmsComponents)

pub mod value_objects;
