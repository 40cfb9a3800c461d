//! hmscalc - hours:minutes:seconds durations
//!
//! A signed, whole-second duration type written as `[-]H:MM[:SS]`, with
//! parsing, canonical formatting, arithmetic, ordering and unit conversion.
//!
//! ```
//! use hmscalc::HmsTime;
//!
//! let a: HmsTime = "1:30:15".parse().unwrap();
//! let b: HmsTime = "2:15:45".parse().unwrap();
//! assert_eq!((a + b).to_string(), "3:46:00");
//! assert_eq!((a - b).to_string(), "-0:45:30");
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod parser;
pub mod value;

// Re-exports for convenience
pub use config::{Config, ConvertUnit};
pub use domain::value_objects::{HmsComponents, HmsTime};
pub use error::{HmsError, HmsResult};
pub use parser::{parse_fields, parse_hms, ParsedHms};
