//! plot-core: shared foundation for the plot panel crates.
//!
//! Contains:
//! - numeric (lenient float prefix parsing)
//! - time (seconds + nanoseconds timestamps)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod time;

pub use error::{PlotError, PlotResult};
pub use numeric::*;
pub use time::Time;
