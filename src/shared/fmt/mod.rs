//! Display formatting for the zones table.

pub mod num;
pub mod time;

pub use num::{fixed, percent, volume_ratio};
pub use time::format_timestamp;
