//! Rate-schedule parsing and aggregation
//!
//! Pure leaf functions and types over the free-form rate descriptions
//! carried by the certificate catalog. Nothing here touches the rest of the
//! system.

mod parser;
mod schedule;

pub use parser::{average_rate, extract_rates, is_staged, parse_numeric};
pub use schedule::{PayoutFrequency, RateSchedule, RateText};
