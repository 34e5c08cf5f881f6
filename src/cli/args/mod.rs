//! Shared CLI argument types

mod common;
mod global;
mod parsers;

pub use common::{OutputFormat, StatsPeriod};
pub use global::GlobalOptions;
pub use parsers::{parse_date, parse_growth_period, read_json_arg};
