//! Helpers shared by command handlers

mod output;
mod progress;

pub use output::{confirm_delete, print_records, print_value};
pub use progress::Spinner;
