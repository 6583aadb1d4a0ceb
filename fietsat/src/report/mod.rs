//! Decoding a model back into driver assignments, checking them, and printing the report.
mod checker;
mod printer;
mod solution;

pub use checker::*;
pub use printer::write_report;
pub use solution::*;
