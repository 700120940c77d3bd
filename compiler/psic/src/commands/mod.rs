//! Command handlers for the PSI CLI.

mod lexemes;
mod report;

pub use lexemes::{lexeme_table, print_lexemes};
pub use report::{build_report, parse_report_args, report_error, ReportError, ReportOptions};

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
