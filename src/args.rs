use std::num::NonZeroU64;

use thiserror::Error;

/// Name used in the usage line when the argument list is empty.
const DEFAULT_PROGRAM: &str = "tick";

/// Every variant prints the same usage line. Literal zero and unparseable
/// text both end up as `NotPositive` and cannot be told apart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    /// Anything other than exactly one argument after the program name.
    #[error("Usage: {program} <seconds to sleep>")]
    WrongArgCount { program: String },
    #[error("Usage: {program} <seconds to sleep>")]
    NotPositive { program: String },
}

fn program_name(args: &[String]) -> String {
    args.first()
        .map_or_else(|| DEFAULT_PROGRAM.to_string(), Clone::clone)
}

/// Base-10 conversion that yields 0 for empty, non-numeric, negative or
/// overflowing text.
pub fn parse_bound(text: &str) -> u64 {
    text.parse::<u64>().unwrap_or(0)
}

/// Validates the process argument list (program name included) and returns
/// the number of lines to emit.
pub fn parse_args(args: &[String]) -> Result<NonZeroU64, UsageError> {
    if args.len() != 2 {
        return Err(UsageError::WrongArgCount {
            program: program_name(args),
        });
    }

    NonZeroU64::new(parse_bound(&args[1]))
        .ok_or_else(|| UsageError::NotPositive {
            program: program_name(args),
        })
}
