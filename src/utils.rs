use std::fmt::Display;
use std::process;

/// Prints `msg` to stderr and exits with status 1.
pub fn error(msg: impl Display) -> ! {
    eprintln!("{}", msg);
    process::exit(1);
}
