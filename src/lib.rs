//! A deliberately inert workload for exercising process-control tools.
//! `args` validates the invocation and `emit` prints one line per second.

pub mod args;
pub mod emit;
