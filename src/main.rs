/*
 * tick - a workload program for testing debuggers and tracers
 *
 * usage: tick <n>
 * Prints 0 through n-1, one number per second, then exits.
 * Rejects a missing, extra, zero or unparseable argument.
 */

mod utils;

use nix::sys::signal::{self, SigHandler, Signal};
use std::env;
use std::io;

use tick::{args, emit};

fn main() {
    // The Rust runtime ignores SIGPIPE; put it back so a closed reader
    // kills the process like any other unhandled signal.
    if let Err(err) = unsafe { signal::signal(Signal::SIGPIPE, SigHandler::SigDfl) } {
        utils::error(format!("signal error: {}", err));
    }

    let argv: Vec<String> = env::args().collect();

    let target = args::parse_args(&argv).unwrap_or_else(|err| utils::error(err));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = emit::run(&mut out, target, emit::one_second) {
        utils::error(format!("write error: {}", err));
    }
}
