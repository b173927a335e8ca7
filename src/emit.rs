use std::io::{self, Write};
use std::num::NonZeroU64;
use std::thread;
use std::time::Duration;

/// Counts from 0 up to (but not including) `target`.
#[derive(Debug)]
pub struct Counter {
    current: u64,
    target: NonZeroU64,
}

impl Counter {
    pub fn new(target: NonZeroU64) -> Self {
        Counter { current: 0, target }
    }
}

impl Iterator for Counter {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.current == self.target.get() {
            return None;
        }
        let index = self.current;
        self.current += 1;
        Some(index)
    }
}

/// Sleeps for one second of wall-clock time.
pub fn one_second() {
    thread::sleep(Duration::from_secs(1));
}

/// Writes each index on its own line, calling `pause` after every line.
/// The writer is flushed before each pause so an observer on a pipe sees
/// the line immediately.
pub fn run<W: Write>(out: &mut W, target: NonZeroU64, mut pause: impl FnMut()) -> io::Result<()> {
    for index in Counter::new(target) {
        writeln!(out, "{}", index)?;
        out.flush()?;
        pause();
    }
    Ok(())
}
