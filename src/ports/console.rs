//! Stdout adapter for progress messages

use crate::ports::Output;

/// Writes progress lines to standard output
#[derive(Default)]
pub struct Console;

impl Console {
    pub fn new() -> Self {
        Console
    }
}

impl Output for Console {
    fn write_line(&mut self, line: &str) {
        println!("{}", line);
    }
}
