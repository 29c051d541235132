//! Terminal I/O boundary. The game loop only ever talks to a
//! [`Console`], so tests can drive it with a scripted implementation.

use std::io::{self, BufRead, Write};

/// External I/O collaborator: prompt for a line of input, display text.
pub trait Console {
    /// Show `text` and block until a line of input is available. The
    /// returned line has no trailing newline.
    fn prompt(&mut self, text: &str) -> io::Result<String>;

    /// Show `text` followed by a newline.
    fn display(&mut self, text: &str);
}

/// [`Console`] backed by stdin and stdout.
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        StdConsole
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn prompt(&mut self, text: &str) -> io::Result<String> {
        print!("{text}");
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    fn display(&mut self, text: &str) {
        println!("{text}");
    }
}
