//! Status lines on the terminal.

use crate::domain::ports::StatusReporter;

/// Where [`ConsoleReporter`] writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Stdout,
    /// Keeps stdout free for a JSON document
    Stderr,
}

/// Prints each status line as soon as it is reported.
#[derive(Debug, Clone)]
pub struct ConsoleReporter {
    stream: ConsoleStream,
    prefix: &'static str,
}

impl ConsoleReporter {
    pub fn new(stream: ConsoleStream) -> Self {
        Self { stream, prefix: "" }
    }

    /// Reporter for a CLI run: stderr in JSON mode, stdout otherwise.
    pub fn for_cli(json_mode: bool, dry_run: bool) -> Self {
        let stream = if json_mode {
            ConsoleStream::Stderr
        } else {
            ConsoleStream::Stdout
        };
        let reporter = Self::new(stream);
        if dry_run {
            reporter.with_prefix("[dry run] ")
        } else {
            reporter
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: &'static str) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn stream(&self) -> ConsoleStream {
        self.stream
    }

    pub fn render(&self, line: &str) -> String {
        format!("{}{line}", self.prefix)
    }
}

impl StatusReporter for ConsoleReporter {
    fn report(&self, line: &str) {
        let rendered = self.render(line);
        match self.stream {
            ConsoleStream::Stdout => println!("{rendered}"),
            ConsoleStream::Stderr => eprintln!("{rendered}"),
        }
    }
}
