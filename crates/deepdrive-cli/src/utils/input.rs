//! User input utilities for interactive command-line prompts.
//!
//! [`TerminalPrompter`] is the CLI implementation of the core
//! `DirectoryPrompter` port. It is generic over its reader and writer so
//! tests can drive it with in-memory buffers.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use deepdrive_core::{DirectoryPrompter, PromptError};

/// Line-based prompter over any reader/writer pair.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` without a trailing newline and read one line.
    ///
    /// Only the line ending is removed; other whitespace is part of the
    /// answer. End-of-file is reported as [`PromptError::Closed`] rather than an
    /// empty answer, so a closed stdin never silently accepts a default.
    pub fn prompt_string(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{prompt}").map_err(io_err)?;
        self.output.flush().map_err(io_err)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(io_err)?;
        if read == 0 {
            return Err(PromptError::Closed);
        }
        let answer = line.strip_suffix('\n').unwrap_or(&line);
        Ok(answer.strip_suffix('\r').unwrap_or(answer).to_string())
    }

    /// Prompts the user for a yes/no confirmation.
    ///
    /// Accepts 'y', 'yes', 'n', 'no' (case insensitive).
    /// Empty input is treated as 'no'.
    pub fn prompt_confirmation(&mut self, prompt: &str) -> Result<bool, PromptError> {
        loop {
            let input = self.prompt_string(&format!("{prompt} (y/N) "))?;
            match input.trim().to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" | "" => return Ok(false),
                _ => {
                    writeln!(self.output, "Please enter 'y' for yes or 'n' for no.")
                        .map_err(io_err)?;
                }
            }
        }
    }

    /// Consume the prompter and return its writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> DirectoryPrompter for TerminalPrompter<R, W> {
    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        self.prompt_string(question)
    }

    fn notify(&mut self, message: &str) {
        // Notices are informational; a broken stdout shows up on the next prompt.
        let _ = writeln!(self.output, "{message}");
    }
}

fn io_err(err: io::Error) -> PromptError {
    PromptError::Io(err.to_string())
}
