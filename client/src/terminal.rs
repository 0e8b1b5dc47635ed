//! Line-oriented terminal I/O shared by the console and the delete gate.
//!
//! The console reads commands and form fields from the same stream the
//! confirmation gate reads its answer from, so both hold clones of one
//! [`Prompter`].

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use roster_engine::Confirm;
use tracing::warn;

/// Shared line reader/writer.
#[derive(Clone)]
pub struct Prompter {
    input: Rc<RefCell<Box<dyn BufRead>>>,
    output: Rc<RefCell<Box<dyn Write>>>,
}

impl std::fmt::Debug for Prompter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Prompter").finish_non_exhaustive()
    }
}

impl Prompter {
    pub fn new(input: impl BufRead + 'static, output: impl Write + 'static) -> Self {
        Self {
            input: Rc::new(RefCell::new(Box::new(input))),
            output: Rc::new(RefCell::new(Box::new(output))),
        }
    }

    /// Prompter over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }

    /// Print `prompt`, then read one line without its terminator.
    ///
    /// Returns `None` at end of input.
    pub fn read_line(&self, prompt: &str) -> io::Result<Option<String>> {
        {
            let mut out = self.output.borrow_mut();
            out.write_all(prompt.as_bytes())?;
            out.flush()?;
        }

        let mut line = String::new();
        if self.input.borrow_mut().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Print one line.
    pub fn println(&self, text: &str) -> io::Result<()> {
        let mut out = self.output.borrow_mut();
        writeln!(out, "{text}")?;
        out.flush()
    }

    /// Run `f` against the output stream.
    pub fn with_output<T>(&self, f: impl FnOnce(&mut dyn Write) -> io::Result<T>) -> io::Result<T> {
        let mut out = self.output.borrow_mut();
        let value = f(&mut **out)?;
        out.flush()?;
        Ok(value)
    }
}

impl Confirm for Prompter {
    fn confirm(&self, prompt: &str) -> bool {
        match self.read_line(&format!("{prompt} [y/N] ")) {
            Ok(Some(answer)) => is_yes(&answer),
            Ok(None) => false,
            Err(e) => {
                warn!("Failed to read confirmation: {}", e);
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
