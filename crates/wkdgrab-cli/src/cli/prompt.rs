//! Interactive confirmation collaborator.

use std::io::{self, BufRead, Write};

/// Yes/no question seam, so command logic never reads stdin directly.
pub trait Prompt {
    fn confirm(&self, question: &str) -> bool;
}

/// Prompt over stdin; anything but `y`/`yes` (case-insensitive) declines.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn confirm(&self, question: &str) -> bool {
        print!("{} [y/N] ", question);
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}
