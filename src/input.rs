//! One-line interactive input, behind a trait so commands can be driven by
//! scripted input in tests.

use inquire::Text;

/// Reads a single line of user input for a given prompt label.
///
/// Returns the trimmed line, or `None` if entry was cancelled or the input
/// source failed.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}

/// Real terminal input via `inquire`.
pub struct Interactive;

impl LineSource for Interactive {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        Text::new(prompt)
            .prompt()
            .ok()
            .map(|line| line.trim().to_string())
    }
}
