//! Line-oriented prompt helpers shared by every menu.
//!
//! Input and output are generic so that whole sessions can be scripted.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Sentinel typed by the operator to leave a field unchanged
pub const SKIP: &str = "-";

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("input closed")]
    Eof,
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

pub type PromptResult<T> = Result<T, PromptError>;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, text: impl Display) -> PromptResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Prints `prompt: ` and returns the trimmed answer
    pub fn line(&mut self, prompt: &str) -> PromptResult<String> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Err(PromptError::Eof);
        }
        Ok(input.trim().to_string())
    }

    /// Re-prompts until the answer parses
    pub fn parsed<T>(&mut self, prompt: &str) -> PromptResult<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        loop {
            let input = self.line(prompt)?;
            match input.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(e) => self.say(format_args!("❌ Invalid input: {e}. Please try again."))?,
            }
        }
    }

    /// Re-prompts until the answer parses and falls inside `[min, max]`
    pub fn ranged<T>(&mut self, prompt: &str, min: T, max: T) -> PromptResult<T>
    where
        T: FromStr + PartialOrd + Display + Copy,
        T::Err: Display,
    {
        loop {
            let value: T = self.parsed(prompt)?;
            if value >= min && value <= max {
                return Ok(value);
            }
            self.say(format_args!("❌ Value must be between {min} and {max}."))?;
        }
    }

    /// `-` means "skip" and yields `None`; anything else, even empty, is kept
    pub fn skippable(&mut self, prompt: &str) -> PromptResult<Option<String>> {
        let input = self.line(prompt)?;
        Ok((input != SKIP).then_some(input))
    }

    /// Like [`Prompter::parsed`] but honouring the skip sentinel
    pub fn skippable_parsed<T>(&mut self, prompt: &str) -> PromptResult<Option<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        loop {
            let Some(input) = self.skippable(prompt)? else {
                return Ok(None);
            };
            match input.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(e) => self.say(format_args!("❌ Invalid input: {e}. Please try again."))?,
            }
        }
    }

    /// Menu selection; non-numeric input is reported and re-asked
    pub fn choice(&mut self) -> PromptResult<usize> {
        loop {
            let input = self.line("Enter your choice")?;
            match input.parse::<usize>() {
                Ok(choice) => return Ok(choice),
                Err(_) => self.say("Invalid choice.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(script: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn test_parsed_retries_until_valid() {
        let mut p = prompter("abc\n42\n");
        let value: i64 = p.parsed("Enter ID").unwrap();
        assert_eq!(value, 42);
        assert!(output(p).contains("Invalid input"));
    }

    #[test]
    fn test_ranged_rejects_out_of_bounds() {
        let mut p = prompter("150\n-1\n55\n");
        let value: u8 = p.ranged("Load", 0, 100).unwrap();
        assert_eq!(value, 55);
    }

    #[test]
    fn test_skip_sentinel_differs_from_empty() {
        let mut p = prompter("-\n\n");
        assert_eq!(p.skippable("Name").unwrap(), None);
        assert_eq!(p.skippable("Name").unwrap(), Some(String::new()));
    }

    #[test]
    fn test_eof_is_reported() {
        let mut p = prompter("");
        assert!(matches!(p.line("Anything"), Err(PromptError::Eof)));
    }

    #[test]
    fn test_choice_skips_garbage() {
        let mut p = prompter("x\n3\n");
        assert_eq!(p.choice().unwrap(), 3);
        assert!(output(p).contains("Invalid choice."));
    }
}
