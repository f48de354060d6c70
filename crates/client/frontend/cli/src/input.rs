//! Reading answers from the player.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Input/output pair used by every menu.
///
/// End of input behaves like a blank answer everywhere, so a closed stdin
/// backs out of every menu and finally quits.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Print one line.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Print a question and read one trimmed line. `None` at end of input.
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{} ", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    /// Ask for a choice among `count` numbered entries (1-based on screen).
    ///
    /// Blank, `0` or end of input means "back" and returns `None`. Anything
    /// else that is not a listed number is refused and asked again.
    pub fn choose(&mut self, question: &str, count: usize) -> io::Result<Option<usize>> {
        loop {
            let Some(answer) = self.ask(question)? else {
                return Ok(None);
            };
            if answer.is_empty() || answer == "0" {
                return Ok(None);
            }
            match answer.parse::<usize>() {
                Ok(n) if (1..=count).contains(&n) => return Ok(Some(n - 1)),
                _ => self.say(format!(
                    "Please enter a number between 1 and {count}, or 0 to go back."
                ))?,
            }
        }
    }

    /// Yes/no question; anything but `y`/`yes` is a no.
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.ask(&format!("{question} (y/n)"))?;
        Ok(matches!(
            answer.as_deref().map(str::to_lowercase).as_deref(),
            Some("y" | "yes")
        ))
    }
}
