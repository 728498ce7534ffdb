use std::io::{BufRead, Write};

use crate::core::error::{RecipeError, Result};

/// Trims input, mapping blank lines to `None`.
pub fn normalize(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

pub fn parse_int(input: Option<&str>) -> Result<Option<i64>> {
    input
        .map(|s| {
            s.parse::<i64>()
                .map_err(|_| RecipeError::validation(format!("{} is not a valid number", s)))
        })
        .transpose()
}

/// Reads one line per prompt from `input`, echoing prompts to `output`.
pub struct Prompter<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Prompter<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut O {
        &mut self.output
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// End of input reads as a blank line. A line that is not UTF-8 is
    /// consumed and rejected as bad input.
    pub fn get_string_input(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;
        let mut buf = Vec::new();
        self.input.read_until(b'\n', &mut buf)?;
        let line = String::from_utf8(buf)
            .map_err(|_| RecipeError::validation("input is not valid UTF-8"))?;
        Ok(normalize(&line).map(str::to_string))
    }

    pub fn get_int_input(&mut self, prompt: &str) -> Result<Option<i64>> {
        let input = self.get_string_input(prompt)?;
        parse_int(input.as_deref())
    }
}
