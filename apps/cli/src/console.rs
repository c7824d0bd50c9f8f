//! # Console
//!
//! Line-based prompting over any `BufRead` / `Write` pair, so the menu runs
//! the same against a terminal and against an in-memory script in tests.
//!
//! ## Prompt Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  prompt_parsed("Ingrese el código ...", parse_code)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  write prompt, flush ──► read line ──► EOF? ──► CliError::InputClosed   │
//! │       ▲                      │                                          │
//! │       │                      ▼                                          │
//! │       │                 parse(line)                                     │
//! │       │                 ├── Ok(value) ──► return value                  │
//! │       └──── message ◄── └── Err(ValidationError)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use tracing::warn;

use ferreteria_core::validation::ValidationResult;

use crate::error::{CliError, CliResult};

/// A prompting console.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Gives back the writer (tests inspect what was printed).
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `prompt` without a newline and reads one line.
    ///
    /// Only the line terminator is stripped; other whitespace is kept as
    /// typed, so names and categories are stored verbatim.
    pub fn read_line(&mut self, prompt: &str) -> CliResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }

        Ok(line.trim_end_matches(|c: char| c == '\n' || c == '\r').to_string())
    }

    /// Prompts until `parse` accepts the line.
    pub fn prompt_parsed<T, F>(&mut self, prompt: &str, parse: F) -> CliResult<T>
    where
        F: Fn(&str) -> ValidationResult<T>,
    {
        loop {
            let line = self.read_line(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    warn!(input = %line, error = %err, "Rejected console input");
                    self.line(&format!("{}. Intente nuevamente.", err))?;
                }
            }
        }
    }

    /// Writes one line.
    pub fn line(&mut self, text: &str) -> CliResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Writes an empty line.
    pub fn blank(&mut self) -> CliResult<()> {
        self.line("")
    }

    /// Writes a message framed by blank lines.
    pub fn notice(&mut self, text: &str) -> CliResult<()> {
        self.blank()?;
        self.line(text)?;
        self.blank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferreteria_core::validation::parse_code;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_read_line_strips_only_terminator() {
        let mut console = console("  Llave inglesa  \r\n");
        assert_eq!(console.read_line("> ").unwrap(), "  Llave inglesa  ");
        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "> ");
    }

    #[test]
    fn test_read_line_eof() {
        let mut console = console("");
        assert!(matches!(console.read_line("> "), Err(CliError::InputClosed)));
    }

    #[test]
    fn test_last_line_without_newline_is_read() {
        let mut console = console("42");
        assert_eq!(console.read_line("> ").unwrap(), "42");
    }

    #[test]
    fn test_prompt_parsed_reprompts_until_valid() {
        let mut console = console("doce\n\n12\n");
        let code = console.prompt_parsed("Código: ", parse_code).unwrap();
        assert_eq!(code, 12);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output.matches("Código: ").count(), 3);
        assert_eq!(output.matches("Intente nuevamente.").count(), 2);
    }

    #[test]
    fn test_prompt_parsed_eof_while_retrying() {
        let mut console = console("doce\n");
        assert!(matches!(
            console.prompt_parsed("Código: ", parse_code),
            Err(CliError::InputClosed)
        ));
    }

    #[test]
    fn test_notice_framing() {
        let mut console = console("");
        console.notice("Hola").unwrap();
        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "\nHola\n\n");
    }
}
