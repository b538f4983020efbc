//! Line-driven converter: the terminal stand-in for the live-updating form.
//!
//! Each line is one request against a single `ConverterSession`:
//!
//! ```text
//! hex ff        set the value from hexadecimal input
//! roman         empty input, value 0
//! +  /  -       increment / decrement
//! reset         back to 0
//! show          print the current table
//! help, quit
//! ```

use std::io::{self, BufRead, Write};

use radix_core::{NumeralSystem, UnknownSystem, ValidationError};
use radix_session::{ConverterSession, EditResponse};

use crate::table::format_table;

const HELP: &str = "\
commands:
  <system> [text]   set the value from text in binary|octal|decimal|hex|roman
  + / -             increment / decrement
  reset             set the value to 0
  show              print every configured system
  help              this message
  quit              leave
";

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("{0} (try `help`)")]
    UnknownCommand(#[from] UnknownSystem),
}

/// Result of one interpreted line.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Print(String),
    Quit,
}

pub struct Interpreter {
    session: ConverterSession,
    indicators: bool,
}

impl Interpreter {
    pub fn new(session: ConverterSession, indicators: bool) -> Self {
        Self {
            session,
            indicators,
        }
    }

    pub fn session(&self) -> &ConverterSession {
        &self.session
    }

    /// Interpret one input line.
    pub fn execute(&mut self, line: &str) -> Result<Outcome, CommandError> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };
        let resp = match head {
            "" => return Ok(Outcome::Print(String::new())),
            "quit" | "exit" | "q" => return Ok(Outcome::Quit),
            "help" | "?" => return Ok(Outcome::Print(HELP.to_string())),
            "+" => self.session.handle_step(1),
            "-" => self.session.handle_step(-1),
            "reset" => self.session.handle_reset(),
            "show" => self.session.snapshot(),
            _ => {
                let system: NumeralSystem = head.parse()?;
                let resp = self.session.handle_edit(system, rest);
                if let Some(e) = &resp.error {
                    return Err(e.clone().into());
                }
                resp
            }
        };
        Ok(Outcome::Print(self.render(&resp)))
    }

    fn render(&self, resp: &EditResponse) -> String {
        format!(
            "= {}\n{}",
            resp.value,
            format_table(&resp.displays, self.indicators)
        )
    }

    /// Read commands from `input` until EOF or `quit`, writing results to `output`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        write!(output, "{}", self.render(&self.session.snapshot()))?;
        for line in input.lines() {
            match self.execute(&line?) {
                Ok(Outcome::Print(text)) => write!(output, "{text}")?,
                Ok(Outcome::Quit) => break,
                Err(e) => writeln!(output, "error: {e}")?,
            }
            output.flush()?;
        }
        Ok(())
    }
}

pub fn interactive_cmd(session: ConverterSession, indicators: bool) {
    let mut interpreter = Interpreter::new(session, indicators);
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = interpreter.run(stdin.lock(), stdout.lock()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
