//! Interactive menu front end.
//!
//! Asks for a command and its fields, builds the statement text and hands it
//! to the interpreter. Generic over its input and output so it can be driven
//! without a terminal.

use std::io::{BufRead, Write};

use colored::Colorize;
use tracing::debug;

use crate::cli::args::OutputFormat;
use crate::core::{Interpreter, Locale, TokenKind};
use crate::error::TaskError;
use crate::output::{format_error, format_outcome};
use crate::tasks::Status;

/// Build statement text with the task name quoted.
///
/// `value` is the description for `create_task` or the status label for
/// `set_status`; other commands ignore it.
#[must_use]
pub fn render_statement(locale: Locale, keyword: TokenKind, name: &str, value: Option<&str>) -> String {
    let word = locale.keyword_text(keyword).unwrap_or_default();
    match value {
        Some(value) => format!("{word} \"{name}\" = \"{value}\";"),
        None => format!("{word} \"{name}\";"),
    }
}

enum Step {
    Execute(String),
    Retry,
    Quit,
}

pub struct Menu<R, W> {
    input: R,
    output: W,
    interpreter: Interpreter,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub const fn new(input: R, output: W, interpreter: Interpreter, format: OutputFormat) -> Self {
        Self {
            input,
            output,
            interpreter,
            format,
        }
    }

    /// Give back the interpreter with whatever the session left in it.
    pub fn into_interpreter(self) -> Interpreter {
        self.interpreter
    }

    /// Run until the user quits or input ends.
    ///
    /// Statement failures are printed and the loop continues.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run(&mut self) -> Result<(), TaskError> {
        loop {
            self.print_menu()?;
            match self.next_step()? {
                Step::Execute(statement) => self.execute(&statement)?,
                Step::Retry => {},
                Step::Quit => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                },
            }
        }
    }

    fn print_menu(&mut self) -> Result<(), TaskError> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", "--- Task Manager ---".cyan().bold())?;
        writeln!(self.output, "1. Create task")?;
        writeln!(self.output, "2. Delete task")?;
        writeln!(self.output, "3. Change task status")?;
        writeln!(self.output, "4. Show task")?;
        writeln!(self.output, "5. Quit")?;
        Ok(())
    }

    fn next_step(&mut self) -> Result<Step, TaskError> {
        let Some(option) = self.prompt("Choose an option")? else {
            return Ok(Step::Quit);
        };

        let keyword = match option.as_str() {
            "1" => TokenKind::Create,
            "2" => TokenKind::Delete,
            "3" => TokenKind::SetStatus,
            "4" => TokenKind::Show,
            "5" => return Ok(Step::Quit),
            _ => {
                writeln!(self.output, "Invalid option. Try again.")?;
                return Ok(Step::Retry);
            },
        };

        let Some(name) = self.prompt("Task name")? else {
            return Ok(Step::Retry);
        };

        let value = match keyword {
            TokenKind::Create => match self.prompt("Description")? {
                Some(description) => Some(description),
                None => return Ok(Step::Retry),
            },
            TokenKind::SetStatus => match self.choose_status()? {
                Some(status) => Some(status.label(self.interpreter.locale()).to_string()),
                None => {
                    writeln!(self.output, "Invalid status. Try again.")?;
                    return Ok(Step::Retry);
                },
            },
            _ => None,
        };

        Ok(Step::Execute(render_statement(
            self.interpreter.locale(),
            keyword,
            &name,
            value.as_deref(),
        )))
    }

    fn choose_status(&mut self) -> Result<Option<Status>, TaskError> {
        let locale = self.interpreter.locale();
        writeln!(self.output, "Choose the new status:")?;
        for (i, status) in Status::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, status.label(locale))?;
        }

        let choice = self.prompt("Status option")?;
        Ok(choice
            .and_then(|c| c.parse::<usize>().ok())
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Status::ALL.get(i).copied()))
    }

    /// Read one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>, TaskError> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn execute(&mut self, statement: &str) -> Result<(), TaskError> {
        debug!(statement, "executing menu statement");
        let locale = self.interpreter.locale();
        let text = match self.interpreter.execute(statement) {
            Ok(outcome) => format_outcome(&outcome, self.format, locale)?,
            Err(e) => format_error(&e, self.format)?,
        };
        writeln!(self.output, "{text}")?;
        Ok(())
    }
}
