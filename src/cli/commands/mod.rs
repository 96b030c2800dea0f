//! Command implementations for tasklang.

use std::io::{self, Write};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::{Cli, ConfigCommands, OutputFormat};
use crate::cli::menu::Menu;
use crate::config::{Config, Paths};
use crate::core::Interpreter;
use crate::error::TaskError;
use crate::output::format_outcome;

/// Execute statements in order, writing each result as it completes.
///
/// Empty outcomes produce no output.
///
/// # Errors
///
/// Returns the first statement error; later statements are not executed.
pub fn exec<W: Write>(
    interpreter: &mut Interpreter,
    statements: &[String],
    format: OutputFormat,
    out: &mut W,
) -> Result<(), TaskError> {
    for statement in statements {
        let outcome = interpreter.execute(statement)?;
        let text = format_outcome(&outcome, format, interpreter.locale())?;
        if !text.is_empty() {
            writeln!(out, "{text}")?;
        }
    }
    Ok(())
}

/// Run the interactive menu on stdin/stdout.
///
/// # Errors
///
/// Returns an error if the terminal cannot be read or written.
pub fn menu(interpreter: Interpreter, format: OutputFormat) -> Result<(), TaskError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(stdin.lock(), stdout.lock(), interpreter, format).run()
}

/// Execute config subcommands
///
/// # Errors
///
/// Returns an error if the config file cannot be read or written.
pub fn config(cmd: &ConfigCommands, config: &Config, path: &Path) -> Result<String, TaskError> {
    match cmd {
        ConfigCommands::Show => config.to_yaml(),
        ConfigCommands::Path => Ok(path.display().to_string()),
        ConfigCommands::Init => {
            if path.exists() {
                return Ok(format!("Config already exists: {}", path.display()));
            }
            if let Some(parent) = path.parent() {
                Paths::with_root(parent.to_path_buf()).ensure_dirs()?;
            }
            Config::default().save_to_path(path)?;
            Ok(format!("Wrote default config to {}", path.display()))
        },
    }
}

/// Generate shell completions for the specified shell.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, TaskError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "tasklang", &mut buf);
    String::from_utf8(buf).map_err(|e| TaskError::Config(format!("UTF-8 error: {e}")))
}
