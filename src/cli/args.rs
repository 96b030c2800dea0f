use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::core::Locale;

#[derive(Parser)]
#[command(name = "tasklang")]
#[command(about = "Manage named tasks with a tiny statement language")]
#[command(long_about = "tasklang - a tiny statement language for named tasks

Each statement is a single command terminated by ';'. Tasks live in memory
for as long as the process runs.

STATEMENTS:
  create_task <name> = \"<description>\";
  delete_task <name>;
  set_status <name> = \"<status>\";
  show_task <name>;

  <name> is a bare identifier or a quoted string.
  <status> is one of: pending, in_progress, done

QUICK START:
  tasklang                  Start the interactive menu
  tasklang exec 'create_task X = \"write spec\";' 'show_task X;'

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Falls back to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Keyword and status spelling
    ///
    /// Falls back to `general.locale` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub locale: Option<Locale>,

    /// Path to the config file (default: ~/.tasklang/config.yaml)
    #[arg(long, global = true, env = "TASKLANG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log lexer, parser and interpreter activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Execute statements in order against one task table
    ///
    /// Each argument is a single statement. Execution stops at the first
    /// statement that fails.
    ///
    /// # Examples
    ///
    ///   tasklang exec 'create_task X = "write spec";'
    ///   tasklang exec 'create_task X = "a";' 'set_status X = "done";' 'show_task X;'
    #[command(alias = "e")]
    Exec {
        /// Statements to execute
        #[arg(required = true)]
        statements: Vec<String>,
    },

    /// Start the interactive menu (default)
    ///
    /// Prompts for a command and its fields, builds the statement and
    /// executes it. Choose 5 or send end-of-input to quit.
    #[command(alias = "m")]
    Menu,

    /// Inspect or create the config file
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// Example: tasklang completions bash > ~/.bash_completion.d/tasklang
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Arguments for config management.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as YAML
    Show,
    /// Write a default config file if none exists
    Init,
    /// Print the config file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_exec() {
        let cli = Cli::try_parse_from(["tasklang", "-o", "json", "exec", "show_task X;"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        match cli.command {
            Some(Commands::Exec { statements }) => assert_eq!(statements, vec!["show_task X;"]),
            _ => panic!("expected exec"),
        }
    }

    #[test]
    fn test_no_subcommand_defaults_to_none() {
        let cli = Cli::try_parse_from(["tasklang", "--locale", "pt"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.locale, Some(Locale::Pt));
    }

    #[test]
    fn test_exec_requires_statement() {
        assert!(Cli::try_parse_from(["tasklang", "exec"]).is_err());
    }
}
