use std::io;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use tasklang::cli::args::{Cli, Commands};
use tasklang::cli::{commands, Settings};
use tasklang::core::Interpreter;
use tasklang::error::TaskError;
use tasklang::output::format_error;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = match Settings::from_cli(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        },
    };
    settings.color.apply();

    if let Err(e) = run(cli.command, &settings) {
        let text = format_error(&e, settings.format)
            .unwrap_or_else(|_| format!("{}: {}", "error".red().bold(), e));
        eprintln!("{text}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("tasklang=debug")
    } else {
        EnvFilter::try_from_env("TASKLANG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Option<Commands>, settings: &Settings) -> Result<(), TaskError> {
    let interpreter = Interpreter::with_locale(settings.locale);

    let output = match command.unwrap_or(Commands::Menu) {
        Commands::Exec { statements } => {
            let mut interpreter = interpreter;
            let stdout = io::stdout();
            commands::exec(&mut interpreter, &statements, settings.format, &mut stdout.lock())?;
            String::new()
        },
        Commands::Menu => {
            commands::menu(interpreter, settings.format)?;
            String::new()
        },
        Commands::Config(args) => {
            commands::config(&args.command, &settings.config, &settings.config_path)?
        },
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
