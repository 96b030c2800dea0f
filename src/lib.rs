//! tasklang - a tiny statement language for named tasks
//!
//! This crate provides a lexer, a single-lookahead recursive-descent parser
//! and an interpreter that applies `create_task`, `delete_task`, `set_status`
//! and `show_task` statements to an in-memory task table.
//!
//! ```
//! use tasklang::core::Interpreter;
//!
//! let mut interp = Interpreter::new();
//! interp.execute(r#"create_task X = "write spec";"#).unwrap();
//! let shown = interp.execute("show_task X;").unwrap();
//! assert_eq!(shown.message(interp.locale()), "X: write spec (Status: pending)");
//! ```

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod tasks;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use crate::core::{Interpreter, Outcome};
pub use error::TaskError;
