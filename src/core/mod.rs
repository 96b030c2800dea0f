//! The statement language: tokens, lexer, parser and interpreter.
//!
//! A statement flows through the layers in order:
//!
//! ```text
//! &str -> Lexer -> Token stream -> Parser -> Command -> Interpreter -> Outcome
//! ```
//!
//! # Syntax
//!
//! ```text
//! create_task <name> = "<description>";
//! delete_task <name>;
//! set_status <name> = "<status>";
//! show_task <name>;
//! ```
//!
//! `<name>` is either a bare identifier or a quoted string.

mod interpreter;
mod lexer;
mod locale;
mod parser;
mod token;

pub use interpreter::{Interpreter, Outcome};
pub use lexer::{LexError, Lexer};
pub use locale::Locale;
pub use parser::{Command, Parser};
pub use token::{Token, TokenKind};
