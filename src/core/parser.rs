//! Recursive-descent recognizer for one statement.
//!
//! The parser keeps exactly one lookahead token and never backtracks.
//!
//! ```text
//! statement := create | delete | setStatus | show
//! create    := CREATE taskName ASSIGN STRING TERMINATOR
//! delete    := DELETE taskName TERMINATOR
//! setStatus := SET_STATUS taskName ASSIGN STRING TERMINATOR
//! show      := SHOW taskName TERMINATOR
//! taskName  := IDENTIFIER | STRING
//! ```

use tracing::debug;

use crate::core::{Lexer, Token, TokenKind};
use crate::error::TaskError;

/// A syntactically valid statement, not yet applied to any table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create { name: String, description: String },
    Delete { name: String },
    SetStatus { name: String, status: String },
    Show { name: String },
}

impl Command {
    /// Name of the task the command targets.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Create { name, .. }
            | Self::Delete { name }
            | Self::SetStatus { name, .. }
            | Self::Show { name } => name,
        }
    }
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    lookahead: Option<Token>,
}

impl<'a> Parser<'a> {
    /// Prime the lookahead with the first token.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::Lex` if the first token is malformed.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self, TaskError> {
        let lookahead = lexer.next().transpose()?;
        Ok(Self { lexer, lookahead })
    }

    /// Recognize a single statement.
    ///
    /// Returns `Ok(None)` when the input holds no tokens at all.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::Lex` or `TaskError::Syntax` on the first problem
    /// found. No recovery is attempted.
    pub fn parse(mut self) -> Result<Option<Command>, TaskError> {
        let Some(kind) = self.lookahead.as_ref().map(|t| t.kind) else {
            return Ok(None);
        };

        let command = match kind {
            TokenKind::Create => self.create()?,
            TokenKind::Delete => self.delete()?,
            TokenKind::SetStatus => self.set_status()?,
            TokenKind::Show => self.show()?,
            _ => return Err(self.unexpected(&self.command_hint())),
        };

        if self.lookahead.is_some() {
            return Err(self.unexpected("end of input"));
        }

        debug!(?command, "statement recognized");
        Ok(Some(command))
    }

    fn create(&mut self) -> Result<Command, TaskError> {
        self.expect(TokenKind::Create)?;
        let name = self.task_name()?;
        self.expect(TokenKind::Assign)?;
        let description = self.expect(TokenKind::String)?.text;
        self.expect(TokenKind::Terminator)?;
        Ok(Command::Create { name, description })
    }

    fn delete(&mut self) -> Result<Command, TaskError> {
        self.expect(TokenKind::Delete)?;
        let name = self.task_name()?;
        self.expect(TokenKind::Terminator)?;
        Ok(Command::Delete { name })
    }

    fn set_status(&mut self) -> Result<Command, TaskError> {
        self.expect(TokenKind::SetStatus)?;
        let name = self.task_name()?;
        self.expect(TokenKind::Assign)?;
        let status = self.expect(TokenKind::String)?.text;
        self.expect(TokenKind::Terminator)?;
        Ok(Command::SetStatus { name, status })
    }

    fn show(&mut self) -> Result<Command, TaskError> {
        self.expect(TokenKind::Show)?;
        let name = self.task_name()?;
        self.expect(TokenKind::Terminator)?;
        Ok(Command::Show { name })
    }

    /// Identifiers and string literals are interchangeable as task names.
    fn task_name(&mut self) -> Result<String, TaskError> {
        match self.lookahead.as_ref().map(|t| t.kind) {
            Some(kind @ (TokenKind::Identifier | TokenKind::String)) => {
                Ok(self.expect(kind)?.text)
            },
            _ => Err(self.unexpected("task name (IDENTIFIER or STRING)")),
        }
    }

    /// Consume the lookahead if it has the expected kind.
    fn expect(&mut self, expected: TokenKind) -> Result<Token, TaskError> {
        if !self.lookahead.as_ref().is_some_and(|t| t.kind == expected) {
            return Err(self.unexpected(expected.as_str()));
        }

        let next = self.lexer.next().transpose()?;
        std::mem::replace(&mut self.lookahead, next)
            .ok_or_else(|| self.unexpected(expected.as_str()))
    }

    fn unexpected(&self, expected: &str) -> TaskError {
        let (found, line) = match &self.lookahead {
            Some(token) => (token.to_string(), token.line),
            None => ("end of input".to_string(), self.lexer.line()),
        };
        TaskError::Syntax {
            expected: expected.to_string(),
            found,
            line,
        }
    }

    fn command_hint(&self) -> String {
        let locale = self.lexer.locale();
        let words: Vec<_> = TokenKind::KEYWORDS
            .into_iter()
            .filter_map(|kind| locale.keyword_text(kind))
            .collect();
        format!("command ({})", words.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LexError, Locale};

    fn parse(input: &str) -> Result<Option<Command>, TaskError> {
        Parser::new(Lexer::new(input, Locale::En))?.parse()
    }

    #[test]
    fn test_parse_create() {
        let cmd = parse(r#"create_task X = "write spec";"#).unwrap();
        assert_eq!(
            cmd,
            Some(Command::Create {
                name: "X".to_string(),
                description: "write spec".to_string(),
            })
        );
    }

    #[test]
    fn test_quoted_and_bare_names_are_equivalent() {
        let bare = parse("show_task report;").unwrap();
        let quoted = parse(r#"show_task "report";"#).unwrap();
        assert_eq!(bare, quoted);
    }

    #[test]
    fn test_quoted_name_may_contain_spaces() {
        let cmd = parse(r#"delete_task "buy milk";"#).unwrap().unwrap();
        assert_eq!(cmd.name(), "buy milk");
    }

    #[test]
    fn test_parse_set_status() {
        let cmd = parse(r#"set_status X = "done";"#).unwrap();
        assert_eq!(
            cmd,
            Some(Command::SetStatus {
                name: "X".to_string(),
                status: "done".to_string(),
            })
        );
    }

    #[test]
    fn test_missing_assign() {
        let err = parse(r#"create_task X "desc";"#).unwrap_err();
        match err {
            TaskError::Syntax {
                expected,
                found,
                line,
            } => {
                assert_eq!(expected, "ASSIGN");
                assert_eq!(found, "STRING 'desc'");
                assert_eq!(line, 1);
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_terminator_reports_end_of_input() {
        let err = parse("show_task X").unwrap_err();
        assert!(matches!(
            err,
            TaskError::Syntax { ref expected, ref found, .. }
                if expected == "TERMINATOR" && found == "end of input"
        ));
    }

    #[test]
    fn test_description_must_be_string() {
        let err = parse("create_task X = desc;").unwrap_err();
        assert!(matches!(err, TaskError::Syntax { ref expected, .. } if expected == "STRING"));
    }

    #[test]
    fn test_keyword_is_not_a_task_name() {
        let err = parse("show_task show_task;").unwrap_err();
        assert!(matches!(
            err,
            TaskError::Syntax { ref expected, .. } if expected.starts_with("task name")
        ));
    }

    #[test]
    fn test_unexpected_command() {
        let err = parse("remove X;").unwrap_err();
        match err {
            TaskError::Syntax { expected, found, .. } => {
                assert!(expected.starts_with("command"));
                assert!(expected.contains("create_task"));
                assert_eq!(found, "IDENTIFIER 'remove'");
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_leading_terminator_is_unexpected_command() {
        assert!(matches!(parse(";"), Err(TaskError::Syntax { .. })));
    }

    #[test]
    fn test_empty_input_is_noop() {
        assert_eq!(parse("").unwrap(), None);
        assert_eq!(parse("   \n ").unwrap(), None);
    }

    #[test]
    fn test_trailing_tokens_rejected() {
        let err = parse("show_task X; show_task Y;").unwrap_err();
        assert!(matches!(
            err,
            TaskError::Syntax { ref expected, .. } if expected == "end of input"
        ));
    }

    #[test]
    fn test_lex_error_surfaces_from_lookahead() {
        let err = parse(r#"show_task "abc;"#).unwrap_err();
        assert!(matches!(
            err,
            TaskError::Lex(LexError::UnterminatedString { line: 1 })
        ));
    }

    #[test]
    fn test_syntax_error_line() {
        let err = parse("create_task X\n\n= oops;").unwrap_err();
        assert!(matches!(err, TaskError::Syntax { line: 3, .. }));
    }
}
