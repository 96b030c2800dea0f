//! Tokenizer for a single statement.
//!
//! Lexemes are recognised in this order:
//!
//! 1. `"..."` string literal (at least one character, no escapes)
//! 2. `[A-Za-z_][A-Za-z0-9_]*` identifier, or a keyword of the active locale
//! 3. `=`
//! 4. `;`
//!
//! Spaces and tabs are skipped. Newlines are skipped but advance the line
//! counter. Anything else stops the lexer with [`LexError::InvalidCharacter`].

use std::iter::Peekable;
use std::str::Chars;

use thiserror::Error;
use tracing::trace;

use crate::core::{Locale, Token, TokenKind};

/// Failure to tokenize a statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("Invalid character '{ch}' at line {line}")]
    InvalidCharacter { ch: char, line: usize },

    #[error("Unterminated string starting at line {line}")]
    UnterminatedString { line: usize },

    #[error("Empty string literal at line {line}")]
    EmptyString { line: usize },
}

impl LexError {
    /// Line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::InvalidCharacter { line, .. }
            | Self::UnterminatedString { line }
            | Self::EmptyString { line } => *line,
        }
    }
}

/// Lazy token stream over one statement.
///
/// The iterator yields `Err` at most once and is fused afterwards.
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    locale: Locale,
    failed: bool,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(input: &'a str, locale: Locale) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
            locale,
            failed: false,
        }
    }

    /// Current line of the cursor.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        loop {
            let Some(&c) = self.chars.peek() else {
                return Ok(None);
            };

            match c {
                ' ' | '\t' => {
                    self.chars.next();
                },
                '\n' => {
                    self.chars.next();
                    self.line += 1;
                },
                '"' => return self.string().map(Some),
                '=' => return Ok(Some(self.single(TokenKind::Assign, c))),
                ';' => return Ok(Some(self.single(TokenKind::Terminator, c))),
                c if c == '_' || c.is_ascii_alphabetic() => return Ok(Some(self.word())),
                other => {
                    return Err(LexError::InvalidCharacter {
                        ch: other,
                        line: self.line,
                    })
                },
            }
        }
    }

    fn single(&mut self, kind: TokenKind, c: char) -> Token {
        self.chars.next();
        Token::new(kind, c.to_string(), self.line)
    }

    fn word(&mut self) -> Token {
        let mut text = String::new();
        while let Some(&c) = self.chars.peek() {
            if c == '_' || c.is_ascii_alphanumeric() {
                text.push(c);
                self.chars.next();
            } else {
                break;
            }
        }

        let kind = self.locale.keyword(&text).unwrap_or(TokenKind::Identifier);
        Token::new(kind, text, self.line)
    }

    fn string(&mut self) -> Result<Token, LexError> {
        let start = self.line;
        self.chars.next();

        let mut text = String::new();
        loop {
            match self.chars.next() {
                Some('"') => break,
                Some(c) => {
                    if c == '\n' {
                        self.line += 1;
                    }
                    text.push(c);
                },
                None => return Err(LexError::UnterminatedString { line: start }),
            }
        }

        if text.is_empty() {
            return Err(LexError::EmptyString { line: start });
        }
        Ok(Token::new(TokenKind::String, text, start))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let item = self.next_token().transpose();
        match &item {
            Some(Ok(token)) => trace!(kind = %token.kind, text = %token.text, line = token.line, "token"),
            Some(Err(_)) => self.failed = true,
            None => {},
        }
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Lexer::new(input, Locale::En)
            .map(|t| t.unwrap().kind)
            .collect()
    }

    #[test]
    fn test_create_statement() {
        assert_eq!(
            kinds(r#"create_task X = "write spec";"#),
            vec![
                TokenKind::Create,
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::String,
                TokenKind::Terminator,
            ]
        );
    }

    #[test]
    fn test_string_quotes_are_stripped() {
        let tokens: Vec<_> = Lexer::new(r#""buy milk""#, Locale::En)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(tokens, vec![Token::new(TokenKind::String, "buy milk", 1)]);
    }

    #[test]
    fn test_keyword_only_on_whole_word() {
        let tokens: Vec<_> = Lexer::new("show_task show_tasks _x1", Locale::En)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Show);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].text, "show_tasks");
        assert_eq!(tokens[2].text, "_x1");
    }

    #[test]
    fn test_keywords_follow_locale() {
        let tokens: Vec<_> = Lexer::new("criar_tarefa create_task", Locale::Pt)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Create);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_whitespace_without_separators() {
        assert_eq!(
            kinds("delete_task\tX;"),
            vec![TokenKind::Delete, TokenKind::Identifier, TokenKind::Terminator]
        );
        assert_eq!(
            kinds(r#"X="d";"#),
            vec![
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::String,
                TokenKind::Terminator,
            ]
        );
    }

    #[test]
    fn test_newlines_advance_line() {
        let tokens: Vec<_> = Lexer::new("show_task\n\nX\n;", Locale::En)
            .collect::<Result<_, _>>()
            .unwrap();
        let lines: Vec<_> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 3, 4]);
    }

    #[test]
    fn test_invalid_character() {
        let mut lexer = Lexer::new("show_task\n@x;", Locale::En);
        assert_eq!(lexer.next().unwrap().unwrap().kind, TokenKind::Show);
        assert_eq!(
            lexer.next(),
            Some(Err(LexError::InvalidCharacter { ch: '@', line: 2 }))
        );
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_digit_cannot_start_identifier() {
        let err = Lexer::new("1abc", Locale::En).next().unwrap().unwrap_err();
        assert_eq!(err, LexError::InvalidCharacter { ch: '1', line: 1 });
    }

    #[test]
    fn test_unterminated_string() {
        let results: Vec<_> = Lexer::new(r#"show_task "abc;"#, Locale::En).collect();
        assert_eq!(results.len(), 2);
        assert_eq!(results[1], Err(LexError::UnterminatedString { line: 1 }));
    }

    #[test]
    fn test_empty_string_is_rejected() {
        let err = Lexer::new(r#""""#, Locale::En).next().unwrap().unwrap_err();
        assert_eq!(err, LexError::EmptyString { line: 1 });
    }

    #[test]
    fn test_string_may_hold_any_non_quote_text() {
        let token = Lexer::new(r#""em andamento; = ção""#, Locale::En)
            .next()
            .unwrap()
            .unwrap();
        assert_eq!(token.text, "em andamento; = ção");
    }

    #[test]
    fn test_empty_input() {
        assert!(Lexer::new("  \t\n", Locale::En).next().is_none());
    }
}
