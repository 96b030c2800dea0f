use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::TokenKind;

/// Spelling of the reserved words and status labels.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// `create_task`, `delete_task`, `set_status`, `show_task`.
    #[default]
    En,
    /// `criar_tarefa`, `remover_tarefa`, `alterar_status`, `mostrar_tarefa`.
    Pt,
}

impl Locale {
    /// Map a word to its keyword token, if it is reserved in this locale.
    #[must_use]
    pub fn keyword(self, word: &str) -> Option<TokenKind> {
        TokenKind::KEYWORDS
            .into_iter()
            .find(|kind| self.keyword_text(*kind) == Some(word))
    }

    /// Reserved spelling of a keyword token kind.
    ///
    /// Returns `None` for non-keyword kinds.
    #[must_use]
    pub const fn keyword_text(self, kind: TokenKind) -> Option<&'static str> {
        let text = match (self, kind) {
            (Self::En, TokenKind::Create) => "create_task",
            (Self::En, TokenKind::Delete) => "delete_task",
            (Self::En, TokenKind::SetStatus) => "set_status",
            (Self::En, TokenKind::Show) => "show_task",
            (Self::Pt, TokenKind::Create) => "criar_tarefa",
            (Self::Pt, TokenKind::Delete) => "remover_tarefa",
            (Self::Pt, TokenKind::SetStatus) => "alterar_status",
            (Self::Pt, TokenKind::Show) => "mostrar_tarefa",
            _ => return None,
        };
        Some(text)
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::En => "en",
            Self::Pt => "pt",
        })
    }
}
