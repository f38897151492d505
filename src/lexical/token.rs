//! Contains the [`Token`] struct and its related types.

use std::{collections::HashMap, fmt::Display, str::FromStr, sync::OnceLock};

use getset::{CopyGetters, Getters};
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};

/// Is an enumeration representing keywords in Bloomish.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum KeywordKind {
    Axiom,
    Rule,
}

impl Display for KeywordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Is an error that is returned when a string cannot be parsed into a [`KeywordKind`] in
/// [`FromStr`] trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, thiserror::Error)]
#[error("invalid string representation of keyword.")]
pub struct KeywordParseError;

impl FromStr for KeywordKind {
    type Err = KeywordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static STRING_KEYWORD_MAP: OnceLock<HashMap<&'static str, KeywordKind>> = OnceLock::new();
        let map = STRING_KEYWORD_MAP.get_or_init(|| {
            let mut map = HashMap::new();

            for keyword in Self::iter() {
                map.insert(keyword.as_str(), keyword);
            }

            map
        });

        map.get(s).copied().ok_or(KeywordParseError)
    }
}

impl KeywordKind {
    /// Gets the string representation of the keyword as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Axiom => "axiom",
            Self::Rule => "rule",
        }
    }

    /// Gets the [`TokenKind`] produced when the keyword is scanned.
    #[must_use]
    pub fn token_kind(self) -> TokenKind {
        match self {
            Self::Axiom => TokenKind::AxiomKeyword,
            Self::Rule => TokenKind::RuleKeyword,
        }
    }
}

/// Is an enumeration containing all kinds of tokens in the Bloomish language.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, IntoStaticStr,
)]
pub enum TokenKind {
    /// The end of a statement.
    ///
    /// No scanning rule produces it yet.
    Terminator,

    /// The `->` between a symbol and its replacement inside a rule statement.
    Transition,

    /// The `axiom` keyword starting an axiom statement.
    AxiomKeyword,

    /// The `rule` keyword starting a rule statement.
    RuleKeyword,

    /// A symbol used in axiom and rule statements.
    Symbol,

    /// Whitespace, which is ignored by everything beyond the scanner.
    Whitespace,

    /// The end of the input.
    EndOfInput,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &'static str = self.into();
        f.write_str(name)
    }
}

/// Represents a classified unit of source text.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, CopyGetters)]
pub struct Token {
    /// Get the kind of the token.
    #[get_copy = "pub"]
    kind: TokenKind,

    /// Get the exact text the token was scanned from.
    #[get = "pub"]
    lexeme: String,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }

    /// The token terminating every scanned sequence.
    pub(crate) fn end_of_input() -> Self {
        Self::new(TokenKind::EndOfInput, String::new())
    }

    /// Whether the token is the [`TokenKind::EndOfInput`] sentinel.
    #[must_use]
    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// Dissolves the token into its lexeme.
    #[must_use]
    pub fn into_lexeme(self) -> String {
        self.lexeme
    }
}

/// Renders as `Token { Kind = <kind>, Lexeme = <lexeme> }`, one line per token, with the lexeme
/// escaped so that whitespace runs stay readable.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token {{ Kind = {}, Lexeme = {:?} }}",
            self.kind, self.lexeme
        )
    }
}
