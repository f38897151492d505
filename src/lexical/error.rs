use std::fmt::Display;

use crate::base::log::{Message, Severity};

/// Represents an error that occurred during the lexical analysis of the source code.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
pub enum Error {
    #[error("Nothing left to peek.")]
    NothingToPeek,
    #[error("No more characters to consume.")]
    NoMoreElements,
    #[error(transparent)]
    UnrecognizedCharacter(#[from] UnrecognizedCharacter),
}

impl Error {
    /// Whether the error comes from using a cursor past the end of its input.
    #[must_use]
    pub fn is_illegal_state(&self) -> bool {
        matches!(self, Self::NothingToPeek | Self::NoMoreElements)
    }
}

/// Source code contains a character that no scanning rule accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
pub struct UnrecognizedCharacter {
    /// The character that was skipped.
    pub character: char,
}

impl Display for UnrecognizedCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Message::new(
                Severity::Warning,
                format!(
                    "skipped unrecognized character `{}`",
                    self.character.escape_debug()
                )
            )
        )
    }
}
