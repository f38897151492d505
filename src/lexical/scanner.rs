//! Contains the [`Scanner`] that classifies characters into [`Token`]s.

use std::{iter::FusedIterator, str::FromStr};

use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::base::{Handler, VoidHandler};

use super::{
    cursor::PeekableCursor,
    token::{KeywordKind, Token, TokenKind},
    Error, UnrecognizedCharacter,
};

/// What the scanner does with a character that no rule accepts.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnrecognizedPolicy {
    /// Drop the character without a diagnostic.
    #[default]
    SkipUnrecognized,

    /// Drop the character and send an [`UnrecognizedCharacter`] to the handler.
    ReportUnrecognized,
}

/// Options controlling a [`Scanner`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScannerOptions {
    /// Policy for characters that no rule accepts.
    pub unrecognized: UnrecognizedPolicy,
}

/// Scanning rules, tried in declaration order. The first matching rule produces the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
enum Rule {
    Whitespace,
    Identifier,
    Transition,
}

impl Rule {
    fn matches<I>(self, current: char, cursor: &PeekableCursor<I>) -> bool
    where
        I: Iterator<Item = char>,
    {
        match self {
            Self::Whitespace => is_whitespace(current),
            Self::Identifier => is_first_identifier_character(current),
            Self::Transition => {
                current == '-' && cursor.has_next() && cursor.peek() == Ok('>')
            }
        }
    }

    fn scan<I>(self, current: char, cursor: &mut PeekableCursor<I>) -> Token
    where
        I: Iterator<Item = char>,
    {
        let mut lexeme = String::from(current);

        match self {
            Self::Whitespace => {
                cursor.advance_while(is_whitespace, &mut lexeme);
                Token::new(TokenKind::Whitespace, lexeme)
            }
            Self::Identifier => {
                cursor.advance_while(is_identifier_character, &mut lexeme);

                let kind =
                    KeywordKind::from_str(&lexeme).map_or(TokenKind::Symbol, KeywordKind::token_kind);
                Token::new(kind, lexeme)
            }
            Self::Transition => {
                // the `>` is part of the operator
                lexeme.extend(cursor.bump());
                Token::new(TokenKind::Transition, lexeme)
            }
        }
    }
}

fn is_whitespace(character: char) -> bool {
    matches!(character, ' ' | '\t' | '\r' | '\n')
}

fn is_first_identifier_character(character: char) -> bool {
    character == '_' || character.is_ascii_alphabetic()
}

fn is_identifier_character(character: char) -> bool {
    character == '_' || character.is_ascii_alphanumeric()
}

#[derive(Debug)]
enum State<I> {
    Scanning(PeekableCursor<I>),
    Finished,
}

/// Lazy sequence of [`Token`]s scanned from a sequence of characters.
///
/// Every token is scanned on demand. The sequence always ends with exactly one
/// [`TokenKind::EndOfInput`] token and cannot be restarted. The underlying character iterator is
/// dropped as soon as it is exhausted, or together with the scanner if it is abandoned early.
#[derive(Debug)]
pub struct Scanner<'h, I, H: ?Sized = VoidHandler> {
    state: State<I>,
    options: ScannerOptions,
    handler: &'h H,
}

/// Scans the given characters with the default [`ScannerOptions`].
pub fn generate_tokens<S>(input: S) -> Scanner<'static, S::IntoIter>
where
    S: IntoIterator<Item = char>,
{
    Scanner::new(input)
}

impl<I> Scanner<'static, I>
where
    I: Iterator<Item = char>,
{
    /// Creates a scanner over the given characters with the default [`ScannerOptions`].
    pub fn new<S>(input: S) -> Self
    where
        S: IntoIterator<Item = char, IntoIter = I>,
    {
        Scanner::with_options(input, ScannerOptions::default(), &VoidHandler)
    }
}

impl<'h, I, H> Scanner<'h, I, H>
where
    I: Iterator<Item = char>,
    H: Handler<Error> + ?Sized,
{
    /// Creates a scanner over the given characters.
    ///
    /// Diagnostics requested by the options are sent to `handler`.
    pub fn with_options<S>(input: S, options: ScannerOptions, handler: &'h H) -> Self
    where
        S: IntoIterator<Item = char, IntoIter = I>,
    {
        Self {
            state: State::Scanning(PeekableCursor::new(input)),
            options,
            handler,
        }
    }

    /// Get the options of the scanner.
    #[must_use]
    pub fn options(&self) -> ScannerOptions {
        self.options
    }

    /// Whether the [`TokenKind::EndOfInput`] token has been produced.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.state, State::Finished)
    }
}

impl<'h, I, H> Iterator for Scanner<'h, I, H>
where
    I: Iterator<Item = char>,
    H: Handler<Error> + ?Sized,
{
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let State::Scanning(cursor) = &mut self.state else {
            return None;
        };

        while let Some(current) = cursor.bump() {
            for rule in Rule::iter() {
                if rule.matches(current, cursor) {
                    return Some(rule.scan(current, cursor));
                }
            }

            match self.options.unrecognized {
                UnrecognizedPolicy::SkipUnrecognized => {
                    tracing::trace!(character = ?current, "Skipping unrecognized character");
                }
                UnrecognizedPolicy::ReportUnrecognized => {
                    tracing::debug!(character = ?current, "Reporting unrecognized character");
                    self.handler
                        .receive(UnrecognizedCharacter { character: current }.into());
                }
            }
        }

        // releases the cursor and the input it owns
        self.state = State::Finished;
        tracing::debug!("Reached the end of the input");

        Some(Token::end_of_input())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            State::Scanning(cursor) if cursor.has_next() => (1, None),
            State::Scanning(_) => (1, Some(1)),
            State::Finished => (0, Some(0)),
        }
    }
}

impl<'h, I, H> FusedIterator for Scanner<'h, I, H>
where
    I: Iterator<Item = char>,
    H: Handler<Error> + ?Sized,
{
}
