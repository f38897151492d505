//! Contains the [`PeekableCursor`] the scanner reads its input through.

use super::Error;

/// Forward-only reader over characters that can preview the upcoming character without
/// consuming it.
///
/// The cursor exclusively owns the iterator it wraps. It is single-pass: there is no reset, and
/// a consumed character can never be revisited. Dropping the cursor drops the wrapped iterator.
#[derive(Debug, Clone)]
pub struct PeekableCursor<I> {
    source: I,
    lookahead: Option<char>,
    current: Option<char>,
}

impl<I> PeekableCursor<I>
where
    I: Iterator<Item = char>,
{
    /// Creates a cursor over the given characters.
    ///
    /// The first character is pulled right away to fill the lookahead.
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<Item = char, IntoIter = I>,
    {
        let mut source = source.into_iter();
        let lookahead = source.next();

        Self {
            source,
            lookahead,
            current: None,
        }
    }

    /// Whether [`Self::peek`] and [`Self::advance`] can succeed.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.lookahead.is_some()
    }

    /// The character last returned by [`Self::advance`], [`None`] before the first call.
    #[must_use]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Looks at the upcoming character without consuming it.
    ///
    /// # Errors
    /// - [`Error::NothingToPeek`] if the input is exhausted.
    pub fn peek(&self) -> Result<char, Error> {
        self.lookahead.ok_or(Error::NothingToPeek)
    }

    /// Consumes and returns the upcoming character.
    ///
    /// # Errors
    /// - [`Error::NoMoreElements`] if the input is exhausted.
    pub fn advance(&mut self) -> Result<char, Error> {
        self.bump().ok_or(Error::NoMoreElements)
    }

    /// Consumes the upcoming character if there is one.
    pub fn bump(&mut self) -> Option<char> {
        let character = self.lookahead?;

        self.current = Some(character);
        // never pulled again once it has run dry
        self.lookahead = self.source.next();

        Some(character)
    }

    /// Consumes the upcoming character if it satisfies the predicate.
    pub fn next_if(&mut self, predicate: impl FnOnce(char) -> bool) -> Option<char> {
        match self.lookahead {
            Some(character) if predicate(character) => self.bump(),
            _ => None,
        }
    }

    /// Consumes characters into `lexeme` while the predicate returns true.
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool, lexeme: &mut String) {
        while let Some(character) = self.next_if(&predicate) {
            lexeme.push(character);
        }
    }
}
