//! The `Bloomish` language toolkit.
//!
//! `Bloomish` is a small rule-rewriting language made of `axiom` and `rule` statements, such as
//! `axiom A B` or `rule A -> B A`. This crate turns Bloomish source code into tokens.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod base;
pub mod lexical;

use std::{path::Path, str::Chars, vec};

use base::{FileProvider, Handler, Result};
use lexical::scanner::{Scanner, ScannerOptions};

/// Converts the given source code to tokens.
///
/// The tokens are scanned lazily while the returned [`Scanner`] is iterated.
#[must_use]
pub fn tokenize(source: &str) -> Scanner<'static, Chars<'_>> {
    Scanner::new(source.chars())
}

/// Converts the given source code to tokens using the given options.
///
/// Diagnostics requested by `options` are sent to `handler`.
#[must_use]
pub fn tokenize_with<'s, 'h, H>(
    source: &'s str,
    options: ScannerOptions,
    handler: &'h H,
) -> Scanner<'h, Chars<'s>, H>
where
    H: Handler<lexical::Error> + ?Sized,
{
    Scanner::with_options(source.chars(), options, handler)
}

/// Converts the contents of the file at the given path to tokens.
///
/// # Errors
/// - If an error occurs while reading the file.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn tokenize_file<'h, H>(
    provider: &impl FileProvider,
    path: &Path,
    options: ScannerOptions,
    handler: &'h H,
) -> Result<Scanner<'h, vec::IntoIter<char>, H>>
where
    H: Handler<lexical::Error> + ?Sized,
{
    let source = provider.read_str(path)?;
    let characters = source.chars().collect::<Vec<_>>();

    tracing::debug!(characters = characters.len(), "Read source file");

    Ok(Scanner::with_options(characters, options, handler))
}
