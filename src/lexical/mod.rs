//! The lexical module is responsible for converting raw text into a stream of tokens.

pub mod cursor;

pub mod scanner;

pub mod token;

mod error;
pub use error::{Error, UnrecognizedCharacter};
