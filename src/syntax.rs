//! Syntax module: character sources, token coercion and the reader.
//!
//! Reading is single-pass and pull-based: the parser asks its [`CharSource`]
//! for one character at a time and builds the tree bottom-up.

pub mod parser;
pub mod source;
pub mod token;

pub use parser::{parse, parse_reader, parse_str, Parser};
pub use source::{CharSource, IterSource, ReaderSource};
