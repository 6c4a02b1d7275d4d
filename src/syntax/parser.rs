//! Recursive-descent reader for the ASCII schematic format.
//!
//! The format is a bare lisp: `(name item ...)` groups, `"quoted"` text and
//! bare tokens, nothing else. Quoted text has no escapes. A group's name is
//! whatever follows `(` up to the first whitespace or `)`, so `()` is a group
//! with an empty name.

use super::source::{CharSource, IterSource, ReaderSource};
use super::token;
use crate::ast::{Atom, List, Node};
use crate::errors::{EofContext, ParseError, ParseErrorKind};
use std::io::Read;
use tracing::{debug, trace};

// ============================================================================
// PUBLIC API
// ============================================================================

/// Reads `source` to exhaustion and wraps the top-level items in an unnamed
/// root list. A `)` with no open group is an error.
pub fn parse<S: CharSource>(source: S) -> Result<List, ParseError> {
    Parser::new(source).parse_document()
}

pub fn parse_str(text: &str) -> Result<List, ParseError> {
    parse(IterSource::from(text))
}

pub fn parse_reader<R: Read>(reader: R) -> Result<List, ParseError> {
    parse(ReaderSource::new(reader))
}

// ============================================================================
// PARSER
// ============================================================================

/// One step of item dispatch.
enum Item {
    Node(Node),
    Close,
    End,
}

pub struct Parser<S> {
    source: S,
    // A bare token's terminator, handed back for the enclosing loop.
    lookahead: Option<char>,
    offset: usize,
    groups: usize,
}

impl<S: CharSource> Parser<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            lookahead: None,
            offset: 0,
            groups: 0,
        }
    }

    pub fn parse_document(mut self) -> Result<List, ParseError> {
        let mut items = Vec::new();
        loop {
            match self.next_item()? {
                Item::Node(node) => items.push(node),
                Item::End => break,
                // The offset already counts the ')'.
                Item::Close => {
                    return Err(ParseError::new(
                        ParseErrorKind::UnexpectedClose,
                        self.offset - 1,
                    ))
                }
            }
        }
        debug!(
            items = items.len(),
            groups = self.groups,
            bytes = self.offset,
            "parsed document"
        );
        Ok(List::root(items))
    }

    fn bump(&mut self) -> Result<Option<char>, ParseError> {
        if let Some(ch) = self.lookahead.take() {
            return Ok(Some(ch));
        }
        let next = self.source.next_char()?;
        if let Some(ch) = next {
            self.offset += ch.len_utf8();
        }
        Ok(next)
    }

    fn next_item(&mut self) -> Result<Item, ParseError> {
        let ch = loop {
            match self.bump()? {
                Some(ch) if ch.is_whitespace() => continue,
                other => break other,
            }
        };
        let item = match ch {
            None => Item::End,
            Some(')') => Item::Close,
            Some('"') => Item::Node(Node::Atom(Atom::Text(self.quoted_text()?))),
            Some('(') => Item::Node(Node::List(self.group()?)),
            Some(first) => {
                let text = self.bare_token(first)?;
                Item::Node(Node::Atom(token::coerce(&text)))
            }
        };
        Ok(item)
    }

    /// After the opening quote; consumes the closing one.
    fn quoted_text(&mut self) -> Result<String, ParseError> {
        let mut text = String::new();
        loop {
            match self.bump()? {
                Some('"') => return Ok(text),
                Some(ch) => text.push(ch),
                None => return Err(self.eof(EofContext::QuotedText)),
            }
        }
    }

    /// After the opening paren; consumes the closing one.
    fn group(&mut self) -> Result<List, ParseError> {
        self.groups += 1;
        let mut name = String::new();
        let terminator = loop {
            match self.bump()? {
                Some(ch) if token::is_terminator(ch) => break ch,
                Some(ch) => name.push(ch),
                None => return Err(self.eof(EofContext::GroupName)),
            }
        };
        trace!(name = %name, offset = self.offset, "open group");
        if terminator == ')' {
            return Ok(List::named(name, Vec::new()));
        }

        let mut items = Vec::new();
        loop {
            match self.next_item()? {
                Item::Node(node) => items.push(node),
                Item::Close => return Ok(List::named(name, items)),
                Item::End => return Err(self.eof(EofContext::List)),
            }
        }
    }

    /// Accumulates up to whitespace, `)` or end of input. The terminator is
    /// left for the caller.
    fn bare_token(&mut self, first: char) -> Result<String, ParseError> {
        let mut text = String::from(first);
        while let Some(ch) = self.bump()? {
            if token::is_terminator(ch) {
                self.lookahead = Some(ch);
                break;
            }
            text.push(ch);
        }
        Ok(text)
    }

    fn eof(&self, context: EofContext) -> ParseError {
        ParseError::unexpected_eof(context, self.offset)
    }
}
