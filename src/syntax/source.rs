//! Character sources the parser pulls from, one character at a time.

use crate::errors::{ParseError, ParseErrorKind};
use std::io::{self, BufReader, Read};

/// A pull source of characters.
///
/// `Ok(None)` means the source is exhausted. The parser never reads again
/// after seeing it.
pub trait CharSource {
    fn next_char(&mut self) -> Result<Option<char>, ParseError>;
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    fn next_char(&mut self) -> Result<Option<char>, ParseError> {
        (**self).next_char()
    }
}

/// Adapts any `char` iterator, e.g. `str::chars`.
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    chars: I,
}

impl<I: Iterator<Item = char>> IterSource<I> {
    pub fn new(chars: I) -> Self {
        Self { chars }
    }
}

impl<'a> From<&'a str> for IterSource<std::str::Chars<'a>> {
    fn from(text: &'a str) -> Self {
        Self::new(text.chars())
    }
}

impl<I: Iterator<Item = char>> CharSource for IterSource<I> {
    fn next_char(&mut self) -> Result<Option<char>, ParseError> {
        Ok(self.chars.next())
    }
}

/// Decodes UTF-8 from a byte reader, one character per pull.
pub struct ReaderSource<R> {
    bytes: io::Bytes<BufReader<R>>,
    offset: usize,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            bytes: BufReader::new(reader).bytes(),
            offset: 0,
        }
    }

    fn next_byte(&mut self) -> Result<Option<u8>, ParseError> {
        self.bytes
            .next()
            .transpose()
            .map_err(|err| ParseError::new(ParseErrorKind::Io(err), self.offset))
    }

    fn invalid(&self, byte: u8) -> ParseError {
        ParseError::new(ParseErrorKind::InvalidUtf8 { byte }, self.offset)
    }
}

impl<R: Read> CharSource for ReaderSource<R> {
    fn next_char(&mut self) -> Result<Option<char>, ParseError> {
        let Some(lead) = self.next_byte()? else {
            return Ok(None);
        };
        let width = utf8_width(lead).ok_or_else(|| self.invalid(lead))?;
        let mut buf = [lead, 0, 0, 0];
        for slot in buf.iter_mut().take(width).skip(1) {
            *slot = self.next_byte()?.ok_or_else(|| self.invalid(lead))?;
        }
        let decoded = std::str::from_utf8(&buf[..width]).map_err(|_| self.invalid(lead))?;
        self.offset += width;
        Ok(decoded.chars().next())
    }
}

fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7f => Some(1),
        0xc2..=0xdf => Some(2),
        0xe0..=0xef => Some(3),
        0xf0..=0xf4 => Some(4),
        _ => None,
    }
}
