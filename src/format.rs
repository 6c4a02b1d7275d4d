//! Detection of the exporter dialect from a parsed document.

use crate::ast::{Atom, List, Node};
use std::fmt;

/// Header symbol of P-CAD style exports.
pub const ACCEL_ASCII: &str = "ACCEL_ASCII";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// The document starts with `ACCEL_ASCII`, bare or quoted.
    AccelAscii,
    Unknown,
}

impl Format {
    pub fn detect(doc: &List) -> Self {
        match doc.first() {
            Some(Node::Atom(Atom::Symbol(header) | Atom::Text(header))) if header == ACCEL_ASCII => {
                Format::AccelAscii
            }
            _ => Format::Unknown,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::AccelAscii => write!(f, "{}", ACCEL_ASCII),
            Format::Unknown => write!(f, "unknown"),
        }
    }
}
