//! # dipascii
//!
//! Reader and query tree for the lisp-like ASCII schematic exports written by
//! DipTrace and P-CAD (`ACCEL_ASCII`).
//!
//! ```rust
//! use dipascii::{parse_str, ast::Atom};
//! let doc = parse_str("(A (B 1) (C 2.5) (D \"hi\") (E 50%) (F True))").unwrap();
//! let a = doc.find("A", false).unwrap();
//! assert_eq!(a.get("B").unwrap().as_i64(), Some(1));
//! assert_eq!(a.get("E").unwrap().as_atom(), Some(&Atom::Percent(50.0)));
//! assert!(a.get("Z").is_err());
//! ```

pub use crate::ast::{Atom, List, Node, NodeRef};
pub use crate::errors::{ParseError, QueryError};
pub use crate::syntax::{parse, parse_reader, parse_str};

pub mod ast;
pub mod cli;
pub mod errors;
pub mod format;
pub mod syntax;
