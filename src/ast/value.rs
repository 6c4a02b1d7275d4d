use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar leaf of the document tree.
///
/// Bare tokens are coerced into the numeric and boolean kinds while reading;
/// quoted content is always [`Atom::Text`].
///
/// # Examples
///
/// ```rust
/// use dipascii::ast::Atom;
/// let a = Atom::Percent(50.0);
/// assert_eq!(a.kind(), "Percent");
/// assert_eq!(a.as_f64(), Some(50.0));
/// assert_eq!(a.to_string(), "50%");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Atom {
    Integer(i64),
    Float(f64),
    /// A float whose source token carried a trailing `%`.
    Percent(f64),
    Boolean(bool),
    /// Quoted content, verbatim.
    Text(String),
    /// A bare token that is not a number or boolean.
    Symbol(String),
}

impl Atom {
    /// Returns the kind of this atom as a static name, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Atom::Integer(_) => "Integer",
            Atom::Float(_) => "Float",
            Atom::Percent(_) => "Percent",
            Atom::Boolean(_) => "Boolean",
            Atom::Text(_) => "Text",
            Atom::Symbol(_) => "Symbol",
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Atom::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Any numeric kind, widened to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Atom::Integer(n) => Some(*n as f64),
            Atom::Float(n) | Atom::Percent(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Atom::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Text or symbol content.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Atom::Text(s) | Atom::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Atom::Integer(_) | Atom::Float(_) | Atom::Percent(_))
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Integer(n) => write!(f, "{}", n),
            // Debug keeps the fractional part: 2.0 stays "2.0", not "2".
            Atom::Float(n) => write!(f, "{:?}", n),
            Atom::Percent(n) => write!(f, "{}%", n),
            Atom::Boolean(true) => write!(f, "True"),
            Atom::Boolean(false) => write!(f, "False"),
            Atom::Text(s) => write!(f, "\"{}\"", s),
            Atom::Symbol(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Atom {
    fn from(n: i64) -> Self {
        Atom::Integer(n)
    }
}

impl From<f64> for Atom {
    fn from(n: f64) -> Self {
        Atom::Float(n)
    }
}

impl From<bool> for Atom {
    fn from(b: bool) -> Self {
        Atom::Boolean(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_kinds_widen() {
        assert_eq!(Atom::Integer(3).as_f64(), Some(3.0));
        assert_eq!(Atom::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(Atom::Percent(10.0).as_f64(), Some(10.0));
        assert_eq!(Atom::Float(2.5).as_i64(), None);
        assert_eq!(Atom::Text("1".into()).as_f64(), None);
    }

    #[test]
    fn display_distinguishes_kinds() {
        assert_eq!(Atom::Integer(2).to_string(), "2");
        assert_eq!(Atom::Float(2.0).to_string(), "2.0");
        assert_eq!(Atom::Percent(2.0).to_string(), "2%");
        assert_eq!(Atom::Boolean(false).to_string(), "False");
        assert_eq!(Atom::Text("42".into()).to_string(), "\"42\"");
        assert_eq!(Atom::Symbol("Center".into()).to_string(), "Center");
    }

    #[test]
    fn text_and_symbol_share_str_access() {
        assert_eq!(Atom::Text("hi".into()).as_str(), Some("hi"));
        assert_eq!(Atom::Symbol("hi".into()).as_str(), Some("hi"));
        assert_eq!(Atom::Boolean(true).as_str(), None);
    }
}
