//! Classification of bare (unquoted) tokens.

use crate::ast::Atom;

/// Ends a bare token. The terminator itself is not part of the token.
pub fn is_terminator(ch: char) -> bool {
    ch.is_whitespace() || ch == ')'
}

/// Coerces a bare token into the first kind that accepts it.
///
/// A trailing `%` makes a [`Atom::Percent`]. Otherwise the token is tried as
/// an integer, a float, and the exact literals `True`/`False`, in that order.
/// Anything left over is a [`Atom::Symbol`], so coercion never fails.
///
/// # Examples
///
/// ```rust
/// use dipascii::ast::Atom;
/// use dipascii::syntax::token::coerce;
/// assert_eq!(coerce("12"), Atom::Integer(12));
/// assert_eq!(coerce("12.0"), Atom::Float(12.0));
/// assert_eq!(coerce("75%"), Atom::Percent(75.0));
/// assert_eq!(coerce("True"), Atom::Boolean(true));
/// assert_eq!(coerce("true"), Atom::Symbol("true".into()));
/// ```
pub fn coerce(token: &str) -> Atom {
    if let Some(magnitude) = token.strip_suffix('%') {
        if let Ok(value) = magnitude.parse::<f64>() {
            return Atom::Percent(value);
        }
        return Atom::Symbol(token.to_string());
    }
    if let Ok(value) = token.parse::<i64>() {
        return Atom::Integer(value);
    }
    if let Ok(value) = token.parse::<f64>() {
        return Atom::Float(value);
    }
    match token {
        "True" => Atom::Boolean(true),
        "False" => Atom::Boolean(false),
        _ => Atom::Symbol(token.to_string()),
    }
}
