//! CSS Identifiers (keywords such as `to`, `top`, or named colors)
//! Spec: <https://www.w3.org/TR/css-values-3/#css-identifier>

use crate::ParseError;
use cssparser::{Parser, Token};

/// A CSS identifier value, ASCII-lowercased for canonical comparison.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ident(pub String);

impl Ident {
    /// Borrow the canonical (lowercase) text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Parse a CSS identifier token.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not an identifier.
#[inline]
pub fn parse_ident(input: &mut Parser<'_, '_>) -> Result<Ident, ParseError> {
    match input.next() {
        Ok(Token::Ident(text)) => Ok(Ident(text.as_ref().to_ascii_lowercase())),
        _ => Err(ParseError::UnexpectedToken),
    }
}
