//! CSS Values & Units Level 3 — §9 Colors (subset)
//! Spec: <https://www.w3.org/TR/css-color-3/>
//!
//! Only the RGBA value type and token-level recognition live here; turning the
//! source text into channels is the job of `css_color`.

use crate::ParseError;
use cssparser::{ParseError as CssParseError, Parser, Token};

/// A minimal RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    /// Opaque black, the initial value of `color`.
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self {
        red: 0,
        green: 0,
        blue: 0,
        alpha: 0,
    };

    /// Build an opaque color from 8-bit channels.
    #[inline]
    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 255,
        }
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    #[inline]
    fn from((red, green, blue, alpha): (u8, u8, u8, u8)) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

/// Consume the remainder of a function block without interpreting it.
fn skip_block<'i>(nested: &mut Parser<'i, '_>) -> Result<(), CssParseError<'i, ()>> {
    while nested.next().is_ok() {}
    Ok(())
}

/// Consume one hash (`#rgb`, `#rrggbbaa`, ...) or functional (`rgb(...)`,
/// `hsl(...)`, ...) color token and return its source text.
///
/// Identifiers are deliberately rejected: named colors are keywords and are
/// resolved by name at a later stage.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token cannot start a color.
pub fn parse_color_text<'i>(input: &mut Parser<'i, '_>) -> Result<&'i str, ParseError> {
    let start = input.position();
    let is_function = match input.next() {
        Ok(Token::Hash(_) | Token::IDHash(_)) => false,
        Ok(Token::Function(_)) => true,
        _ => return Err(ParseError::UnexpectedToken),
    };
    if is_function {
        input
            .parse_nested_block(skip_block)
            .map_err(|_| ParseError::UnexpectedToken)?;
    }
    Ok(input.slice_from(start).trim())
}
