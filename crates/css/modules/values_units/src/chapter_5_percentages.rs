//! CSS Values & Units Level 3 — §5 Percentages
//! Spec: <https://www.w3.org/TR/css-values-3/#percentages>

use crate::ParseError;
use cssparser::{Parser, Token};

/// A CSS <percentage>
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Percentage(pub f32); // stored as 0.0..=1.0

/// Resolve a percentage against its basis (e.g. the box width for a gradient axis).
///
/// Spec: <https://www.w3.org/TR/css-values-3/#percentages>
#[inline]
pub fn compute_percentage_px(percentage: Percentage, basis_px: f32) -> f32 {
    percentage.0 * basis_px
}

/// Parse a CSS <percentage> (§5.1).
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a `<percentage>`.
pub fn parse_percentage(input: &mut Parser<'_, '_>) -> Result<Percentage, ParseError> {
    match input.next() {
        Ok(&Token::Percentage { unit_value, .. }) => Ok(Percentage(unit_value)),
        _ => Err(ParseError::UnexpectedToken),
    }
}
