//! CSS Values & Units Level 3 — §7.1 Angle Units
//! Spec: <https://www.w3.org/TR/css-values-3/#angles>

use crate::ParseError;
use cssparser::{Parser, Token};

/// Degrees per gradian (400grad = 360deg).
const DEGREES_PER_GRADIAN: f32 = 0.9;
/// Degrees per full turn.
const DEGREES_PER_TURN: f32 = 360.0;

/// A CSS <angle>.
///
/// `grad` and `turn` are folded into degrees at parse time; radians are kept
/// as-is so consumers can convert with their own precision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Angle {
    Degrees(f32),
    Radians(f32),
}

impl Angle {
    /// The angle expressed in degrees.
    #[inline]
    pub fn to_degrees(self) -> f32 {
        match self {
            Self::Degrees(degrees) => degrees,
            Self::Radians(radians) => radians.to_degrees(),
        }
    }
}

/// Parse a CSS <angle> (§7.1): `deg`, `grad`, `rad`, `turn`.
///
/// Unitless zero is not accepted here; in gradient syntax a bare `0` is a length.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not an `<angle>`.
pub fn parse_angle(input: &mut Parser<'_, '_>) -> Result<Angle, ParseError> {
    match input.next() {
        Ok(&Token::Dimension {
            value, ref unit, ..
        }) => match unit.as_ref().to_ascii_lowercase().as_str() {
            "deg" => Ok(Angle::Degrees(value)),
            "grad" => Ok(Angle::Degrees(value * DEGREES_PER_GRADIAN)),
            "turn" => Ok(Angle::Degrees(value * DEGREES_PER_TURN)),
            "rad" => Ok(Angle::Radians(value)),
            _ => Err(ParseError::UnexpectedToken),
        },
        _ => Err(ParseError::UnexpectedToken),
    }
}
