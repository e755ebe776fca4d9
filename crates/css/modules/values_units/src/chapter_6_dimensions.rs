//! CSS Values & Units Level 3 — §6 Dimensions (Lengths subset)
//! Spec: <https://www.w3.org/TR/css-values-3/#lengths>

use crate::ParseError;
use cssparser::{Parser, Token};

/// Supported subset of CSS <length>: px, em, rem, vw, vh, plus unitless zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Pixels,
    Ems,
    RootEms,
    ViewportWidth,
    ViewportHeight,
}

impl LengthUnit {
    /// Map a dimension unit (case-insensitive) to a supported length unit.
    pub fn from_unit(unit: &str) -> Option<Self> {
        match unit.to_ascii_lowercase().as_str() {
            "px" => Some(Self::Pixels),
            "em" => Some(Self::Ems),
            "rem" => Some(Self::RootEms),
            "vw" => Some(Self::ViewportWidth),
            "vh" => Some(Self::ViewportHeight),
            _ => None,
        }
    }
}

/// Compute the pixel value for a given `Length` using the current environment.
///
/// - Pixels: returns the raw value.
/// - Ems/RootEms: scales by the provided font sizes.
/// - Viewport-relative (vw/vh): requires viewport; returns a percentage of width/height.
pub fn compute_length_px(
    length: Length,
    font_size_px: f32,
    root_font_size_px: f32,
    viewport: Option<Viewport>,
) -> Option<f32> {
    match length.unit {
        LengthUnit::Pixels => Some(length.value),
        LengthUnit::Ems => Some(length.value * font_size_px),
        LengthUnit::RootEms => Some(length.value * root_font_size_px),
        LengthUnit::ViewportWidth => viewport
            .map(|viewport_metrics| length.value * (viewport_metrics.width_px as f32) / 100.0),
        LengthUnit::ViewportHeight => viewport
            .map(|viewport_metrics| length.value * (viewport_metrics.height_px as f32) / 100.0),
    }
}

/// A CSS <length> value with unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Length {
    pub value: f32,
    pub unit: LengthUnit,
}

/// Viewport metrics used to evaluate viewport-relative units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width_px: u32,
    pub height_px: u32,
}

/// Parse a CSS <length> (§6.2). Supports px/em/rem/vw/vh and unitless zero per spec.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a supported `<length>`.
pub fn parse_length(input: &mut Parser<'_, '_>) -> Result<Length, ParseError> {
    match input.next() {
        Ok(&Token::Dimension {
            value, ref unit, ..
        }) => LengthUnit::from_unit(unit.as_ref())
            .map(|unit_kind| Length {
                value,
                unit: unit_kind,
            })
            .ok_or(ParseError::UnexpectedToken),
        Ok(&Token::Number { value: 0.0, .. }) => Ok(Length {
            value: 0.0,
            unit: LengthUnit::Pixels,
        }),
        _ => Err(ParseError::UnexpectedToken),
    }
}
