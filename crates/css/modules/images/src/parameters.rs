//! Gradient function arguments and a `cssparser` front end that produces them.
//! Spec: <https://www.w3.org/TR/css-images-3/#linear-gradient-syntax>

use crate::error::GradientParseError;
use crate::resolvers::StopUnit;
use css_values_units::{
    Angle, Color, Ident, LengthUnit, parse_angle, parse_color_text, parse_ident, parse_length,
    parse_percentage,
};
use cssparser::{ParseError as CssParseError, ParseErrorKind, Parser, ParserInput};

/// One component value of a `linear-gradient()` argument list.
#[derive(Clone, Debug, PartialEq)]
pub enum RawParameter {
    /// An identifier, lowercased (`to`, `top`, `red`, ...).
    Keyword(String),
    Degrees(f32),
    Radians(f32),
    Length(f32, LengthUnit),
    /// A percentage on a 0..=100 scale.
    Percentage(f32),
    /// A color given in hex or functional notation.
    ColorValue(Color),
}

impl RawParameter {
    /// Keyword text, if this parameter is an identifier.
    #[inline]
    pub fn keyword(&self) -> Option<&str> {
        match self {
            Self::Keyword(text) => Some(text.as_str()),
            Self::Degrees(_)
            | Self::Radians(_)
            | Self::Length(..)
            | Self::Percentage(_)
            | Self::ColorValue(_) => None,
        }
    }

    /// Value and unit, if this parameter can position a color stop.
    #[inline]
    pub fn stop_length(&self) -> Option<(f32, StopUnit)> {
        match *self {
            Self::Length(value, unit) => Some((value, StopUnit::Length(unit))),
            Self::Percentage(value) => Some((value, StopUnit::Percentage)),
            Self::Keyword(_) | Self::Degrees(_) | Self::Radians(_) | Self::ColorValue(_) => None,
        }
    }
}

impl From<Angle> for RawParameter {
    fn from(angle: Angle) -> Self {
        match angle {
            Angle::Degrees(degrees) => Self::Degrees(degrees),
            Angle::Radians(radians) => Self::Radians(radians),
        }
    }
}

/// Parse one component value, trying the most specific grammar first.
///
/// A bare `0` is a length, so lengths are tried before identifiers and colors.
fn parse_parameter(input: &mut Parser<'_, '_>) -> Option<RawParameter> {
    if let Ok(angle) = input.try_parse(parse_angle) {
        return Some(angle.into());
    }
    if let Ok(length) = input.try_parse(parse_length) {
        return Some(RawParameter::Length(length.value, length.unit));
    }
    if let Ok(percentage) = input.try_parse(parse_percentage) {
        return Some(RawParameter::Percentage(percentage.0 * 100.0));
    }
    if let Ok(Ident(name)) = input.try_parse(parse_ident) {
        return Some(RawParameter::Keyword(name));
    }
    let text = input.try_parse(parse_color_text).ok()?;
    css_color::parse_color(text).map(RawParameter::ColorValue)
}

/// Parse the contents of the function block. Commas are separators only;
/// `to right` and `red 10%` flatten into consecutive parameters.
fn parse_parameter_list<'i>(
    input: &mut Parser<'i, '_>,
) -> Result<Vec<RawParameter>, CssParseError<'i, GradientParseError>> {
    let mut params = Vec::new();
    while !input.is_exhausted() {
        if input.try_parse(|nested| nested.expect_comma()).is_ok() {
            continue;
        }
        let Some(param) = parse_parameter(input) else {
            return Err(input.new_custom_error(GradientParseError::UnexpectedToken));
        };
        params.push(param);
    }
    Ok(params)
}

/// Tokenize `linear-gradient(...)` source text into its argument list.
///
/// # Errors
/// Returns `GradientParseError::NotLinearGradient` when the text is some other
/// value, and `GradientParseError::UnexpectedToken` when an argument cannot be
/// classified or trailing input follows the function.
pub fn parse_linear_gradient(text: &str) -> Result<Vec<RawParameter>, GradientParseError> {
    let mut parser_input = ParserInput::new(text);
    let mut input = Parser::new(&mut parser_input);
    input
        .expect_function_matching("linear-gradient")
        .map_err(|_| GradientParseError::NotLinearGradient)?;
    let params = input
        .parse_nested_block(parse_parameter_list)
        .map_err(|error| match error.kind {
            ParseErrorKind::Custom(inner) => inner,
            ParseErrorKind::Basic(_) => GradientParseError::UnexpectedToken,
        })?;
    input
        .expect_exhausted()
        .map_err(|_| GradientParseError::UnexpectedToken)?;
    Ok(params)
}
