//! §3.5 Gradient Color-Stops — gathering `<color> [<length-percentage>]?` pairs.
//! Spec: <https://www.w3.org/TR/css-images-3/#color-stop-syntax>

use crate::error::GradientError;
use crate::parameters::RawParameter;
use crate::policy::{GradientPolicy, UnknownColorPolicy};
use crate::resolvers::{ColorResolver, LengthResolver};
use css_values_units::Color;
use log::warn;

/// A color stop anchored at an absolute position along the gradient line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub color: Color,
    /// Position in absolute axis units (px).
    pub position: f32,
}

/// A gathered color stop, before positions are fixed up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Stop {
    /// Declared without a position; placed by interpolation.
    Pending(Color),
    /// Declared with a position, already resolved to absolute units.
    Resolved(ColorStop),
}

impl Stop {
    /// The stop's position, if it has one.
    #[inline]
    pub const fn position(&self) -> Option<f32> {
        match *self {
            Self::Pending(_) => None,
            Self::Resolved(stop) => Some(stop.position),
        }
    }
}

/// Resolve the color of the stop declared at `params[index]`.
fn resolve_stop_color(
    param: &RawParameter,
    index: usize,
    colors: &impl ColorResolver,
    policy: GradientPolicy,
) -> Result<Color, GradientError> {
    match param {
        RawParameter::ColorValue(color) => Ok(*color),
        RawParameter::Keyword(name) => {
            if let Some(color) = colors.resolve_color(name) {
                return Ok(color);
            }
            match policy.unknown_color {
                UnknownColorPolicy::Reject => Err(GradientError::UnknownColor(name.clone())),
                UnknownColorPolicy::Fallback(fallback) => {
                    warn!(
                        target: "css::images::linear_gradient",
                        "unknown stop color `{name}` at argument {index}; using {fallback:?}"
                    );
                    Ok(fallback)
                }
            }
        }
        RawParameter::Degrees(_)
        | RawParameter::Radians(_)
        | RawParameter::Length(..)
        | RawParameter::Percentage(_) => Err(GradientError::InvalidStopSyntax { index }),
    }
}

/// Walk `params[stops_start..]` and produce one `Stop` per declared color.
///
/// A length or percentage directly after a color positions that stop and is
/// consumed with it. Percentages resolve against `box_width`.
///
/// # Errors
/// - `GradientError::InvalidStopSyntax` when a non-color appears where a color
///   is expected, or a position cannot be evaluated by `lengths`.
/// - `GradientError::UnknownColor` when a color keyword is unknown and the
///   policy rejects it.
pub fn gather_stops(
    params: &[RawParameter],
    stops_start: usize,
    box_width: f32,
    colors: &impl ColorResolver,
    lengths: &impl LengthResolver,
    policy: GradientPolicy,
) -> Result<Vec<Stop>, GradientError> {
    let mut stops = Vec::with_capacity(params.len().saturating_sub(stops_start));
    let mut cursor = stops_start;
    while let Some(param) = params.get(cursor) {
        let color = resolve_stop_color(param, cursor, colors, policy)?;
        let declared_length = params.get(cursor + 1).and_then(RawParameter::stop_length);
        if let Some((value, unit)) = declared_length {
            let position = lengths
                .resolve_length(value, unit, box_width)
                .ok_or(GradientError::InvalidStopSyntax { index: cursor + 1 })?;
            stops.push(Stop::Resolved(ColorStop { color, position }));
            cursor += 2;
        } else {
            stops.push(Stop::Pending(color));
            cursor += 1;
        }
    }
    Ok(stops)
}
