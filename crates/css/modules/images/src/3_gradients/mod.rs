//! §3 Gradients — `linear-gradient()` resolution.
//! Spec: <https://www.w3.org/TR/css-images-3/#gradients>
//!
//! Resolution runs three pure passes over the argument list: the direction
//! decides where the stop list begins, the stops are gathered with any
//! declared positions, then pending stops are fixed up.

mod part_3_1_linear_gradients;
mod part_3_5_3_color_stop_fixup;
mod part_3_5_color_stops;

pub use part_3_1_linear_gradients::{
    SideKeyword, normalize_angle, resolve_angle, stops_start_index,
};
pub use part_3_5_3_color_stop_fixup::fixup_stop_positions;
pub use part_3_5_color_stops::{ColorStop, Stop, gather_stops};

use crate::error::GradientError;
use crate::parameters::RawParameter;
use crate::policy::GradientPolicy;
use crate::resolvers::{ColorResolver, LengthResolver, StopUnit};
use log::debug;

/// Percentage value of the far end of the gradient line.
const FULL_PERCENTAGE: f32 = 100.0;

/// A resolved linear gradient, ready for painting.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientSpec {
    /// Compass angle in degrees, `0 <= angle < 360`.
    pub angle: f32,
    /// Stops in declaration order; positions are not necessarily increasing.
    pub stops: Vec<ColorStop>,
}

/// Resolve `linear-gradient()` arguments with the default `GradientPolicy`.
///
/// # Errors
/// See `resolve_linear_gradient_with_policy`.
pub fn resolve_linear_gradient(
    params: &[RawParameter],
    box_width: f32,
    colors: &impl ColorResolver,
    lengths: &impl LengthResolver,
) -> Result<GradientSpec, GradientError> {
    resolve_linear_gradient_with_policy(params, box_width, colors, lengths, GradientPolicy::default())
}

/// Resolve `linear-gradient()` arguments into an angle and absolutely
/// positioned color stops. `box_width` is the percentage basis.
///
/// A single stop resolves to position 0.
///
/// # Errors
/// - `GradientError::InsufficientStops` when no color stop is declared.
/// - `GradientError::UnsupportedAngleSyntax` under a strict angle policy.
/// - `GradientError::InvalidStopSyntax` / `GradientError::UnknownColor` for
///   malformed stops.
/// - `GradientError::UnresolvedGradientLength` when `lengths` cannot evaluate
///   the 100% position.
/// - `GradientError::DegenerateGradientRange` if interpolation cannot divide
///   the range.
pub fn resolve_linear_gradient_with_policy(
    params: &[RawParameter],
    box_width: f32,
    colors: &impl ColorResolver,
    lengths: &impl LengthResolver,
    policy: GradientPolicy,
) -> Result<GradientSpec, GradientError> {
    if params.is_empty() {
        return Err(GradientError::InsufficientStops);
    }
    let stops_start = stops_start_index(params, colors);
    let angle = resolve_angle(params, stops_start, policy)?;
    let gathered = gather_stops(params, stops_start, box_width, colors, lengths, policy)?;
    if gathered.is_empty() {
        return Err(GradientError::InsufficientStops);
    }
    let full_length = lengths
        .resolve_length(FULL_PERCENTAGE, StopUnit::Percentage, box_width)
        .ok_or(GradientError::UnresolvedGradientLength)?;
    let stops = fixup_stop_positions(&gathered, full_length)?;
    debug!(
        target: "css::images::linear_gradient",
        "[GRADIENT] params={} angle={angle:.3} stops={} full_length={full_length:.3}",
        params.len(),
        stops.len()
    );
    Ok(GradientSpec { angle, stops })
}
