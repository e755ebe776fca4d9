//! §3.1 Linear Gradients — gradient line direction.
//! Spec: <https://www.w3.org/TR/css-images-3/#linear-gradient-syntax>

use crate::error::GradientError;
use crate::parameters::RawParameter;
use crate::policy::{AnglePolicy, GradientPolicy};
use crate::resolvers::ColorResolver;
use log::trace;

/// Keyword introducing a side-or-corner direction (`to top left`).
const TO_KEYWORD: &str = "to";
/// Degrees in a full turn; resolved angles live in `[0, FULL_TURN)`.
const FULL_TURN: f32 = 360.0;

/// A side keyword allowed after `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SideKeyword {
    Top,
    Bottom,
    Left,
    Right,
}

impl SideKeyword {
    /// Recognize a (lowercase) side keyword.
    pub fn from_keyword(text: &str) -> Option<Self> {
        match text {
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    /// Membership bit used by `SideSet`.
    const fn bit(self) -> u8 {
        match self {
            Self::Top => 0b0001,
            Self::Bottom => 0b0010,
            Self::Left => 0b0100,
            Self::Right => 0b1000,
        }
    }
}

/// Unordered set of side keywords; `to left top` and `to top left` are equal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct SideSet(u8);

impl SideSet {
    const fn of(first: SideKeyword, second: Option<SideKeyword>) -> Self {
        match second {
            Some(side) => Self(first.bit() | side.bit()),
            None => Self(first.bit()),
        }
    }

    fn insert(&mut self, side: SideKeyword) {
        self.0 |= side.bit();
    }

    const fn contains_all(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

/// Side/corner combinations and their compass angles, checked in order.
///
/// Any set matching none of the rows resolves to 0, so `to top`, `to left`
/// and `to right` all point up. That mirrors long-standing renderer output and
/// is kept for compatibility.
const DIRECTION_ANGLES: [(SideSet, f32); 5] = [
    (SideSet::of(SideKeyword::Top, Some(SideKeyword::Left)), 315.0),
    (SideSet::of(SideKeyword::Top, Some(SideKeyword::Right)), 45.0),
    (SideSet::of(SideKeyword::Bottom, Some(SideKeyword::Left)), 225.0),
    (SideSet::of(SideKeyword::Bottom, Some(SideKeyword::Right)), 135.0),
    (SideSet::of(SideKeyword::Bottom, None), 180.0),
];

/// True when the first parameter is the `to` keyword.
fn starts_with_direction(params: &[RawParameter]) -> bool {
    params
        .first()
        .and_then(RawParameter::keyword)
        .is_some_and(|keyword| keyword == TO_KEYWORD)
}

/// Index of the first parameter belonging to the color-stop list.
///
/// - `to <side>...`: the first parameter after the run of side keywords.
/// - a leading color (a color value, or a keyword `colors` resolves): 0, since
///   the direction was omitted.
/// - anything else (an angle, or an unrecognized keyword/length/percentage): 1.
pub fn stops_start_index(params: &[RawParameter], colors: &impl ColorResolver) -> usize {
    if starts_with_direction(params) {
        let side_count = params
            .iter()
            .skip(1)
            .take_while(|param| param.keyword().and_then(SideKeyword::from_keyword).is_some())
            .count();
        return 1 + side_count;
    }
    match params.first() {
        None | Some(RawParameter::ColorValue(_)) => 0,
        Some(RawParameter::Keyword(name)) if colors.resolve_color(name).is_some() => 0,
        Some(RawParameter::Keyword(_)) => 1,
        Some(
            RawParameter::Degrees(_)
            | RawParameter::Radians(_)
            | RawParameter::Length(..)
            | RawParameter::Percentage(_),
        ) => 1,
    }
}

/// Map the side keywords between `to` and `stops_start` to a compass angle.
fn direction_angle(params: &[RawParameter], stops_start: usize) -> f32 {
    let mut sides = SideSet::default();
    for side in params
        .iter()
        .take(stops_start)
        .skip(1)
        .filter_map(|param| param.keyword().and_then(SideKeyword::from_keyword))
    {
        sides.insert(side);
    }
    DIRECTION_ANGLES
        .iter()
        .find(|(required, _)| sides.contains_all(*required))
        .map_or(0.0, |&(_, angle)| angle)
}

/// Fold any finite angle into `[0, 360)`. Non-finite input maps to 0.
pub fn normalize_angle(angle: f32) -> f32 {
    if !angle.is_finite() {
        return 0.0;
    }
    ((angle % FULL_TURN) + FULL_TURN) % FULL_TURN
}

/// Resolve the gradient line direction to a normalized compass angle.
///
/// `stops_start` must come from `stops_start_index` for the same parameters.
///
/// # Errors
/// Returns `GradientError::UnsupportedAngleSyntax` for a leading length,
/// percentage or non-color keyword when `policy.angle` is `AnglePolicy::Strict`.
pub fn resolve_angle(
    params: &[RawParameter],
    stops_start: usize,
    policy: GradientPolicy,
) -> Result<f32, GradientError> {
    let raw_angle = if starts_with_direction(params) {
        direction_angle(params, stops_start)
    } else {
        match params.first() {
            Some(&RawParameter::Degrees(degrees)) => degrees,
            Some(&RawParameter::Radians(radians)) => radians.to_degrees(),
            Some(RawParameter::Length(..) | RawParameter::Percentage(_))
                if policy.angle == AnglePolicy::Strict =>
            {
                return Err(GradientError::UnsupportedAngleSyntax);
            }
            // Skipped keywords are the ones the color resolver rejected.
            Some(RawParameter::Keyword(_))
                if stops_start > 0 && policy.angle == AnglePolicy::Strict =>
            {
                return Err(GradientError::UnsupportedAngleSyntax);
            }
            _ => 0.0,
        }
    };
    let angle = normalize_angle(raw_angle);
    trace!(
        target: "css::images::linear_gradient",
        "[ANGLE] raw={raw_angle:.4} normalized={angle:.4} stops_start={stops_start}"
    );
    Ok(angle)
}
