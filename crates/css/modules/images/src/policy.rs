//! Resolution policy knobs for compatibility-sensitive behavior.

use css_values_units::Color;

/// What to do when the leading argument is not a direction, angle, or color
/// (for example `linear-gradient(10px, red, blue)`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnglePolicy {
    /// Skip the argument and use an angle of 0.
    #[default]
    Lenient,
    /// Fail with `GradientError::UnsupportedAngleSyntax`.
    Strict,
}

/// What to do when a color keyword cannot be resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownColorPolicy {
    /// Fail with `GradientError::UnknownColor`.
    #[default]
    Reject,
    /// Substitute the given color and log a warning.
    Fallback(Color),
}

/// Policy applied by `resolve_linear_gradient_with_policy`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GradientPolicy {
    pub angle: AnglePolicy,
    pub unknown_color: UnknownColorPolicy,
}

impl GradientPolicy {
    /// Reject every input the lenient defaults would paper over.
    pub const STRICT: Self = Self {
        angle: AnglePolicy::Strict,
        unknown_color: UnknownColorPolicy::Reject,
    };
}
