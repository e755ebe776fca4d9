//! Error types for gradient tokenizing and resolution.

use core::fmt;
use std::error::Error;

/// Reasons a `linear-gradient()` argument list cannot be resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GradientError {
    /// The leading argument is neither a direction, an angle, nor a color
    /// (only raised under `AnglePolicy::Strict`).
    UnsupportedAngleSyntax,
    /// The argument list declares no color stops.
    InsufficientStops,
    /// Interpolation for the pending stop at `index` would divide by zero.
    DegenerateGradientRange {
        /// Index of the pending stop in the gathered stop list.
        index: usize,
    },
    /// The argument at `index` is not valid where a stop color or position is expected.
    InvalidStopSyntax {
        /// Index into the raw parameter list.
        index: usize,
    },
    /// A color keyword the color resolver does not know.
    UnknownColor(String),
    /// The length resolver could not evaluate the 100% position of the
    /// gradient line, so pending stops have no far end to anchor to.
    UnresolvedGradientLength,
}

impl fmt::Display for GradientError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedAngleSyntax => {
                write!(formatter, "unsupported gradient angle or direction syntax")
            }
            Self::InsufficientStops => write!(formatter, "gradient declares no color stops"),
            Self::DegenerateGradientRange { index } => {
                write!(formatter, "degenerate interpolation range for stop {index}")
            }
            Self::InvalidStopSyntax { index } => {
                write!(formatter, "invalid color stop syntax at argument {index}")
            }
            Self::UnknownColor(name) => write!(formatter, "unknown color `{name}`"),
            Self::UnresolvedGradientLength => {
                write!(formatter, "cannot resolve the gradient line length")
            }
        }
    }
}

impl Error for GradientError {}

/// Reasons `linear-gradient(...)` source text cannot be tokenized into parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradientParseError {
    /// The text is not a `linear-gradient()` function.
    NotLinearGradient,
    /// A component value inside the function is not a keyword, angle, length,
    /// percentage, or color.
    UnexpectedToken,
}

impl fmt::Display for GradientParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotLinearGradient => write!(formatter, "expected a linear-gradient() function"),
            Self::UnexpectedToken => write!(formatter, "unexpected token in gradient arguments"),
        }
    }
}

impl Error for GradientParseError {}
