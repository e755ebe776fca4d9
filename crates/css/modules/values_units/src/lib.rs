//! CSS Values and Units Module Level 3 — Value types used by gradient arguments.
//! Spec: <https://www.w3.org/TR/css-values-3/>

#![forbid(unsafe_code)]

// Per-chapter modules mirroring the CSS Values 3 table of contents.
// Each parser consumes exactly one component value and skips leading whitespace,
// so callers can combine them with `Parser::try_parse`.
pub mod chapter_3_identifiers;
pub mod chapter_5_percentages;
pub mod chapter_6_dimensions;
pub mod chapter_7_angles;
pub mod chapter_9_colors;

// Re-exports for ergonomic access from other crates.
pub use chapter_3_identifiers::{Ident, parse_ident};
pub use chapter_5_percentages::{Percentage, compute_percentage_px, parse_percentage};
pub use chapter_6_dimensions::{Length, LengthUnit, Viewport, compute_length_px, parse_length};
pub use chapter_7_angles::{Angle, parse_angle};
pub use chapter_9_colors::{Color, parse_color_text};

/// Parse error for Values & Units parsing utilities in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The next token did not match the expected grammar.
    UnexpectedToken,
}
