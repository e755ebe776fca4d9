//! Collaborator seams: color lookup and length computation.
//!
//! The gradient resolver never interprets color names or length units itself.
//! It asks a `ColorResolver` and a `LengthResolver`, so callers can plug in
//! their computed-style context. Default implementations backed by
//! `css_color` and `css_values_units` are provided.

use css_values_units::{
    Color, Length, LengthUnit, Percentage, Viewport, compute_length_px, compute_percentage_px,
};

/// Unit of a color-stop position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StopUnit {
    /// An absolute or font/viewport-relative length.
    Length(LengthUnit),
    /// A percentage of the gradient's percentage basis, on a 0..=100 scale.
    Percentage,
}

/// Resolves a color keyword (e.g. `red`, `transparent`) to a concrete color.
pub trait ColorResolver {
    /// Look up `name`; `None` when the name is not a known color.
    fn resolve_color(&self, name: &str) -> Option<Color>;
}

/// Converts a stop position into absolute axis units.
pub trait LengthResolver {
    /// Resolve `value` in `unit`, using `percentage_basis` for percentages.
    ///
    /// Returns `None` when the unit cannot be evaluated in this context
    /// (e.g. `vw` without a viewport).
    fn resolve_length(&self, value: f32, unit: StopUnit, percentage_basis: f32) -> Option<f32>;
}

/// Named, hex, and functional colors via `css_color`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CssColorResolver;

impl ColorResolver for CssColorResolver {
    #[inline]
    fn resolve_color(&self, name: &str) -> Option<Color> {
        css_color::parse_color(name)
    }
}

/// Font and viewport metrics needed to evaluate relative lengths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LengthContext {
    pub font_size_px: f32,
    pub root_font_size_px: f32,
    pub viewport: Option<Viewport>,
}

impl Default for LengthContext {
    fn default() -> Self {
        Self {
            font_size_px: 16.0,
            root_font_size_px: 16.0,
            viewport: None,
        }
    }
}

impl LengthResolver for LengthContext {
    fn resolve_length(&self, value: f32, unit: StopUnit, percentage_basis: f32) -> Option<f32> {
        match unit {
            StopUnit::Length(length_unit) => compute_length_px(
                Length {
                    value,
                    unit: length_unit,
                },
                self.font_size_px,
                self.root_font_size_px,
                self.viewport,
            ),
            StopUnit::Percentage => Some(compute_percentage_px(
                Percentage(value / 100.0),
                percentage_basis,
            )),
        }
    }
}
