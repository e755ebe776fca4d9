//! CSS Color Module Level 4 — Color spaces, color values, and opacity.
//! Spec: <https://www.w3.org/TR/css-color-4/>

use css_values_units::Color;
use csscolorparser::Color as ParsedColor;

/// 8-bit RGBA channels in `(red, green, blue, alpha)` order.
pub type Rgba8Tuple = (u8, u8, u8, u8);

/// Parse a CSS <color> into 8-bit RGBA channels.
///
/// Supports named colors, hex forms (`#rgb`/`#rgba`/`#rrggbb`/`#rrggbbaa`),
/// and functional notations like `rgb()/rgba()/hsl()`.
///
/// Spec: <https://www.w3.org/TR/css-color-4/#typedef-color>
/// Spec: <https://www.w3.org/TR/css-color-4/#legacy-color-values>
#[inline]
pub fn parse_css_color(input: &str) -> Option<Rgba8Tuple> {
    let parsed: ParsedColor = input.trim().parse().ok()?;
    let [red, green, blue, alpha] = parsed.to_rgba8();
    Some((red, green, blue, alpha))
}

/// Parse a CSS <color> into the engine's `Color` value type.
#[inline]
pub fn parse_color(input: &str) -> Option<Color> {
    parse_css_color(input).map(Color::from)
}
