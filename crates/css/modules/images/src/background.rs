//! `background-image: linear-gradient(...)` convenience entry point.

use crate::chapter3::{GradientSpec, resolve_linear_gradient};
use crate::parameters::parse_linear_gradient;
use crate::resolvers::{CssColorResolver, LengthContext};
use anyhow::{Context as _, Result};

/// Tokenize and resolve a `linear-gradient()` value for a box of `box_width` px,
/// using the built-in color table and `context` for relative lengths.
///
/// # Errors
/// Returns an error with context if the text cannot be tokenized or the
/// arguments cannot be resolved.
pub fn resolve_background_image(
    text: &str,
    box_width: f32,
    context: &LengthContext,
) -> Result<GradientSpec> {
    let params = parse_linear_gradient(text)
        .with_context(|| format!("tokenizing background image `{text}`"))?;
    let spec = resolve_linear_gradient(&params, box_width, &CssColorResolver, context)
        .with_context(|| format!("resolving background image `{text}` at width {box_width}px"))?;
    Ok(spec)
}
