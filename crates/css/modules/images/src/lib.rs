//! CSS Images Module Level 3 — Gradients.
//! Spec: <https://www.w3.org/TR/css-images-3/>
//!
//! Resolves `linear-gradient()` arguments into a compass angle and absolutely
//! positioned color stops for the paint backend.

#![forbid(unsafe_code)]

// Spec: §3 — Gradients (linear subset)
#[path = "3_gradients/mod.rs"]
mod chapter3;

mod background;
mod error;
mod parameters;
mod policy;
mod resolvers;

pub use background::resolve_background_image;
pub use chapter3::{
    ColorStop, GradientSpec, SideKeyword, Stop, fixup_stop_positions, gather_stops,
    normalize_angle, resolve_angle, resolve_linear_gradient, resolve_linear_gradient_with_policy,
    stops_start_index,
};
pub use error::{GradientError, GradientParseError};
pub use parameters::{RawParameter, parse_linear_gradient};
pub use policy::{AnglePolicy, GradientPolicy, UnknownColorPolicy};
pub use resolvers::{ColorResolver, CssColorResolver, LengthContext, LengthResolver, StopUnit};
