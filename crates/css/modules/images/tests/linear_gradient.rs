#![allow(clippy::unwrap_used, reason = "tests unwrap resolver results")]

use css_images::{
    ColorResolver, CssColorResolver, GradientError, GradientPolicy, GradientSpec, LengthContext,
    LengthResolver, RawParameter, StopUnit, UnknownColorPolicy, parse_linear_gradient,
    resolve_background_image, resolve_linear_gradient, resolve_linear_gradient_with_policy,
};
use css_values_units::{Color, LengthUnit, Viewport};

const RED: Color = Color::opaque(255, 0, 0);
const BLUE: Color = Color::opaque(0, 0, 255);

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn resolve_text(text: &str, box_width: f32) -> Result<GradientSpec, GradientError> {
    let params = parse_linear_gradient(text).unwrap();
    resolve_linear_gradient(&params, box_width, &CssColorResolver, &LengthContext::default())
}

fn angle_of(text: &str) -> f32 {
    resolve_text(text, 100.0).unwrap().angle
}

fn positions(spec: &GradientSpec) -> Vec<f32> {
    spec.stops.iter().map(|stop| stop.position).collect()
}

fn assert_close(got: f32, expected: f32) {
    assert!((got - expected).abs() < 0.001, "got {got}, expected {expected}");
}

#[test]
fn keyword_directions() {
    init_logging();
    assert_close(angle_of("linear-gradient(to bottom right, red, blue)"), 135.0);
    assert_close(angle_of("linear-gradient(to top left, red, blue)"), 315.0);
    assert_close(angle_of("linear-gradient(to bottom, red, blue)"), 180.0);
    assert_close(angle_of("linear-gradient(to top, red, blue)"), 0.0);
    assert_close(angle_of("linear-gradient(to left, red, blue)"), 0.0);
    assert_close(angle_of("linear-gradient(to right, red, blue)"), 0.0);
}

#[test]
fn numeric_angles_normalize() {
    init_logging();
    assert_close(angle_of("linear-gradient(2rad, red, blue)"), 114.591_56);
    assert_close(angle_of("linear-gradient(-45deg, red, blue)"), 315.0);
    assert_close(angle_of("linear-gradient(1.25turn, red, blue)"), 90.0);
    for text in [
        "linear-gradient(-1080deg, red, blue)",
        "linear-gradient(720deg, red, blue)",
        "linear-gradient(-7rad, red, blue)",
        "linear-gradient(399grad, red, blue)",
    ] {
        let angle = angle_of(text);
        assert!((0.0..360.0).contains(&angle), "{text} -> {angle}");
    }
}

#[test]
fn two_colors_span_the_box() {
    init_logging();
    let spec = resolve_text("linear-gradient(red, blue)", 250.0).unwrap();
    assert_close(spec.angle, 0.0);
    assert_eq!(spec.stops.len(), 2);
    assert_eq!(spec.stops.first().map(|stop| stop.color), Some(RED));
    assert_eq!(spec.stops.get(1).map(|stop| stop.color), Some(BLUE));
    let resolved = positions(&spec);
    assert_close(*resolved.first().unwrap(), 0.0);
    assert_close(*resolved.get(1).unwrap(), 250.0);
}

#[test]
fn interior_stops_are_interpolated() {
    init_logging();
    let spec = resolve_text(
        "linear-gradient(to right, red, blue 10px, orange, yellow, black 100px, purple)",
        400.0,
    )
    .unwrap();
    let expected = [0.0, 10.0, 40.0, 70.0, 100.0, 400.0];
    let resolved = positions(&spec);
    assert_eq!(resolved.len(), expected.len());
    for (got, want) in resolved.into_iter().zip(expected) {
        assert_close(got, want);
    }
    let purple = spec.stops.last().unwrap();
    assert_eq!(purple.color, Color::opaque(128, 0, 128));
}

#[test]
fn percentages_and_relative_lengths_use_context() {
    init_logging();
    let context = LengthContext {
        font_size_px: 20.0,
        root_font_size_px: 10.0,
        viewport: Some(Viewport {
            width_px: 1000,
            height_px: 500,
        }),
    };
    let spec = resolve_background_image(
        "linear-gradient(45deg, red 25%, white 2em, #000 3rem, blue 10vw)",
        200.0,
        &context,
    )
    .unwrap();
    let resolved = positions(&spec);
    for (got, want) in resolved.into_iter().zip([50.0, 40.0, 30.0, 100.0]) {
        assert_close(got, want);
    }
}

#[test]
fn explicit_positions_survive_out_of_order() {
    init_logging();
    let spec = resolve_text("linear-gradient(red 80px, white, blue 20px)", 100.0).unwrap();
    let resolved = positions(&spec);
    assert_close(*resolved.first().unwrap(), 80.0);
    assert_close(*resolved.get(1).unwrap(), 50.0);
    assert_close(*resolved.get(2).unwrap(), 20.0);
}

#[test]
fn resolution_is_deterministic() {
    init_logging();
    let text = "linear-gradient(3rad, red, blue 13px, green, rgb(1, 2, 3), black 97px, white)";
    let first = resolve_text(text, 333.0).unwrap();
    let second = resolve_text(text, 333.0).unwrap();
    assert_eq!(first.angle.to_bits(), second.angle.to_bits());
    assert_eq!(first.stops.len(), second.stops.len());
    for (left, right) in first.stops.iter().zip(&second.stops) {
        assert_eq!(left.color, right.color);
        assert_eq!(left.position.to_bits(), right.position.to_bits());
    }
}

#[test]
fn single_stop_resolves_to_origin() {
    init_logging();
    for _ in 0..3 {
        let spec = resolve_text("linear-gradient(red)", 100.0).unwrap();
        assert_eq!(spec.stops.len(), 1);
        assert_eq!(spec.stops.first().map(|stop| stop.color), Some(RED));
        assert_close(spec.stops.first().unwrap().position, 0.0);
    }
}

#[test]
fn missing_stops_are_rejected() {
    init_logging();
    let context = LengthContext::default();
    assert_eq!(
        resolve_linear_gradient(&[], 100.0, &CssColorResolver, &context),
        Err(GradientError::InsufficientStops)
    );
    assert_eq!(
        resolve_text("linear-gradient(to bottom left)", 100.0),
        Err(GradientError::InsufficientStops)
    );
    assert_eq!(
        resolve_text("linear-gradient(45deg)", 100.0),
        Err(GradientError::InsufficientStops)
    );
}

#[test]
fn strict_policy_rejects_unknown_leading_tokens() {
    init_logging();
    let params = [
        RawParameter::Length(5.0, LengthUnit::Pixels),
        RawParameter::Keyword("red".to_owned()),
    ];
    let context = LengthContext::default();
    let lenient = resolve_linear_gradient(&params, 100.0, &CssColorResolver, &context).unwrap();
    assert_close(lenient.angle, 0.0);
    assert_eq!(lenient.stops.len(), 1);
    assert_eq!(
        resolve_linear_gradient_with_policy(
            &params,
            100.0,
            &CssColorResolver,
            &context,
            GradientPolicy::STRICT
        ),
        Err(GradientError::UnsupportedAngleSyntax)
    );
}

/// A resolver with a fixed palette, standing in for a style-system color table.
struct Palette;

impl ColorResolver for Palette {
    fn resolve_color(&self, name: &str) -> Option<Color> {
        match name {
            "brand" => Some(Color::opaque(10, 20, 30)),
            _ => None,
        }
    }
}

#[test]
fn custom_color_resolver_is_consulted() {
    init_logging();
    let params = parse_linear_gradient("linear-gradient(brand, #fff)").unwrap();
    let spec =
        resolve_linear_gradient(&params, 100.0, &Palette, &LengthContext::default()).unwrap();
    assert_eq!(
        spec.stops.first().map(|stop| stop.color),
        Some(Color::opaque(10, 20, 30))
    );

    let trailing = parse_linear_gradient("linear-gradient(#fff, brand)").unwrap();
    assert_eq!(
        resolve_linear_gradient(&trailing, 100.0, &CssColorResolver, &LengthContext::default()),
        Err(GradientError::UnknownColor("brand".to_owned()))
    );
}

#[test]
fn leading_non_color_keyword_is_skipped() {
    init_logging();
    let params = parse_linear_gradient("linear-gradient(left, red, blue)").unwrap();
    let context = LengthContext::default();
    let fallback = GradientPolicy {
        unknown_color: UnknownColorPolicy::Fallback(Color::TRANSPARENT),
        ..GradientPolicy::default()
    };
    for policy in [GradientPolicy::default(), fallback] {
        let spec =
            resolve_linear_gradient_with_policy(&params, 100.0, &CssColorResolver, &context, policy)
                .unwrap();
        assert_close(spec.angle, 0.0);
        assert_eq!(
            spec.stops.iter().map(|stop| stop.color).collect::<Vec<_>>(),
            [RED, BLUE]
        );
        let resolved = positions(&spec);
        assert_eq!(resolved.len(), 2);
        assert_close(*resolved.first().unwrap(), 0.0);
        assert_close(*resolved.get(1).unwrap(), 100.0);
    }
    assert_eq!(
        resolve_linear_gradient_with_policy(
            &params,
            100.0,
            &CssColorResolver,
            &context,
            GradientPolicy::STRICT
        ),
        Err(GradientError::UnsupportedAngleSyntax)
    );
}

/// Resolves absolute lengths only; percentages have no basis.
struct NoPercentages;

impl LengthResolver for NoPercentages {
    fn resolve_length(&self, value: f32, unit: StopUnit, _percentage_basis: f32) -> Option<f32> {
        match unit {
            StopUnit::Length(_) => Some(value),
            StopUnit::Percentage => None,
        }
    }
}

#[test]
fn unresolvable_line_length_is_reported() {
    init_logging();
    let params = parse_linear_gradient("linear-gradient(red 0px, blue 50px)").unwrap();
    assert_eq!(
        resolve_linear_gradient(&params, 100.0, &CssColorResolver, &NoPercentages),
        Err(GradientError::UnresolvedGradientLength)
    );
}

#[test]
fn background_errors_carry_context() {
    init_logging();
    let tokenize_error =
        resolve_background_image("radial-gradient(red, blue)", 100.0, &LengthContext::default())
            .unwrap_err();
    assert!(format!("{tokenize_error:#}").contains("tokenizing background image"));

    let resolve_error = resolve_background_image(
        "linear-gradient(red 10vw, blue)",
        100.0,
        &LengthContext::default(),
    )
    .unwrap_err();
    assert_eq!(
        resolve_error.downcast_ref::<GradientError>(),
        Some(&GradientError::InvalidStopSyntax { index: 1 })
    );
}
