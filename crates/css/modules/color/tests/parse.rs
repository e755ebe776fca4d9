use css_color::{parse_color, parse_css_color};
use css_values_units::Color;

#[test]
fn named_and_hex_colors() {
    assert_eq!(parse_color("red"), Some(Color::opaque(255, 0, 0)));
    assert_eq!(parse_color(" Orange "), Some(Color::opaque(255, 165, 0)));
    assert_eq!(parse_color("#00f"), Some(Color::opaque(0, 0, 255)));
    assert_eq!(parse_css_color("#11223344"), Some((0x11, 0x22, 0x33, 0x44)));
}

#[test]
fn functional_colors() {
    assert_eq!(parse_color("rgb(10, 20, 30)"), Some(Color::opaque(10, 20, 30)));
    assert_eq!(parse_color("hsl(120, 100%, 50%)"), Some(Color::opaque(0, 255, 0)));
}

#[test]
fn unknown_names_are_rejected() {
    assert_eq!(parse_color("not-a-color"), None);
    assert_eq!(parse_color(""), None);
}
