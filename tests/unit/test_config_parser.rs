//! Unit tests for configuration parsing
//!
//! Exercises the public parser contract: bezier declarations, animation
//! declarations, curve resolution order, comments and section handling.

use hyprmotion::{
    config::{parse, ConfigParser, ParseErrorKind},
    models::{AnimationEntry, AnimationName, Bezier, Curve},
};

#[test]
fn test_bezier_coordinates_are_kept() {
    let result = parse("bezier = wind, 0.05, 0.9, 0.1, 1.05").unwrap();

    assert_eq!(result.beziers.len(), 1);
    let bezier = &result.beziers[0];
    assert_eq!(bezier.name, "wind");
    assert_eq!((bezier.x0, bezier.y0, bezier.x1, bezier.y1), (0.05, 0.9, 0.1, 1.05));
}

#[test]
fn test_equals_and_commas_are_interchangeable() {
    let result = parse("bezier=liner,1=1,1,1").unwrap();
    assert_eq!(result.beziers[0], Bezier::new("liner", 1.0, 1.0, 1.0, 1.0).unwrap());
}

#[test]
fn test_later_bezier_declaration_wins() {
    let result = parse(
        "bezier = curve, 0, 0, 1, 1\n\
         bezier = curve, 0.2, 0.3, 0.4, 0.5\n\
         animation = windows, 1, 4, curve",
    )
    .unwrap();

    assert_eq!(result.beziers.len(), 1);
    let expected = Bezier::new("curve", 0.2, 0.3, 0.4, 0.5).unwrap();
    assert_eq!(result.beziers[0], expected);
    assert_eq!(result.animations[0].curve(), Some(&Curve::Bezier(expected)));
}

#[test]
fn test_animation_sees_bezier_as_declared_at_that_point() {
    let result = parse(
        "bezier = curve, 0, 0, 1, 1\n\
         animation = windows, 1, 4, curve\n\
         bezier = curve, 0.5, 0.5, 0.5, 0.5",
    )
    .unwrap();

    let curve = result.animations[0].curve().unwrap();
    assert_eq!(curve, &Curve::Bezier(Bezier::new("curve", 0.0, 0.0, 1.0, 1.0).unwrap()));
    assert_eq!(result.beziers[0].x0, 0.5);
}

#[test]
fn test_border_with_default_curve() {
    let result = parse("animation = border, 1, 5, default").unwrap();

    assert_eq!(
        result.animations,
        vec![AnimationEntry::enabled(AnimationName::Border, 5, Curve::Default, None)]
    );
}

#[test]
fn test_curve_must_be_declared_first() {
    let ok = parse(
        "bezier = mybezier, 0.05, 0.9, 0.1, 1.05\n\
         animation = windows, 1, 3, mybezier, slide left",
    )
    .unwrap();
    assert_eq!(
        ok.animations[0].style().map(ToString::to_string),
        Some("slide left".to_string())
    );

    let error = parse(
        "animation = windows, 1, 3, mybezier, slide left\n\
         bezier = mybezier, 0.05, 0.9, 0.1, 1.05",
    )
    .unwrap_err();
    assert_eq!(error.kind, ParseErrorKind::UnknownCurve("mybezier".to_string()));
    assert_eq!(error.line_number, 1);
}

#[test]
fn test_disabled_animation_needs_no_further_fields() {
    let result = parse("animation = windows, 0").unwrap();

    let entry = &result.animations[0];
    assert_eq!(entry.name, AnimationName::Windows);
    assert!(!entry.is_enabled());
    assert_eq!(entry.speed(), None);
    assert!(entry.curve().is_none());
    assert!(entry.style().is_none());
}

#[test]
fn test_duplicate_animations_are_all_kept() {
    let result = parse(
        "animation = fade, 1, 3, default\n\
         animation = fade, 1, 8, default\n\
         animation = fade, 0",
    )
    .unwrap();

    assert_eq!(result.animations.len(), 3);
    assert_eq!(result.animations[1].speed(), Some(8));
}

#[test]
fn test_comments_are_stripped() {
    let result = parse(
        "# Animations\n\
         bezier = a, 0, 0, 1, 1 # linear\n\
         animation = fade, 1, 3, a # uses a\n\
         # animation = windows, 1, 3, missing",
    )
    .unwrap();

    assert_eq!(result.beziers.len(), 1);
    assert_eq!(result.animations.len(), 1);
}

#[test]
fn test_escaped_comment_marker_reaches_declaration() {
    // The literal `#` stays part of the curve name, which was never declared
    let error = parse("animation = fade, 1, 3, my##curve").unwrap_err();
    assert_eq!(error.kind, ParseErrorKind::UnknownCurve("my#curve".to_string()));
    assert_eq!(error.line, "animation = fade, 1, 3, my#curve");
}

#[test]
fn test_other_sections_are_ignored() {
    let result = parse(
        "general {\n\
             animation = windows, 1, 5, undefined_curve\n\
             bezier = broken\n\
         }\n\
         animation = fade, 1, 5, default",
    )
    .unwrap();

    assert_eq!(result.beziers.len(), 0);
    assert_eq!(result.animations.len(), 1);
    assert_eq!(result.animations[0].name, AnimationName::Fade);
}

#[test]
fn test_animations_section_and_top_level_both_count() {
    let result = parse(
        "bezier = top, 0, 0, 1, 1\n\
         animations {\n\
             enabled = true\n\
             bezier = inner, 0.1, 0.2, 0.3, 0.4\n\
             animation = windows, 1, 5, top\n\
         }\n\
         animation = layers, 1, 5, inner, fade",
    )
    .unwrap();

    assert_eq!(result.beziers.len(), 2);
    assert_eq!(result.animations.len(), 2);
}

#[test]
fn test_parsing_twice_is_identical() {
    let text = "bezier = a, 0, 0, 1, 1\nanimation = windows, 1, 5, a, popin 80%";
    let parser = ConfigParser::new();

    let first = parser.parse(text).unwrap();
    let second = parser.parse(text).unwrap();
    assert_eq!(first, second);

    // A failed parse in between leaves nothing behind
    assert!(parser.parse("bezier = b, 0, 0, 1, 1\nanimation = x, 1").is_err());
    assert_eq!(parser.parse(text).unwrap(), first);
    assert!(parser.parse("animation = fade, 1, 1, b").is_err());
}

#[test]
fn test_empty_input() {
    let result = parse("").unwrap();
    assert!(result.is_empty());

    let result = parse("\n\n   \n# only comments\n").unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_windows_line_endings() {
    let result = parse("bezier = a, 0, 0, 1, 1\r\nanimation = windows, 1, 5, a\r\n").unwrap();
    assert_eq!(result.animations.len(), 1);
}
