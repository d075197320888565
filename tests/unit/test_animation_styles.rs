//! Unit tests for the per-animation style grammar

use hyprmotion::{
    config::{parse, ParseErrorKind},
    models::{AnimationGroup, AnimationName, BaseStyle, Percentage, SlideDirection, Style},
};

fn style_of(line: &str) -> Option<Style> {
    parse(line).unwrap().animations[0].style().copied()
}

fn error_of(line: &str) -> ParseErrorKind {
    parse(line).unwrap_err().kind
}

#[test]
fn test_popin_percentage_bounds() {
    assert_eq!(
        style_of("animation = windows, 1, 5, default, popin 0%"),
        Some(Style::Popin(Percentage::new(0).unwrap()))
    );
    assert_eq!(
        style_of("animation = windows, 1, 5, default, popin 100%"),
        Some(Style::Popin(Percentage::new(100).unwrap()))
    );

    for bad in ["popin 101%", "popin -5%", "popin 50", "popin 5.5%", "popin %"] {
        let line = format!("animation = windows, 1, 5, default, {}", bad);
        assert!(
            matches!(
                error_of(&line),
                ParseErrorKind::InvalidPercentage { style: BaseStyle::Popin, .. }
            ),
            "expected percentage error for {}",
            bad
        );
    }
}

#[test]
fn test_slide_directions() {
    for (word, direction) in [
        ("left", SlideDirection::Left),
        ("right", SlideDirection::Right),
        ("top", SlideDirection::Top),
        ("bottom", SlideDirection::Bottom),
    ] {
        let line = format!("animation = layersIn, 1, 5, default, slide {}", word);
        assert_eq!(style_of(&line), Some(Style::Slide(direction)));
    }

    assert_eq!(
        error_of("animation = windows, 1, 5, default, slide Left"),
        ParseErrorKind::InvalidSlideDirection("Left".to_string())
    );
}

#[test]
fn test_slidefade_family_percentages() {
    assert_eq!(
        style_of("animation = workspaces, 1, 6, default, slidefade 20%")
            .map(|style| style.to_string()),
        Some("slidefade 20%".to_string())
    );
    assert_eq!(
        style_of("animation = specialWorkspaceOut, 1, 6, default, slidefadevert 100%")
            .map(|style| style.to_string()),
        Some("slidefadevert 100%".to_string())
    );
    assert!(matches!(
        error_of("animation = workspacesIn, 1, 6, default, slidefadevert 20"),
        ParseErrorKind::InvalidPercentage { style: BaseStyle::SlideFadeVert, .. }
    ));
}

#[test]
fn test_bare_styles() {
    assert_eq!(
        style_of("animation = windowsOut, 1, 5, default, gnomed"),
        Some(Style::Bare(BaseStyle::Gnomed))
    );
    assert_eq!(
        style_of("animation = workspaces, 1, 5, default, slidevert"),
        Some(Style::Bare(BaseStyle::SlideVert))
    );
    assert_eq!(
        style_of("animation = borderangle, 1, 50, default, once"),
        Some(Style::Bare(BaseStyle::Once))
    );
    assert_eq!(
        style_of("animation = windows, 1, 5, default, popin"),
        Some(Style::Bare(BaseStyle::Popin))
    );
}

#[test]
fn test_parameters_on_bare_only_styles() {
    assert_eq!(
        error_of("animation = workspaces, 1, 5, default, slidevert 20%"),
        ParseErrorKind::StyleDoesNotAcceptParameter(BaseStyle::SlideVert)
    );
    assert_eq!(
        error_of("animation = borderangle, 1, 5, default, loop forever"),
        ParseErrorKind::StyleDoesNotAcceptParameter(BaseStyle::Loop)
    );
}

#[test]
fn test_style_outside_group_is_rejected() {
    let cases = [
        ("windows", "fade"),
        ("layers", "gnomed"),
        ("workspaces", "popin"),
        ("borderangle", "slide"),
        ("fadeIn", "slide"),
        ("border", "once"),
        ("windows", "wobble"),
    ];

    for (animation, style) in cases {
        let line = format!("animation = {}, 1, 5, default, {}", animation, style);
        assert_eq!(
            error_of(&line),
            ParseErrorKind::InvalidStyle {
                animation: animation.parse().unwrap(),
                style: style.to_string(),
            }
        );
    }
}

#[test]
fn test_style_is_checked_before_parameter() {
    // `fade` is not a window style, so its parameter is never looked at
    assert_eq!(
        error_of("animation = windows, 1, 5, default, fade 20%"),
        ParseErrorKind::InvalidStyle {
            animation: AnimationName::Windows,
            style: "fade".to_string(),
        }
    );
}

#[test]
fn test_every_allowed_style_parses_bare() {
    for group in AnimationGroup::ALL {
        for name in group.members() {
            for style in name.allowed_styles() {
                let line = format!("animation = {}, 1, 5, default, {}", name, style);
                assert_eq!(style_of(&line), Some(Style::Bare(*style)), "{}", line);
            }
        }
    }
}
