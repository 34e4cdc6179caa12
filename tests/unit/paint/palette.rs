use super::*;
use crate::foundation::error::ShieldError;
use crate::paint::gradient::GradientSpec;

fn custom(background: &str) -> CustomColors {
    CustomColors {
        background: background.to_owned(),
        foreground: "#112233".to_owned(),
        outline: None,
        finder_outer: None,
        finder_inner: Some("#ff0000".to_owned()),
        outline_width: None,
    }
}

#[test]
fn preset_colors_are_used_verbatim() {
    let p = Palette::resolve(None, "cyber", None, "g").unwrap();
    assert_eq!(p.background.as_deref(), Some("#0a0e27"));
    assert_eq!(p.foreground, Paint::Color("#00f0ff".to_owned()));
    assert_eq!(p.outline, "#ff00ff");
    assert_eq!(p.finder_outer, Paint::Color("#ff00ff".to_owned()));
    assert!(p.dark);
}

#[test]
fn unknown_preset_falls_back_to_cyber() {
    let a = Palette::resolve(None, "does-not-exist", None, "g").unwrap();
    let b = Palette::resolve(None, "cyber", None, "g").unwrap();
    assert_eq!(a, b);
}

#[test]
fn finder_colors_default_to_foreground() {
    let p = Palette::resolve(None, "classic", None, "g").unwrap();
    assert_eq!(p.finder_outer, p.foreground);
    assert_eq!(p.finder_inner, p.foreground);
}

#[test]
fn custom_colors_override_preset() {
    let p = Palette::resolve(Some(&custom("#ffffff")), "neon", None, "g").unwrap();
    assert_eq!(p.background.as_deref(), Some("#ffffff"));
    assert_eq!(p.outline, "#112233");
    assert_eq!(p.finder_outer, Paint::Color("#112233".to_owned()));
    assert_eq!(p.finder_inner, Paint::Color("#ff0000".to_owned()));
    assert_eq!(p.outline_width, DEFAULT_OUTLINE_WIDTH);
    assert!(!p.dark);
}

#[test]
fn transparent_background_disables_fill() {
    let p = Palette::resolve(Some(&custom("Transparent")), "cyber", None, "g").unwrap();
    assert!(p.is_transparent());
    assert_eq!(p.background_fill(), None);
}

#[test]
fn gradient_replaces_foreground_and_unset_finders() {
    let g = GradientSpec {
        colors: vec!["#000".to_owned(), "#fff".to_owned()],
        ..GradientSpec::default()
    };
    let p = Palette::resolve(Some(&custom("#ffffff")), "cyber", Some(&g), "qr-gradient").unwrap();
    assert_eq!(p.foreground, Paint::Gradient("qr-gradient".to_owned()));
    assert_eq!(p.foreground.fill(), "url(#qr-gradient)");
    assert_eq!(p.finder_outer, p.foreground);
    assert_eq!(p.finder_inner, Paint::Color("#ff0000".to_owned()));
}

#[test]
fn empty_gradient_is_a_config_error() {
    let g = GradientSpec::default();
    let err = Palette::resolve(None, "cyber", Some(&g), "g").unwrap_err();
    assert!(matches!(err, ShieldError::Config(_)));
}

#[test]
fn paint_fill_escapes_colors() {
    assert_eq!(Paint::Color("a\"b".to_owned()).fill(), "a&quot;b");
}
