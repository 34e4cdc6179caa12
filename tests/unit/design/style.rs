use super::*;

#[test]
fn module_style_names_roundtrip() {
    for style in ModuleStyle::ALL {
        assert_eq!(ModuleStyle::parse(style.name()), Some(style));
        let json = serde_json::to_string(&style).unwrap();
        let back: ModuleStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, style);
    }
}

#[test]
fn module_style_aliases_and_fallback() {
    assert_eq!(ModuleStyle::parse("Dots"), Some(ModuleStyle::Circle));
    assert_eq!(ModuleStyle::parse("rounded-square"), Some(ModuleStyle::Rounded));
    assert_eq!(ModuleStyle::parse("liquid"), Some(ModuleStyle::Pond));
    assert_eq!(ModuleStyle::parse("sparkles"), None);

    let s: ModuleStyle = serde_json::from_str("\"sparkles\"").unwrap();
    assert_eq!(s, ModuleStyle::Square);
}

#[test]
fn finder_style_and_mode_fallbacks() {
    let s: FinderStyle = serde_json::from_str("\"circle\"").unwrap();
    assert_eq!(s, FinderStyle::Circle);
    let s: FinderStyle = serde_json::from_str("\"star\"").unwrap();
    assert_eq!(s, FinderStyle::Square);

    let m: FinderMode = serde_json::from_str("\"SOLID\"").unwrap();
    assert_eq!(m, FinderMode::Solid);
    let m: FinderMode = serde_json::from_str("\"hollow\"").unwrap();
    assert_eq!(m, FinderMode::Pattern);
}
