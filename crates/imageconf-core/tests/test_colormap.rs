use imageconf_core::colormap::{parse_colormap_name, ColormapRegistry, BUILTIN_COLORMAPS};

// ---------------------------------------------------------------------------
// ColormapRegistry
// ---------------------------------------------------------------------------

#[test]
fn test_builtin_order_is_preserved() {
    let registry = ColormapRegistry::builtin();
    let names: Vec<&str> = registry.names().collect();
    assert_eq!(names, BUILTIN_COLORMAPS);
    assert_eq!(names[0], "gray");
}

#[test]
fn test_resolve_returns_canonical_spelling() {
    let registry = ColormapRegistry::builtin();
    assert_eq!(registry.resolve("piyg"), Some("PiYG"));
    assert_eq!(registry.resolve("  Viridis "), Some("viridis"));
    assert_eq!(registry.resolve("parula"), None);
}

#[test]
fn test_custom_names_append_after_builtins() {
    let registry = ColormapRegistry::with_custom(vec!["sunset".to_string(), "Sunset".to_string()]);
    assert_eq!(registry.len(), BUILTIN_COLORMAPS.len() + 1);
    assert_eq!(registry.names().last(), Some("sunset"));
    assert!(registry.contains("SUNSET"));
}

#[test]
fn test_custom_cannot_shadow_builtin_spelling() {
    let registry = ColormapRegistry::with_custom(["JET"]);
    assert_eq!(registry.resolve("jet"), Some("jet"));
    assert_eq!(registry.len(), BUILTIN_COLORMAPS.len());
}

// ---------------------------------------------------------------------------
// parse_colormap_name
// ---------------------------------------------------------------------------

#[test]
fn test_parse_suffix_variants() {
    let req = parse_colormap_name("viridis_r");
    assert_eq!((req.base, req.reversed), ("viridis", true));

    let req = parse_colormap_name("red_heat");
    assert_eq!((req.base, req.reversed), ("red_heat", false));

    let req = parse_colormap_name("gray_r_r");
    assert_eq!((req.base, req.reversed), ("gray_r", true));
}
