use crate::kind::Kind;

#[test]
fn ordinary_kind_is_not_synthetic() {
    let kind = Kind::of("Database");
    assert!(!kind.is_synthetic());
    assert_eq!(kind.proxy_base(), None);
    assert_eq!(kind.name(), "Database");
}

#[test]
fn proxy_kind_exposes_its_base() {
    let kind = Kind::of("Database$$EnhancerBySomething$$7a2f");
    assert!(kind.is_synthetic());
    assert_eq!(kind.proxy_base(), Some(Kind::of("Database")));
}

#[test]
fn kind_display_uses_raw_name() {
    assert_eq!(Kind::of("Cache").to_string(), "Cache");
    assert_eq!(Kind::of("Cache$$stub").to_string(), "Cache$$stub");
}

#[test]
fn kind_serializes_as_its_raw_name() {
    let json = serde_json::to_string(&Kind::of("Database")).unwrap();
    assert_eq!(json, "\"Database\"");

    // Proxy names serialize untouched; unwrapping is the resolver's job
    let json = serde_json::to_string(&Kind::of("Database$$stub1")).unwrap();
    assert_eq!(json, "\"Database$$stub1\"");
}

#[test]
fn kind_equality_is_name_equality() {
    assert_eq!(Kind::of("A"), Kind::of("A"));
    assert_ne!(Kind::of("A"), Kind::of("B"));
    // Proxy-awareness belongs to the resolver, not to Eq
    assert_ne!(Kind::of("A"), Kind::of("A$$proxy"));
}
