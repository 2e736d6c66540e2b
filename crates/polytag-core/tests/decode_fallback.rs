use polytag_core::config::parse_declarations_str;
use polytag_core::registry::{Decoded, MetadataRegistry, ResolveError};

fn lookup(id: &str) -> Option<String> {
    match id {
        "circle" => Some("Circle".to_string()),
        _ => None,
    }
}

fn resolve_with(default_impl_line: &str) -> polytag_core::registry::Effective {
    let toml = format!(
        r#"
[types."Shape"]
use = "name"
{default_impl_line}
"#
    );

    let file = parse_declarations_str(&toml).unwrap();
    let registry = MetadataRegistry::from_declarations(&file).unwrap();
    registry.resolve("Shape", None).unwrap()
}

#[test]
fn no_default_errors_on_missing_or_unknown_id() {
    let effective = resolve_with("");

    assert_eq!(
        effective.resolve_type_id(None, lookup).unwrap_err(),
        ResolveError::MissingTypeId
    );
    assert_eq!(
        effective.resolve_type_id(Some("hexagon"), lookup).unwrap_err(),
        ResolveError::UnmappableTypeId {
            id: "hexagon".to_string()
        }
    );
}

#[test]
fn null_sentinel_decodes_to_null() {
    let effective = resolve_with(r#"default_impl = "null""#);

    assert_eq!(effective.resolve_type_id(None, lookup).unwrap(), Decoded::Null);
    assert_eq!(
        effective.resolve_type_id(Some("hexagon"), lookup).unwrap(),
        Decoded::Null
    );
}

#[test]
fn concrete_default_substitutes_for_unknown_id() {
    let effective = resolve_with(r#"default_impl = "Blob""#);

    assert_eq!(
        effective.resolve_type_id(Some("hexagon"), lookup).unwrap(),
        Decoded::Concrete("Blob".to_string())
    );
}

#[test]
fn mappable_id_wins_over_any_default() {
    for line in ["", r#"default_impl = "null""#, r#"default_impl = "Blob""#] {
        let effective = resolve_with(line);
        assert_eq!(
            effective.resolve_type_id(Some("circle"), lookup).unwrap(),
            Decoded::Concrete("Circle".to_string())
        );
    }
}

#[test]
fn skip_writing_default_requires_matching_type() {
    let toml = r#"
[types."Shape"]
use = "name"
default_impl = "Circle"
skip_writing_default = true
"#;

    let file = parse_declarations_str(toml).unwrap();
    let registry = MetadataRegistry::from_declarations(&file).unwrap();
    let effective = registry.resolve("Shape", None).unwrap();

    assert!(!effective.should_write_type_id("Circle"));
    assert!(effective.should_write_type_id("Square"));
}
