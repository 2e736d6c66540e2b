//! Type-information declarations
//!
//! A declaration states how a polymorphic value carries its type identifier:
//! which identifier kind, where it is placed, and what fallback applies when
//! the identifier is missing on decode. Declarations attach to types or to
//! properties via the side-table in [`crate::registry`].

pub mod parser;
pub mod schema;
pub mod store;

pub use parser::{parse_declarations, parse_declarations_str, to_toml};
pub use schema::{DeclarationsFile, TypeInfoEntry};
pub use store::DeclarationStore;

use serde::{Deserialize, Serialize};

use crate::types::{DefaultImpl, Inclusion, TypeIdKind};

/// A single type-information declaration.
///
/// Field defaults mirror the wire contract: `include` defaults to
/// [`Inclusion::Property`], `property` to empty (derive from `kind`),
/// `default_impl` to [`DefaultImpl::NoDefault`], and both flags to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeInfo {
    /// Kind of type identifier to embed.
    pub kind: TypeIdKind,

    /// Placement of the identifier relative to the encoded value.
    #[serde(default)]
    pub include: Inclusion,

    /// Literal property name for the identifier. Empty means "derive from
    /// `kind`"; if the kind has no default either, the naming convention is
    /// left to the consuming engine.
    #[serde(default)]
    pub property: String,

    /// Decode-side fallback when the identifier is missing or unmappable.
    /// Has no effect on encoding.
    #[serde(default)]
    pub default_impl: DefaultImpl,

    /// Whether the identifier is also passed through to the decoded value's
    /// own fields instead of being consumed by the engine. No effect on
    /// encoding.
    #[serde(default)]
    pub visible: bool,

    /// Permits (but does not require) omitting the identifier when the
    /// encoded value's type equals the declared `default_impl` type.
    #[serde(default)]
    pub skip_writing_default: bool,
}

impl TypeInfo {
    /// Create a declaration for the given identifier kind with all other
    /// fields at their defaults.
    pub fn new(kind: TypeIdKind) -> Self {
        TypeInfo {
            kind,
            include: Inclusion::default(),
            property: String::new(),
            default_impl: DefaultImpl::default(),
            visible: false,
            skip_writing_default: false,
        }
    }

    pub fn with_include(mut self, include: Inclusion) -> Self {
        self.include = include;
        self
    }

    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = property.into();
        self
    }

    pub fn with_default_impl(mut self, default_impl: DefaultImpl) -> Self {
        self.default_impl = default_impl;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_skip_writing_default(mut self, skip: bool) -> Self {
        self.skip_writing_default = skip;
        self
    }

    /// Effective property name for the identifier: the explicit `property`
    /// when non-empty, else the kind's default. `None` means the consuming
    /// engine must apply its own convention.
    pub fn effective_property_name(&self) -> Option<&str> {
        if !self.property.is_empty() {
            return Some(self.property.as_str());
        }
        self.kind.default_property_name()
    }

    /// Validate the declaration.
    pub fn validate(&self) -> anyhow::Result<()> {
        if let DefaultImpl::Type(name) = &self.default_impl
            && name.is_empty()
        {
            anyhow::bail!("Default implementation type name must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_documented_defaults() {
        let info = TypeInfo::new(TypeIdKind::Name);
        assert_eq!(info.include, Inclusion::Property);
        assert_eq!(info.property, "");
        assert_eq!(info.default_impl, DefaultImpl::NoDefault);
        assert!(!info.visible);
        assert!(!info.skip_writing_default);
    }

    #[test]
    fn test_effective_property_name_explicit_wins() {
        let info = TypeInfo::new(TypeIdKind::Name).with_property("shape-kind");
        assert_eq!(info.effective_property_name(), Some("shape-kind"));
    }

    #[test]
    fn test_effective_property_name_derived_from_kind() {
        assert_eq!(
            TypeInfo::new(TypeIdKind::Name).effective_property_name(),
            Some("@type")
        );
        assert_eq!(
            TypeInfo::new(TypeIdKind::Class).effective_property_name(),
            Some("@class")
        );
        assert_eq!(
            TypeInfo::new(TypeIdKind::MinimalClass).effective_property_name(),
            Some("@c")
        );
    }

    #[test]
    fn test_effective_property_name_none_for_underived_kinds() {
        assert_eq!(
            TypeInfo::new(TypeIdKind::None).effective_property_name(),
            None
        );
        assert_eq!(
            TypeInfo::new(TypeIdKind::Custom).effective_property_name(),
            None
        );
    }

    #[test]
    fn test_validate_rejects_empty_default_impl_name() {
        let info =
            TypeInfo::new(TypeIdKind::Name).with_default_impl(DefaultImpl::Type(String::new()));
        assert!(info.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_inert_skip_writing_default() {
        // skip_writing_default without a concrete default can never fire,
        // but the declaration itself is legal.
        let info = TypeInfo::new(TypeIdKind::Name).with_skip_writing_default(true);
        assert!(info.validate().is_ok());
    }
}
