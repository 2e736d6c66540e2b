//! Core enumerations shared by the declaration and resolution layers.

use serde::{Deserialize, Serialize};

/// Kind of type identifier embedded in encoded output for polymorphic values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeIdKind {
    /// No explicit type metadata; typing is purely contextual.
    None,
    /// Fully-qualified type name as the identifier.
    Class,
    /// Type name with minimal path relative to the declared supertype,
    /// marked by a leading dot when partial.
    MinimalClass,
    /// Logical type name, resolved to a concrete type separately.
    Name,
    /// Engine-defined custom identifier handling; the semantics of the
    /// remaining declaration fields are up to that handler.
    Custom,
}

impl TypeIdKind {
    /// Default property name used for the identifier when the declaration
    /// does not name one. Fixed mapping; `None` and `Custom` carry no default.
    pub fn default_property_name(&self) -> Option<&'static str> {
        match self {
            TypeIdKind::None | TypeIdKind::Custom => None,
            TypeIdKind::Class => Some("@class"),
            TypeIdKind::MinimalClass => Some("@c"),
            TypeIdKind::Name => Some("@type"),
        }
    }
}

impl TryFrom<&str> for TypeIdKind {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "none" => Ok(TypeIdKind::None),
            "class" => Ok(TypeIdKind::Class),
            "minimal-class" => Ok(TypeIdKind::MinimalClass),
            "name" => Ok(TypeIdKind::Name),
            "custom" => Ok(TypeIdKind::Custom),
            _ => anyhow::bail!(
                "Invalid type id kind: '{}'. Valid values: none, class, minimal-class, name, custom",
                value
            ),
        }
    }
}

/// Where the type identifier is placed relative to the encoded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Inclusion {
    /// Identifier written as an extra meta-property alongside the value's
    /// own properties (default).
    #[default]
    Property,
    /// Value nested in a single-entry object whose key is the identifier.
    WrapperObject,
    /// Two-element array: identifier first, value second.
    WrapperArray,
    /// Identifier written as a sibling of the value's container, one level
    /// up. Only meaningful for property attachments; at type level the
    /// resolver degrades this to `Property`.
    ExternalProperty,
    /// Identifier carried by a regular property the value already writes;
    /// the engine emits nothing extra and trusts that property on decode.
    ExistingProperty,
}

impl TryFrom<&str> for Inclusion {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "property" => Ok(Inclusion::Property),
            "wrapper-object" => Ok(Inclusion::WrapperObject),
            "wrapper-array" => Ok(Inclusion::WrapperArray),
            "external-property" => Ok(Inclusion::ExternalProperty),
            "existing-property" => Ok(Inclusion::ExistingProperty),
            _ => anyhow::bail!(
                "Invalid inclusion: '{}'. Valid values: property, wrapper-object, wrapper-array, external-property, existing-property",
                value
            ),
        }
    }
}

/// Where a declaration is attached in the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Attachment {
    /// Attached to a type declaration.
    Type,
    /// Attached to a property (field/accessor/parameter); more specific,
    /// takes precedence over a type attachment for the same value.
    Property,
}

/// Fallback behavior when a type identifier is missing or cannot be mapped
/// during decoding. The three states are distinct: no fallback at all, an
/// explicit map-to-null, and a concrete substitute type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DefaultImpl {
    /// No default implementation; an unmappable identifier is a decode error.
    #[default]
    NoDefault,
    /// Unmappable or missing identifiers decode to an absent/null value.
    AsNull,
    /// Use this concrete type name.
    Type(String),
}

impl DefaultImpl {
    /// Concrete substitute type name, if one is declared.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            DefaultImpl::Type(name) => Some(name.as_str()),
            _ => None,
        }
    }
}
