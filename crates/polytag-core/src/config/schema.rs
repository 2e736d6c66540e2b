//! Declaration file schema
//!
//! Defines the structure of a declarations TOML document:
//! - `[types."<TypeName>"]` — declarations attached to a type
//! - `[properties."<TypeName>.<property>"]` — declarations attached to a property

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::{DefaultImpl, Inclusion, TypeIdKind};

use super::TypeInfo;

/// Root structure of a declarations file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DeclarationsFile {
    /// Type-level declarations, keyed by type name.
    #[serde(default)]
    pub types: HashMap<String, TypeInfoEntry>,

    /// Property-level declarations, keyed by `"TypeName.property"`.
    #[serde(default)]
    pub properties: HashMap<String, TypeInfoEntry>,
}

/// Type-information declaration entry (inline config for TOML).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeInfoEntry {
    /// Identifier kind: none, class, minimal-class, name, custom
    pub r#use: String,

    /// Placement: property, wrapper-object, wrapper-array,
    /// external-property, existing-property (defaults to property)
    #[serde(default = "default_include")]
    pub include: String,

    /// Literal property name for the identifier (empty = derive from `use`)
    #[serde(default)]
    pub property: String,

    /// Decode fallback: omitted = no default, the literal "null" = decode to
    /// null, anything else = concrete type name. A type actually named
    /// "null" cannot be declared as a default implementation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_impl: Option<String>,

    /// Pass the identifier through to the decoded value's own fields
    #[serde(default)]
    pub visible: bool,

    /// Permit omitting the identifier when the value's type equals the
    /// default implementation
    #[serde(default)]
    pub skip_writing_default: bool,
}

fn default_include() -> String {
    "property".to_string()
}

impl TryFrom<TypeInfoEntry> for TypeInfo {
    type Error = anyhow::Error;

    fn try_from(entry: TypeInfoEntry) -> Result<Self, Self::Error> {
        let kind = TypeIdKind::try_from(entry.r#use.as_str())?;
        let include = Inclusion::try_from(entry.include.as_str())?;

        let default_impl = match entry.default_impl.as_deref() {
            None | Some("") => DefaultImpl::NoDefault,
            Some("null") => DefaultImpl::AsNull,
            Some(name) => DefaultImpl::Type(name.to_string()),
        };

        let info = TypeInfo {
            kind,
            include,
            property: entry.property,
            default_impl,
            visible: entry.visible,
            skip_writing_default: entry.skip_writing_default,
        };
        info.validate()?;
        Ok(info)
    }
}

/// Split a property key of the form `"TypeName.property"` into its parts.
/// The last dot separates the property so dotted type names stay intact.
pub fn split_property_key(key: &str) -> anyhow::Result<(&str, &str)> {
    match key.rsplit_once('.') {
        Some((type_name, property)) if !type_name.is_empty() && !property.is_empty() => {
            Ok((type_name, property))
        }
        _ => anyhow::bail!(
            "Invalid property key: '{}'. Expected \"TypeName.property\"",
            key
        ),
    }
}

impl DeclarationsFile {
    /// Create a new empty declarations file
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate every entry in the file
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, entry) in &self.types {
            if name.is_empty() {
                anyhow::bail!("Type declaration with empty type name");
            }
            let _: TypeInfo = entry
                .clone()
                .try_into()
                .with_context(|| format!("Invalid type declaration: '{}'", name))?;
        }

        for (key, entry) in &self.properties {
            split_property_key(key)
                .with_context(|| format!("Invalid property declaration: '{}'", key))?;
            let _: TypeInfo = entry
                .clone()
                .try_into()
                .with_context(|| format!("Invalid property declaration: '{}'", key))?;
        }

        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.properties.is_empty()
    }
}
