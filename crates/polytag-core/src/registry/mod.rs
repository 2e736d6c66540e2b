//! Side-table attaching type-information declarations to modeled types
//! and properties.
//!
//! Rust has no runtime annotations, so declarations live in an explicit
//! registry keyed by type name (type attachments) and by type plus property
//! name (property attachments). Resolution rules live in [`resolver`].

pub mod resolver;

pub use resolver::{Decoded, Effective, ResolveError};

use std::collections::HashMap;

use crate::config::{DeclarationsFile, TypeInfo, schema};
use crate::types::Attachment;

/// Registry of type-information declarations.
#[derive(Debug, Clone, Default)]
pub struct MetadataRegistry {
    types: HashMap<String, TypeInfo>,
    properties: HashMap<(String, String), TypeInfo>,
}

impl MetadataRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a declaration to a type. Replaces any previous declaration
    /// for the same type.
    pub fn declare_type(&mut self, type_name: impl Into<String>, info: TypeInfo) {
        self.types.insert(type_name.into(), info);
    }

    /// Attach a declaration to a property of a type. Replaces any previous
    /// declaration for the same property.
    pub fn declare_property(
        &mut self,
        type_name: impl Into<String>,
        property: impl Into<String>,
        info: TypeInfo,
    ) {
        self.properties
            .insert((type_name.into(), property.into()), info);
    }

    pub fn type_info(&self, type_name: &str) -> Option<&TypeInfo> {
        self.types.get(type_name)
    }

    pub fn property_info(&self, type_name: &str, property: &str) -> Option<&TypeInfo> {
        self.properties
            .get(&(type_name.to_string(), property.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.properties.is_empty()
    }

    /// Resolve the effective declaration for a value.
    ///
    /// `property` names the property through which the value is reached, if
    /// any. When both a property-level and a type-level declaration exist,
    /// the property-level record wins in its entirety; fields are never
    /// merged across the two.
    pub fn resolve(&self, type_name: &str, property: Option<&str>) -> Option<Effective> {
        if let Some(prop) = property
            && let Some(info) = self.property_info(type_name, prop)
        {
            tracing::debug!(
                type_name,
                property = prop,
                "resolved property-level declaration"
            );
            return Some(Effective::new(info.clone(), Attachment::Property));
        }

        self.type_info(type_name)
            .map(|info| Effective::new(info.clone(), Attachment::Type))
    }

    /// Build a registry from a parsed declarations file.
    pub fn from_declarations(file: &DeclarationsFile) -> anyhow::Result<Self> {
        let mut registry = Self::new();

        for (name, entry) in &file.types {
            let info: TypeInfo = entry.clone().try_into()?;
            registry.declare_type(name.clone(), info);
        }

        for (key, entry) in &file.properties {
            let (type_name, property) = schema::split_property_key(key)?;
            let info: TypeInfo = entry.clone().try_into()?;
            registry.declare_property(type_name, property, info);
        }

        Ok(registry)
    }
}
