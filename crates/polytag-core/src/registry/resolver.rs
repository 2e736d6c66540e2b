//! Resolution rules for effective declarations.
//!
//! An [`Effective`] pairs the winning declaration record with the attachment
//! it was found at, and answers the questions an encoding/decoding engine
//! asks: where does the identifier go, under what name, what gets decoded
//! when the identifier is missing, and may the identifier be omitted.

use thiserror::Error;

use crate::config::TypeInfo;
use crate::types::{Attachment, DefaultImpl, Inclusion, TypeIdKind};

/// Errors from decode-side type-id resolution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// No identifier was present and the declaration names no fallback.
    #[error("missing type id and no default implementation declared")]
    MissingTypeId,

    /// The identifier could not be mapped and the declaration names no
    /// fallback.
    #[error("unmappable type id '{id}' and no default implementation declared")]
    UnmappableTypeId { id: String },
}

/// Outcome of decode-side type-id resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// Decode as this concrete type.
    Concrete(String),
    /// Decode to an absent/null value (the declaration maps unmappable
    /// identifiers to null).
    Null,
}

/// The effective declaration for a value: the winning record plus the
/// attachment it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effective {
    info: TypeInfo,
    attachment: Attachment,
}

impl Effective {
    pub fn new(info: TypeInfo, attachment: Attachment) -> Self {
        Self { info, attachment }
    }

    pub fn info(&self) -> &TypeInfo {
        &self.info
    }

    pub fn attachment(&self) -> Attachment {
        self.attachment
    }

    /// Placement of the type identifier, with the attachment rule applied:
    /// `ExternalProperty` is only meaningful on a property attachment, so a
    /// type attachment degrades it to plain `Property`.
    pub fn inclusion(&self) -> Inclusion {
        match (self.info.include, self.attachment) {
            (Inclusion::ExternalProperty, Attachment::Type) => {
                tracing::warn!(
                    "external-property inclusion on a type attachment; using property instead"
                );
                Inclusion::Property
            }
            (include, _) => include,
        }
    }

    /// Effective property name for the identifier; `None` leaves the naming
    /// convention to the engine.
    pub fn property_name(&self) -> Option<&str> {
        self.info.effective_property_name()
    }

    /// Decode-side resolution of a type identifier.
    ///
    /// `lookup` maps an identifier to a concrete type name and is supplied
    /// by the caller (subtype registration lives outside this crate). A
    /// missing or unmappable identifier falls back per the declaration's
    /// `default_impl`, or errors when no fallback is declared.
    pub fn resolve_type_id<F>(&self, id: Option<&str>, lookup: F) -> Result<Decoded, ResolveError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match id {
            Some(id) => {
                if let Some(concrete) = lookup(id) {
                    return Ok(Decoded::Concrete(concrete));
                }
                match &self.info.default_impl {
                    DefaultImpl::Type(name) => Ok(Decoded::Concrete(name.clone())),
                    DefaultImpl::AsNull => Ok(Decoded::Null),
                    DefaultImpl::NoDefault => Err(ResolveError::UnmappableTypeId {
                        id: id.to_string(),
                    }),
                }
            }
            None => match &self.info.default_impl {
                DefaultImpl::Type(name) => Ok(Decoded::Concrete(name.clone())),
                DefaultImpl::AsNull => Ok(Decoded::Null),
                DefaultImpl::NoDefault => Err(ResolveError::MissingTypeId),
            },
        }
    }

    /// Encode-side gate: whether a type identifier should be written for a
    /// value of the given concrete type. Identifier-less declarations
    /// (`kind = none`) never write one; `skip_writing_default` permits
    /// omission when the value's type equals the declared default
    /// implementation.
    pub fn should_write_type_id(&self, value_type: &str) -> bool {
        if self.info.kind == TypeIdKind::None {
            return false;
        }
        if self.info.skip_writing_default && self.info.default_impl.type_name() == Some(value_type)
        {
            return false;
        }
        true
    }
}
