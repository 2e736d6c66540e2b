//! Polytag Core Library
//!
//! Declarative metadata for polymorphic type information in JSON: which
//! kind of type identifier a value carries, where the identifier is placed,
//! and how missing identifiers are resolved on decode. Declarations attach
//! to types and properties through an explicit registry; the serializer that
//! acts on them lives elsewhere.

pub mod config;
pub mod registry;
pub mod types;

/// Re-exports of commonly used types
pub mod prelude {
    // Declarations
    pub use crate::config::{DeclarationStore, DeclarationsFile, TypeInfo, TypeInfoEntry};

    // Registry and resolution
    pub use crate::registry::{Decoded, Effective, MetadataRegistry, ResolveError};

    // Enumerations
    pub use crate::types::{Attachment, DefaultImpl, Inclusion, TypeIdKind};
}
