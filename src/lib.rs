//! # assetkit
//!
//! Core entity contract for binary game-asset containers.
//!
//! Containers store heterogeneous records under two wire-format variants
//! of the same logical data: the stripped *release* form shipped with
//! built games and the full *editor* form used by tooling. This crate
//! defines the contract every record type implements — dual-variant
//! read/write/export dispatch, field layout description, dependency
//! enumeration, deep cloning, and strict plus tolerance-based equality —
//! together with the boundary traits the surrounding container, export,
//! and graph layers plug into.
//!
//! ## Modules
//!
//! - [`util`] - Error handling, tolerance-based float comparison
//! - [`core`] - The [`Asset`](core::Asset) contract and fundamental types
//! - [`io`] - Binary source/sink boundaries and in-memory implementations
//! - [`export`] - Structured-document export boundary
//!
//! ## Example
//!
//! ```ignore
//! use assetkit::prelude::*;
//!
//! let registry = EntityRegistry::new();
//! registry.register(EntityKind(114), || Box::new(RawEntity::new()));
//!
//! let mut source = MemorySource::new(payload, version, VariantFlags::GAME_RELEASE);
//! let entity = registry.read_entity(EntityKind(114), &mut source)?;
//! let copy = entity.deep_clone()?;
//! assert!(entity.equals(copy.as_ref()));
//! ```

pub mod core;
pub mod export;
pub mod io;
pub mod util;

// Re-export commonly used types
pub use crate::core::{Asset, EntityMeta, FormatVersion, Variant, VariantFlags};
pub use crate::util::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        Asset, BaseAsset, ByteOrder, DependencyContext, DependencyList, EntityKind, EntityMeta,
        EntityRef, EntityRegistry, FormatVersion, LayoutNode, ObjectIdentity, RawEntity, Variant,
        VariantFlags,
    };
    pub use crate::export::{Document, DocumentExporter, StandaloneExporter};
    pub use crate::io::{AssetSink, AssetSource, MemorySink, MemorySource};
    pub use crate::util::{Error, Result};
}
