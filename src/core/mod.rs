//! Core layer - the entity contract and its fundamental types.
//!
//! This module provides:
//! - [`Asset`] - the contract every container entity implements
//! - [`EntityMeta`] - per-entity transport metadata
//! - [`FormatVersion`] / [`ByteOrder`] / [`VariantFlags`] - the metadata triple's types
//! - [`ObjectIdentity`] - identity quad of top-level objects
//! - [`LayoutNode`] - field layout description rows
//! - [`EntityRef`] / [`DependencyContext`] - dependency enumeration
//! - [`EntityRegistry`] - kind-keyed entity construction
//! - [`RawEntity`] - fallback entity for unknown kinds

mod dependency;
mod endian;
mod entity;
mod flags;
mod identity;
mod layout;
mod raw;
mod registry;
mod version;

pub use dependency::{DependencyContext, DependencyEntry, DependencyList, EntityRef};
pub use endian::ByteOrder;
pub use entity::{
    downcast_source, Asset, BaseAsset, EntityMeta, METADATA_EQUALITY_EXCLUSIONS,
};
pub use flags::{Operation, Variant, VariantFlags};
pub use identity::{ContainerId, EntityGuid, EntityKind, ObjectIdentity};
pub use layout::{advance_index, LayoutNode};
pub use raw::RawEntity;
pub use registry::{EntityFactory, EntityRegistry};
pub use version::FormatVersion;
