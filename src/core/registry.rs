//! Kind-keyed entity construction.
//!
//! Container readers know records only by their kind tag. The registry
//! maps kinds to factory functions producing blank entities, so a reader
//! can construct and populate records without compiled knowledge of the
//! concrete types. One registry instance is shared by all readers over a
//! container set.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::io::AssetSource;
use crate::util::{Error, Result};

use super::entity::Asset;
use super::identity::EntityKind;

/// Factory producing a blank entity of one concrete type.
pub type EntityFactory = fn() -> Box<dyn Asset>;

/// Shared kind-to-factory table.
#[derive(Default)]
pub struct EntityRegistry {
    factories: RwLock<HashMap<EntityKind, EntityFactory>>,
}

impl EntityRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory for a kind, replacing any previous one.
    pub fn register(&self, kind: EntityKind, factory: EntityFactory) {
        debug!(%kind, "registered entity factory");
        self.factories.write().insert(kind, factory);
    }

    /// Check if a kind has a registered factory.
    pub fn contains(&self, kind: EntityKind) -> bool {
        self.factories.read().contains_key(&kind)
    }

    /// Number of registered kinds.
    pub fn len(&self) -> usize {
        self.factories.read().len()
    }

    /// Check if no kinds are registered.
    pub fn is_empty(&self) -> bool {
        self.factories.read().is_empty()
    }

    /// Construct a blank entity of the given kind.
    pub fn create_blank(&self, kind: EntityKind) -> Result<Box<dyn Asset>> {
        match self.factories.read().get(&kind) {
            Some(factory) => Ok(factory()),
            None => Err(Error::UnknownKind(kind)),
        }
    }

    /// Construct and populate an entity of the given kind from a source.
    pub fn read_entity(&self, kind: EntityKind, source: &mut dyn AssetSource) -> Result<Box<dyn Asset>> {
        trace!(%kind, "populating entity");
        let mut entity = self.create_blank(kind)?;
        entity.read(source)?;
        Ok(entity)
    }
}
