//! Dependency enumeration between entities.
//!
//! Entities reference each other by typed weak references: an entity kind
//! plus an identity, never ownership. The graph walker hands each entity
//! an accumulator; the entity appends its own direct edges and nothing
//! else. No entity reads the accumulator back or keeps it.

use std::fmt;

use smallvec::SmallVec;

use super::identity::EntityKind;

/// Typed weak reference to another entity within a container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EntityRef {
    /// Kind of the referenced entity.
    pub kind: EntityKind,
    /// Index into the owning container's external-reference table;
    /// 0 means the same container.
    pub file_index: i32,
    /// Record id within the referenced container.
    pub path_id: i64,
}

impl EntityRef {
    /// Create a reference into another container file.
    pub const fn new(kind: EntityKind, file_index: i32, path_id: i64) -> Self {
        Self {
            kind,
            file_index,
            path_id,
        }
    }

    /// Create a reference within the same container.
    pub const fn local(kind: EntityKind, path_id: i64) -> Self {
        Self::new(kind, 0, path_id)
    }

    /// Check if this is the null reference (points at nothing).
    pub fn is_null(&self) -> bool {
        self.file_index == 0 && self.path_id == 0
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "kind {} [{}:{}]", self.kind, self.file_index, self.path_id)
    }
}

/// Accumulator handed to [`Asset::fetch_dependencies`].
///
/// Opaque to entities: they append `(field, reference)` pairs and never
/// read back. The field name records which field held the edge, for
/// diagnostics in the graph walker.
///
/// [`Asset::fetch_dependencies`]: crate::core::Asset::fetch_dependencies
pub trait DependencyContext {
    /// Record one direct edge of the current entity.
    fn append(&mut self, field: &'static str, reference: EntityRef);
}

/// One recorded edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DependencyEntry {
    /// Name of the field that held the reference.
    pub field: &'static str,
    /// The reference itself.
    pub reference: EntityRef,
}

/// Plain list-backed accumulator.
///
/// Most entities have a handful of direct edges, so the storage is
/// inline up to eight entries.
#[derive(Clone, Debug, Default)]
pub struct DependencyList {
    entries: SmallVec<[DependencyEntry; 8]>,
}

impl DependencyList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded edges.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no edges were recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over recorded edges.
    pub fn iter(&self) -> impl Iterator<Item = &DependencyEntry> {
        self.entries.iter()
    }

    /// Iterate over just the references.
    pub fn references(&self) -> impl Iterator<Item = EntityRef> + '_ {
        self.entries.iter().map(|e| e.reference)
    }
}

impl DependencyContext for DependencyList {
    fn append(&mut self, field: &'static str, reference: EntityRef) {
        self.entries.push(DependencyEntry { field, reference });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_reference() {
        assert!(EntityRef::local(EntityKind(0), 0).is_null());
        assert!(!EntityRef::local(EntityKind(28), 42).is_null());
        assert!(!EntityRef::new(EntityKind(0), 1, 0).is_null());
    }

    #[test]
    fn test_list_accumulates() {
        let mut list = DependencyList::new();
        assert!(list.is_empty());

        list.append("m_Texture", EntityRef::local(EntityKind(28), 42));
        list.append("m_Shader", EntityRef::new(EntityKind(48), 1, 7));

        assert_eq!(list.len(), 2);
        let refs: Vec<EntityRef> = list.references().collect();
        assert_eq!(refs[0], EntityRef::local(EntityKind(28), 42));
        assert_eq!(refs[1].file_index, 1);
        assert_eq!(list.iter().next().unwrap().field, "m_Texture");
    }

    #[test]
    fn test_display() {
        let r = EntityRef::local(EntityKind(28), 42);
        assert_eq!(r.to_string(), "kind 28 [0:42]");
    }
}
