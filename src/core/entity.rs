//! The asset entity contract.
//!
//! Every serializable record in a container implements [`Asset`]: it can
//! be populated from and emitted to either wire variant, exported to a
//! structured document, asked for its field layout and its direct
//! dependencies, deep-cloned, and compared strictly or within a numeric
//! tolerance. Concrete types override only the variant hooks they
//! actually support; the rest signal [`Error::UnsupportedVariant`].

use std::any::Any;

use tracing::trace;

use crate::export::{Document, DocumentExporter};
use crate::io::{AssetSink, AssetSource};
use crate::util::{Error, Result};

use super::dependency::DependencyContext;
use super::endian::ByteOrder;
use super::flags::{Operation, Variant, VariantFlags};
use super::identity::ObjectIdentity;
use super::layout::LayoutNode;
use super::version::FormatVersion;

/// Entity fields excluded from the metadata-equality gate.
///
/// Byte order and variant flags describe how a record travelled, not
/// what it is: the same asset read from a big-endian release container
/// and a little-endian editor container must still gate as comparable.
pub const METADATA_EQUALITY_EXCLUSIONS: &[&str] = &["byte_order", "variant_flags"];

/// Transport metadata carried by every entity.
///
/// Assigned as a group when an entity is populated from a container and
/// copied as a group by the clone protocol; never updated field-by-field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EntityMeta {
    /// Version of the toolchain that produced the record.
    pub version: FormatVersion,
    /// Byte order the record was read in.
    pub byte_order: ByteOrder,
    /// Variant flags the record was serialized under.
    pub flags: VariantFlags,
}

/// Contract implemented by every entity in a container hierarchy.
///
/// The variant hooks (`read_release`, `read_editor`, `write_release`,
/// `write_editor`, `export_release`, `export_editor`, `release_layout`,
/// `editor_layout`) all default to [`Error::UnsupportedVariant`], so
/// "supports variant X" is a per-type, per-direction fact. The
/// dispatchers ([`read`], [`write`], [`export_document`],
/// [`describe_layout`]) route to exactly one hook per call.
///
/// Dispatch is asymmetric on purpose: population happens once, from a
/// source of known variant, so [`read`] follows the source flags and
/// records them; emission may target the *other* variant, so [`write`]
/// and [`export_document`] follow the sink's and exporter's declared
/// flags instead of the entity's stored ones.
///
/// [`read`]: Asset::read
/// [`write`]: Asset::write
/// [`export_document`]: Asset::export_document
/// [`describe_layout`]: Asset::describe_layout
pub trait Asset: Send + Sync {
    /// Transport metadata of this entity.
    fn meta(&self) -> &EntityMeta;

    /// Mutable transport metadata.
    fn meta_mut(&mut self) -> &mut EntityMeta;

    /// Upcast for concrete-type checks and downcasts.
    fn as_any(&self) -> &dyn Any;

    /// Create a blank instance of this entity's exact concrete type.
    ///
    /// The clone protocol builds on this; returning any other type loses
    /// data, which is why the method is required rather than defaulted.
    fn create_blank(&self) -> Box<dyn Asset>;

    /// Type name used in error messages and diagnostics.
    fn type_label(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Container identity for top-level objects, `None` for embedded
    /// sub-structures.
    fn identity(&self) -> Option<&ObjectIdentity> {
        None
    }

    // ========================================================================
    // Variant hooks
    // ========================================================================

    /// Populate from release-variant data.
    fn read_release(&mut self, _source: &mut dyn AssetSource) -> Result<()> {
        Err(Error::unsupported(self.type_label(), Variant::Release, Operation::Read))
    }

    /// Populate from editor-variant data.
    fn read_editor(&mut self, _source: &mut dyn AssetSource) -> Result<()> {
        Err(Error::unsupported(self.type_label(), Variant::Editor, Operation::Read))
    }

    /// Emit release-variant data.
    fn write_release(&self, _sink: &mut dyn AssetSink) -> Result<()> {
        Err(Error::unsupported(self.type_label(), Variant::Release, Operation::Write))
    }

    /// Emit editor-variant data.
    fn write_editor(&self, _sink: &mut dyn AssetSink) -> Result<()> {
        Err(Error::unsupported(self.type_label(), Variant::Editor, Operation::Write))
    }

    /// Produce a release-variant document.
    fn export_release(&self, _exporter: &dyn DocumentExporter) -> Result<Document> {
        Err(Error::unsupported(self.type_label(), Variant::Release, Operation::Export))
    }

    /// Produce an editor-variant document.
    fn export_editor(&self, _exporter: &dyn DocumentExporter) -> Result<Document> {
        Err(Error::unsupported(self.type_label(), Variant::Editor, Operation::Export))
    }

    /// Describe the release-variant field layout.
    fn release_layout(&self, _depth: u8, _starting_index: u32) -> Result<Vec<LayoutNode>> {
        Err(Error::unsupported(self.type_label(), Variant::Release, Operation::Layout))
    }

    /// Describe the editor-variant field layout.
    fn editor_layout(&self, _depth: u8, _starting_index: u32) -> Result<Vec<LayoutNode>> {
        Err(Error::unsupported(self.type_label(), Variant::Editor, Operation::Layout))
    }

    // ========================================================================
    // Dispatchers
    // ========================================================================

    /// Populate this entity from a source.
    ///
    /// The metadata triple is stored first, unconditionally; only then is
    /// the variant-specific hook invoked, selected by the source flags.
    /// A failing hook leaves the entity unusable rather than silently
    /// half-populated.
    fn read(&mut self, source: &mut dyn AssetSource) -> Result<()> {
        *self.meta_mut() = EntityMeta {
            version: source.version(),
            byte_order: source.byte_order(),
            flags: source.flags(),
        };
        let variant = source.flags().variant();
        trace!(entity = self.type_label(), %variant, "read");
        match variant {
            Variant::Release => self.read_release(source),
            Variant::Editor => self.read_editor(source),
        }
    }

    /// Emit this entity into a sink, under the *sink's* declared variant.
    fn write(&self, sink: &mut dyn AssetSink) -> Result<()> {
        let variant = sink.flags().variant();
        trace!(entity = self.type_label(), %variant, "write");
        match variant {
            Variant::Release => self.write_release(sink),
            Variant::Editor => self.write_editor(sink),
        }
    }

    /// Produce a structured document under the exporter's declared
    /// variant.
    fn export_document(&self, exporter: &dyn DocumentExporter) -> Result<Document> {
        match exporter.flags().variant() {
            Variant::Release => self.export_release(exporter),
            Variant::Editor => self.export_editor(exporter),
        }
    }

    /// Describe the field layout for a variant.
    ///
    /// `depth` is the nesting level of this entity's root node;
    /// `starting_index` numbers the first emitted node. Aggregates thread
    /// both through their members so an object graph yields one flat
    /// pre-order sequence; [`advance_index`] gives the index after a
    /// member's nodes.
    ///
    /// [`advance_index`]: super::layout::advance_index
    fn describe_layout(
        &self,
        variant: Variant,
        depth: u8,
        starting_index: u32,
    ) -> Result<Vec<LayoutNode>> {
        match variant {
            Variant::Release => self.release_layout(depth, starting_index),
            Variant::Editor => self.editor_layout(depth, starting_index),
        }
    }

    // ========================================================================
    // Dependencies
    // ========================================================================

    /// Append this entity's direct references to the accumulator.
    ///
    /// The default reports no edges. The context must not be retained
    /// beyond the call.
    fn fetch_dependencies(&self, _context: &mut dyn DependencyContext) -> Result<()> {
        Ok(())
    }

    // ========================================================================
    // Clone protocol
    // ========================================================================

    /// Copy all values from `source`, which must be of this exact
    /// concrete type.
    ///
    /// Implementations copy the metadata triple first, then their own
    /// fields, composing depth-first through nested entities. The
    /// precondition is checked: a mismatched source surfaces
    /// [`Error::TypeMismatch`].
    fn copy_values_from(&mut self, source: &dyn Asset) -> Result<()> {
        if self.as_any().type_id() != source.as_any().type_id() {
            return Err(Error::TypeMismatch {
                expected: self.type_label(),
                actual: source.type_label(),
            });
        }
        *self.meta_mut() = *source.meta();
        Ok(())
    }

    // ========================================================================
    // Equality
    // ========================================================================

    /// First phase of every comparison: the metadata gate.
    ///
    /// Concrete types must match exactly; cross-type comparison is
    /// always `false`, never an error. Top-level objects additionally
    /// require all four identity fields to match. Byte order and variant
    /// flags never participate, see [`METADATA_EQUALITY_EXCLUSIONS`].
    fn equal_metadata(&self, other: &dyn Asset) -> bool {
        if self.as_any().type_id() != other.as_any().type_id() {
            return false;
        }
        if self.meta().version != other.meta().version {
            return false;
        }
        match (self.identity(), other.identity()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => true,
            _ => false,
        }
    }

    /// Second phase: field-value comparison, only meaningful once the
    /// metadata gate holds. The default accepts only the same instance;
    /// concrete types override to compare actual values.
    fn equal_by_content(&self, other: &dyn Asset) -> bool {
        same_instance(self.as_any(), other.as_any())
    }

    /// Full equality: metadata gate, then content.
    fn equals(&self, other: &dyn Asset) -> bool {
        self.equal_metadata(other) && self.equal_by_content(other)
    }

    /// Relative-tolerance hook, reached only through the metadata gate.
    /// The default accepts only the same instance; types with
    /// floating-point fields override it.
    fn almost_by_proportion(&self, other: &dyn Asset, _max_proportion: f32) -> bool {
        same_instance(self.as_any(), other.as_any())
    }

    /// Absolute-tolerance hook, reached only through the metadata gate.
    fn almost_by_deviation(&self, other: &dyn Asset, _max_deviation: f32) -> bool {
        same_instance(self.as_any(), other.as_any())
    }

    /// Approximate equality with a relative tolerance: values count as
    /// equal when they differ by at most `max_proportion` of the larger
    /// magnitude.
    fn almost_equal_by_proportion(&self, other: &dyn Asset, max_proportion: f32) -> bool {
        self.equal_metadata(other) && self.almost_by_proportion(other, max_proportion)
    }

    /// Approximate equality with an absolute tolerance: values count as
    /// equal when they differ by at most `max_deviation`.
    fn almost_equal_by_deviation(&self, other: &dyn Asset, max_deviation: f32) -> bool {
        self.equal_metadata(other) && self.almost_by_deviation(other, max_deviation)
    }
}

impl dyn Asset {
    /// Deep-copy this entity: a blank instance of the same concrete type
    /// with all values copied over.
    pub fn deep_clone(&self) -> Result<Box<dyn Asset>> {
        let mut copy = self.create_blank();
        copy.copy_values_from(self)?;
        Ok(copy)
    }

    /// Downcast to a concrete entity type.
    pub fn downcast_ref<T: Asset + 'static>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// Downcast `source` to `T` for a value copy, surfacing the
/// same-concrete-type precondition as a typed error.
pub fn downcast_source<'a, T: Asset + 'static>(source: &'a dyn Asset) -> Result<&'a T> {
    source.as_any().downcast_ref::<T>().ok_or_else(|| Error::TypeMismatch {
        expected: std::any::type_name::<T>(),
        actual: source.type_label(),
    })
}

fn same_instance(a: &dyn Any, b: &dyn Any) -> bool {
    std::ptr::addr_eq(a as *const dyn Any, b as *const dyn Any)
}

/// Entity carrying nothing but the transport metadata.
///
/// This is the contract's own fallback: every variant hook is left at
/// its unsupported default, dependencies are empty, and content equality
/// accepts only the same instance. Concrete asset types do not build on
/// it; it exists so the default behavior itself is constructible.
#[derive(Clone, Debug, Default)]
pub struct BaseAsset {
    meta: EntityMeta,
}

impl BaseAsset {
    /// Create a blank entity.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Asset for BaseAsset {
    fn meta(&self) -> &EntityMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut EntityMeta {
        &mut self.meta
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn create_blank(&self) -> Box<dyn Asset> {
        Box::new(Self::default())
    }
}
