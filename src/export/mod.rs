//! Structured-document export boundary.
//!
//! Entities can be exported to a structured human-readable form under
//! the same release/editor split as the wire format. The document value
//! itself is opaque to the contract; JSON values are used as the
//! interchange representation.

use crate::core::{FormatVersion, Variant, VariantFlags};

/// Opaque structured-document value produced by export.
pub type Document = serde_json::Value;

/// Export-side boundary an entity emits documents through.
///
/// The exporter declares the variant it wants documents in;
/// [`Asset::export_document`] dispatches on it. Name resolution, export
/// ids, and file placement belong to the surrounding export pipeline,
/// not to this boundary.
///
/// [`Asset::export_document`]: crate::core::Asset::export_document
pub trait DocumentExporter {
    /// Version the exported documents should be interpreted under.
    fn version(&self) -> FormatVersion;

    /// Variant flags the export is declared for.
    fn flags(&self) -> VariantFlags;
}

/// Plain value implementation of [`DocumentExporter`].
#[derive(Clone, Copy, Debug)]
pub struct StandaloneExporter {
    version: FormatVersion,
    flags: VariantFlags,
}

impl StandaloneExporter {
    /// Create an exporter with explicit flags.
    pub fn new(version: FormatVersion, flags: VariantFlags) -> Self {
        Self { version, flags }
    }

    /// Create an exporter declared for a variant.
    pub fn for_variant(version: FormatVersion, variant: Variant) -> Self {
        Self::new(version, variant.flags())
    }
}

impl DocumentExporter for StandaloneExporter {
    fn version(&self) -> FormatVersion {
        self.version
    }

    fn flags(&self) -> VariantFlags {
        self.flags
    }
}
