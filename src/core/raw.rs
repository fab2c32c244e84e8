//! Raw fallback entity.
//!
//! Container readers meet record kinds they have no compiled layout
//! for. Those records still have to survive extraction, re-emission,
//! and export, so the fallback keeps the payload as opaque bytes and
//! implements the full contract over them. Layout description stays
//! unsupported: a blob has no field structure to describe.

use std::any::Any;
use std::fmt::Write as _;

use crate::export::{Document, DocumentExporter};
use crate::io::{AssetSink, AssetSource};
use crate::util::Result;

use super::entity::{downcast_source, Asset, EntityMeta};

/// Entity holding an uninterpreted record payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawEntity {
    meta: EntityMeta,
    data: Vec<u8>,
}

impl RawEntity {
    /// Create an empty raw entity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a raw entity over an existing payload.
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self {
            meta: EntityMeta::default(),
            data: data.into(),
        }
    }

    /// View the payload.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Take the payload.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // Both variants carry the payload the same way; the split is kept at
    // the hook level so the dispatch contract stays uniform.
    fn read_payload(&mut self, source: &mut dyn AssetSource) -> Result<()> {
        self.data = source.read_bytes(source.remaining() as usize)?;
        Ok(())
    }

    fn payload_document(&self) -> Document {
        let mut hex = String::with_capacity(self.data.len() * 2);
        for byte in &self.data {
            // infallible on String
            let _ = write!(hex, "{byte:02x}");
        }
        Document::String(hex)
    }
}

impl Asset for RawEntity {
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

    fn read_release(&mut self, source: &mut dyn AssetSource) -> Result<()> {
        self.read_payload(source)
    }

    fn read_editor(&mut self, source: &mut dyn AssetSource) -> Result<()> {
        self.read_payload(source)
    }

    fn write_release(&self, sink: &mut dyn AssetSink) -> Result<()> {
        sink.write_all(&self.data)
    }

    fn write_editor(&self, sink: &mut dyn AssetSink) -> Result<()> {
        sink.write_all(&self.data)
    }

    fn export_release(&self, _exporter: &dyn DocumentExporter) -> Result<Document> {
        Ok(self.payload_document())
    }

    fn export_editor(&self, _exporter: &dyn DocumentExporter) -> Result<Document> {
        Ok(self.payload_document())
    }

    fn copy_values_from(&mut self, source: &dyn Asset) -> Result<()> {
        let source = downcast_source::<Self>(source)?;
        self.meta = source.meta;
        self.data = source.data.clone();
        Ok(())
    }

    fn equal_by_content(&self, other: &dyn Asset) -> bool {
        match other.as_any().downcast_ref::<Self>() {
            Some(other) => self.data == other.data,
            None => false,
        }
    }

    // No numeric fields, so both tolerance rules degenerate to exact
    // payload equality.
    fn almost_by_proportion(&self, other: &dyn Asset, _max_proportion: f32) -> bool {
        self.equal_by_content(other)
    }

    fn almost_by_deviation(&self, other: &dyn Asset, _max_deviation: f32) -> bool {
        self.equal_by_content(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FormatVersion, Variant, VariantFlags};
    use crate::export::StandaloneExporter;
    use crate::io::{MemorySink, MemorySource};
    use crate::util::Error;

    fn version() -> FormatVersion {
        FormatVersion::new(2019, 4, 0)
    }

    #[test]
    fn test_read_takes_remaining_bytes() {
        let mut source =
            MemorySource::new(vec![1, 2, 3, 4, 5, 6], version(), VariantFlags::GAME_RELEASE);
        // Simulate a container reader that already consumed a prefix.
        source.read_u16().unwrap();

        let mut entity = RawEntity::new();
        entity.read(&mut source).unwrap();
        assert_eq!(entity.data(), &[3, 4, 5, 6]);
        assert!(entity.meta().flags.is_release());
    }

    #[test]
    fn test_roundtrip_both_variants() {
        let entity = RawEntity::from_bytes(vec![9, 8, 7]);

        for flags in [VariantFlags::GAME_RELEASE, VariantFlags::NONE] {
            let mut sink = MemorySink::new(flags);
            entity.write(&mut sink).unwrap();
            assert_eq!(sink.as_bytes(), &[9, 8, 7]);
        }
    }

    #[test]
    fn test_export_hex() {
        let entity = RawEntity::from_bytes(vec![0x00, 0xff, 0x10]);
        let exporter = StandaloneExporter::for_variant(version(), Variant::Release);
        let doc = entity.export_document(&exporter).unwrap();
        assert_eq!(doc, Document::String("00ff10".into()));
    }

    #[test]
    fn test_clone_equality_and_tolerance() {
        let mut source = MemorySource::new(vec![1, 2, 3], version(), VariantFlags::GAME_RELEASE);
        let mut entity = RawEntity::new();
        entity.read(&mut source).unwrap();

        let clone = (&entity as &dyn Asset).deep_clone().unwrap();
        assert!(entity.equals(clone.as_ref()));
        assert!(entity.almost_equal_by_proportion(clone.as_ref(), 0.0));
        assert!(entity.almost_equal_by_deviation(clone.as_ref(), 0.0));

        let different = RawEntity::from_bytes(vec![1, 2, 4]);
        // Same type but different payload and different stored version:
        // the metadata gate already rejects.
        assert!(!entity.equals(&different));
    }

    #[test]
    fn test_layout_stays_unsupported() {
        let entity = RawEntity::from_bytes(vec![1]);
        assert!(matches!(
            entity.describe_layout(Variant::Release, 0, 0),
            Err(Error::UnsupportedVariant { .. })
        ));
    }
}
