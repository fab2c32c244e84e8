//! In-memory source and sink implementations.
//!
//! Container layers typically hand entities views into mapped files;
//! these buffer-backed implementations cover everything else: tests,
//! format conversion, and re-serialization of already-extracted records.

use crate::core::{ByteOrder, FormatVersion, VariantFlags};
use crate::util::{Error, Result};

use super::{AssetSink, AssetSource};

/// Buffer-backed [`AssetSource`].
pub struct MemorySource {
    data: Vec<u8>,
    pos: u64,
    version: FormatVersion,
    byte_order: ByteOrder,
    flags: VariantFlags,
}

impl MemorySource {
    /// Create a source over a byte buffer.
    pub fn new(data: impl Into<Vec<u8>>, version: FormatVersion, flags: VariantFlags) -> Self {
        Self {
            data: data.into(),
            pos: 0,
            version,
            byte_order: ByteOrder::default(),
            flags,
        }
    }

    /// Set the byte order the data is interpreted in.
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Reset the read position to the start of the buffer.
    pub fn rewind(&mut self) {
        self.pos = 0;
    }
}

impl AssetSource for MemorySource {
    fn version(&self) -> FormatVersion {
        self.version
    }

    fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    fn flags(&self) -> VariantFlags {
        self.flags
    }

    fn position(&self) -> u64 {
        self.pos
    }

    fn len(&self) -> u64 {
        self.data.len() as u64
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        let end = self.pos + buf.len() as u64;
        if end > self.data.len() as u64 {
            return Err(Error::UnexpectedEof(end));
        }
        buf.copy_from_slice(&self.data[self.pos as usize..end as usize]);
        self.pos = end;
        Ok(())
    }
}

/// Buffer-backed [`AssetSink`].
pub struct MemorySink {
    buf: Vec<u8>,
    byte_order: ByteOrder,
    flags: VariantFlags,
}

impl MemorySink {
    /// Create a sink targeting the given variant flags.
    pub fn new(flags: VariantFlags) -> Self {
        Self {
            buf: Vec::new(),
            byte_order: ByteOrder::default(),
            flags,
        }
    }

    /// Set the byte order multi-byte values are emitted in.
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// View the emitted bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Take the emitted bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

impl AssetSink for MemorySink {
    fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    fn flags(&self) -> VariantFlags {
        self.flags
    }

    fn position(&self) -> u64 {
        self.buf.len() as u64
    }

    fn write_all(&mut self, data: &[u8]) -> Result<()> {
        self.buf.extend_from_slice(data);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version() -> FormatVersion {
        FormatVersion::new(2019, 4, 0)
    }

    #[test]
    fn test_typed_roundtrip_little() {
        let mut sink = MemorySink::new(VariantFlags::NONE);
        sink.write_u32(0xdead_beef).unwrap();
        sink.write_f32(1.5).unwrap();
        sink.write_i64(-9).unwrap();
        sink.write_bool(true).unwrap();

        let mut source = MemorySource::new(sink.into_bytes(), version(), VariantFlags::NONE);
        assert_eq!(source.read_u32().unwrap(), 0xdead_beef);
        assert_eq!(source.read_f32().unwrap(), 1.5);
        assert_eq!(source.read_i64().unwrap(), -9);
        assert!(source.read_bool().unwrap());
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_typed_roundtrip_big() {
        let mut sink = MemorySink::new(VariantFlags::NONE).with_byte_order(ByteOrder::Big);
        sink.write_u16(0x0102).unwrap();
        let bytes = sink.into_bytes();
        assert_eq!(bytes, [0x01, 0x02]);

        let mut source =
            MemorySource::new(bytes, version(), VariantFlags::NONE).with_byte_order(ByteOrder::Big);
        assert_eq!(source.read_u16().unwrap(), 0x0102);
    }

    #[test]
    fn test_string_alignment() {
        let mut sink = MemorySink::new(VariantFlags::NONE);
        sink.write_string("abcde").unwrap();
        // 4 length bytes + 5 payload bytes + 3 padding bytes
        assert_eq!(sink.position(), 12);

        let mut source = MemorySource::new(sink.into_bytes(), version(), VariantFlags::NONE);
        assert_eq!(source.read_string().unwrap(), "abcde");
        assert_eq!(source.position(), 12);
    }

    #[test]
    fn test_eof() {
        let mut source = MemorySource::new(vec![1, 2], version(), VariantFlags::NONE);
        assert_eq!(source.read_u8().unwrap(), 1);
        assert!(matches!(source.read_u32(), Err(Error::UnexpectedEof(_))));
    }

    #[test]
    fn test_rewind() {
        let mut source = MemorySource::new(vec![7, 8], version(), VariantFlags::NONE);
        assert_eq!(source.read_u8().unwrap(), 7);
        source.rewind();
        assert_eq!(source.read_u8().unwrap(), 7);
    }
}
