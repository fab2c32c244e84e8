//! Binary source boundary.

use byteorder::{BigEndian, ByteOrder as _, LittleEndian};

use crate::core::{ByteOrder, FormatVersion, VariantFlags};
use crate::util::Result;

/// Binary source an entity is populated from.
///
/// The container layer implements this over its record payloads. The
/// source declares the format version, byte order, and variant flags of
/// the data it supplies; [`Asset::read`] stores that triple on the entity
/// before any payload byte is consumed.
///
/// Implementors provide raw positioned reads; the typed readers are
/// derived and dispatch on the declared byte order.
///
/// [`Asset::read`]: crate::core::Asset::read
pub trait AssetSource {
    /// Version of the toolchain that produced the data.
    fn version(&self) -> FormatVersion;

    /// Byte order of the supplied data.
    fn byte_order(&self) -> ByteOrder;

    /// Variant flags the data was serialized under.
    fn flags(&self) -> VariantFlags;

    /// Current read position in bytes.
    fn position(&self) -> u64;

    /// Total length of the record payload in bytes.
    fn len(&self) -> u64;

    /// Fill `buf` from the current position, advancing it.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()>;

    /// Check if the payload is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes left between the current position and the end of the payload.
    fn remaining(&self) -> u64 {
        self.len().saturating_sub(self.position())
    }

    /// Read a single byte.
    fn read_u8(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    /// Read a signed byte.
    fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    /// Read a bool stored as one byte (non-zero = true).
    fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Read a u16 in the declared byte order.
    fn read_u16(&mut self) -> Result<u16> {
        let mut buf = [0u8; 2];
        self.read_exact(&mut buf)?;
        Ok(match self.byte_order() {
            ByteOrder::Little => LittleEndian::read_u16(&buf),
            ByteOrder::Big => BigEndian::read_u16(&buf),
        })
    }

    /// Read an i16 in the declared byte order.
    fn read_i16(&mut self) -> Result<i16> {
        Ok(self.read_u16()? as i16)
    }

    /// Read a u32 in the declared byte order.
    fn read_u32(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf)?;
        Ok(match self.byte_order() {
            ByteOrder::Little => LittleEndian::read_u32(&buf),
            ByteOrder::Big => BigEndian::read_u32(&buf),
        })
    }

    /// Read an i32 in the declared byte order.
    fn read_i32(&mut self) -> Result<i32> {
        Ok(self.read_u32()? as i32)
    }

    /// Read a u64 in the declared byte order.
    fn read_u64(&mut self) -> Result<u64> {
        let mut buf = [0u8; 8];
        self.read_exact(&mut buf)?;
        Ok(match self.byte_order() {
            ByteOrder::Little => LittleEndian::read_u64(&buf),
            ByteOrder::Big => BigEndian::read_u64(&buf),
        })
    }

    /// Read an i64 in the declared byte order.
    fn read_i64(&mut self) -> Result<i64> {
        Ok(self.read_u64()? as i64)
    }

    /// Read an f32 in the declared byte order.
    fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.read_u32()?))
    }

    /// Read an f64 in the declared byte order.
    fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_bits(self.read_u64()?))
    }

    /// Read `len` raw bytes.
    fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        self.read_exact(&mut buf)?;
        Ok(buf)
    }

    /// Read a length-prefixed UTF-8 string, aligned to 4 bytes after the
    /// payload.
    fn read_string(&mut self) -> Result<String> {
        let len = self.read_u32()? as usize;
        let bytes = self.read_bytes(len)?;
        let s = String::from_utf8(bytes)?;
        self.align4()?;
        Ok(s)
    }

    /// Skip padding up to the next 4-byte boundary.
    fn align4(&mut self) -> Result<()> {
        let rem = (self.position() % 4) as usize;
        if rem != 0 {
            let mut pad = [0u8; 3];
            self.read_exact(&mut pad[..4 - rem])?;
        }
        Ok(())
    }
}
