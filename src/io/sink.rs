//! Binary sink boundary.

use byteorder::{BigEndian, ByteOrder as _, LittleEndian};

use crate::core::{ByteOrder, VariantFlags};
use crate::util::Result;

/// Binary sink an entity is emitted into.
///
/// The sink declares the *target* variant flags: [`Asset::write`]
/// dispatches on them, not on the flags the entity was populated under,
/// which is what allows re-exporting data from one variant into the
/// other.
///
/// [`Asset::write`]: crate::core::Asset::write
pub trait AssetSink {
    /// Byte order to emit multi-byte values in.
    fn byte_order(&self) -> ByteOrder;

    /// Target variant flags for the emitted data.
    fn flags(&self) -> VariantFlags;

    /// Current write position in bytes.
    fn position(&self) -> u64;

    /// Append raw bytes.
    fn write_all(&mut self, data: &[u8]) -> Result<()>;

    /// Write a single byte.
    fn write_u8(&mut self, value: u8) -> Result<()> {
        self.write_all(&[value])
    }

    /// Write a signed byte.
    fn write_i8(&mut self, value: i8) -> Result<()> {
        self.write_u8(value as u8)
    }

    /// Write a bool as one byte.
    fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_u8(value as u8)
    }

    /// Write a u16 in the declared byte order.
    fn write_u16(&mut self, value: u16) -> Result<()> {
        let mut buf = [0u8; 2];
        match self.byte_order() {
            ByteOrder::Little => LittleEndian::write_u16(&mut buf, value),
            ByteOrder::Big => BigEndian::write_u16(&mut buf, value),
        }
        self.write_all(&buf)
    }

    /// Write an i16 in the declared byte order.
    fn write_i16(&mut self, value: i16) -> Result<()> {
        self.write_u16(value as u16)
    }

    /// Write a u32 in the declared byte order.
    fn write_u32(&mut self, value: u32) -> Result<()> {
        let mut buf = [0u8; 4];
        match self.byte_order() {
            ByteOrder::Little => LittleEndian::write_u32(&mut buf, value),
            ByteOrder::Big => BigEndian::write_u32(&mut buf, value),
        }
        self.write_all(&buf)
    }

    /// Write an i32 in the declared byte order.
    fn write_i32(&mut self, value: i32) -> Result<()> {
        self.write_u32(value as u32)
    }

    /// Write a u64 in the declared byte order.
    fn write_u64(&mut self, value: u64) -> Result<()> {
        let mut buf = [0u8; 8];
        match self.byte_order() {
            ByteOrder::Little => LittleEndian::write_u64(&mut buf, value),
            ByteOrder::Big => BigEndian::write_u64(&mut buf, value),
        }
        self.write_all(&buf)
    }

    /// Write an i64 in the declared byte order.
    fn write_i64(&mut self, value: i64) -> Result<()> {
        self.write_u64(value as u64)
    }

    /// Write an f32 in the declared byte order.
    fn write_f32(&mut self, value: f32) -> Result<()> {
        self.write_u32(value.to_bits())
    }

    /// Write an f64 in the declared byte order.
    fn write_f64(&mut self, value: f64) -> Result<()> {
        self.write_u64(value.to_bits())
    }

    /// Write a length-prefixed UTF-8 string, aligned to 4 bytes after the
    /// payload.
    fn write_string(&mut self, value: &str) -> Result<()> {
        self.write_u32(value.len() as u32)?;
        self.write_all(value.as_bytes())?;
        self.align4()
    }

    /// Emit zero padding up to the next 4-byte boundary.
    fn align4(&mut self) -> Result<()> {
        let rem = (self.position() % 4) as usize;
        if rem != 0 {
            self.write_all(&[0u8; 3][..4 - rem])?;
        }
        Ok(())
    }
}
