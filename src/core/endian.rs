//! Byte order declaration for binary sources and sinks.

/// Byte order used to interpret raw bytes.
///
/// The order is declared by the source/sink; entities themselves never
/// swap bytes. It is recorded on the entity as a transport fact and is
/// deliberately excluded from the metadata-equality gate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Least significant byte first.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

impl ByteOrder {
    /// Check if this is little-endian.
    pub fn is_little(self) -> bool {
        matches!(self, Self::Little)
    }

    /// Check if this is big-endian.
    pub fn is_big(self) -> bool {
        matches!(self, Self::Big)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_order() {
        assert_eq!(ByteOrder::default(), ByteOrder::Little);
        assert!(ByteOrder::Little.is_little());
        assert!(!ByteOrder::Little.is_big());
        assert!(ByteOrder::Big.is_big());
    }
}
