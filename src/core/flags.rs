//! Variant flags and the release/editor split.
//!
//! Every container record carries a bitset describing how it was
//! serialized. The contract interprets exactly one bit: whether the
//! record uses the release or the editor wire variant. All other bits
//! are carried opaquely for the container layers.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Serialization flags attached to a container record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct VariantFlags(u32);

impl VariantFlags {
    /// No flags set. Plain editor serialization.
    pub const NONE: Self = Self(0);
    /// Record belongs to persistent container storage.
    pub const PERSISTENT: Self = Self(1 << 0);
    /// Record uses the release wire variant. This is the only bit the
    /// entity contract interprets.
    pub const GAME_RELEASE: Self = Self(1 << 2);
    /// Record was serialized from an editor scene.
    pub const EDITOR_SCENE: Self = Self(1 << 4);

    /// Create flags from a raw bit pattern.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Get the raw bit pattern.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Check if all bits of `other` are set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// The variant predicate: does this record use the release variant?
    pub const fn is_release(self) -> bool {
        self.contains(Self::GAME_RELEASE)
    }

    /// The variant these flags select, as a dispatch token.
    pub const fn variant(self) -> Variant {
        if self.is_release() {
            Variant::Release
        } else {
            Variant::Editor
        }
    }
}

impl BitOr for VariantFlags {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for VariantFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for VariantFlags {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// One of the two mutually exclusive wire-format interpretations of the
/// same logical data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Stripped form shipped with built games.
    Release,
    /// Full form used by editor tooling.
    Editor,
}

impl Variant {
    /// Flags selecting this variant.
    pub const fn flags(self) -> VariantFlags {
        match self {
            Self::Release => VariantFlags::GAME_RELEASE,
            Self::Editor => VariantFlags::NONE,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Release => write!(f, "release"),
            Self::Editor => write!(f, "editor"),
        }
    }
}

/// A variant-dispatched contract operation, named in unsupported-variant
/// errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Populate from a binary source.
    Read,
    /// Emit to a binary sink.
    Write,
    /// Emit a structured document.
    Export,
    /// Describe the serialized field layout.
    Layout,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
            Self::Export => write!(f, "document export"),
            Self::Layout => write!(f, "layout description"),
        }
    }
}
