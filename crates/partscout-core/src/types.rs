//! Core types for partscout

use std::fmt;

/// Size of a logical sector in bytes
pub const SECTOR_SIZE: usize = 512;

/// Convert a sector index into an absolute byte offset
pub fn lba_to_offset(lba: u64) -> u64 {
    lba * SECTOR_SIZE as u64
}

/// On-disk structures a decoder can read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Structure {
    /// MBR sector at LBA 0
    LegacyTable,
    /// Primary GPT header at LBA 1
    GptHeader,
}

impl Structure {
    /// Absolute byte offset where this structure lives
    pub fn offset(&self) -> u64 {
        match self {
            Structure::LegacyTable => lba_to_offset(0),
            Structure::GptHeader => lba_to_offset(1),
        }
    }

    /// Number of bytes a decoder reads for this structure
    pub fn size(&self) -> usize {
        match self {
            Structure::LegacyTable => SECTOR_SIZE,
            Structure::GptHeader => 92,
        }
    }

    /// Get a human-readable name for this structure
    pub fn name(&self) -> &'static str {
        match self {
            Structure::LegacyTable => "MBR sector",
            Structure::GptHeader => "GPT header",
        }
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Partitioning scheme that governs an image
///
/// Determined from sector 0 alone and consumed right away to pick the
/// decoder; it is never stored alongside the decoded data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiskLayoutVariant {
    /// Classic MBR partition table
    LegacyMbr,
    /// GPT disk announced by a protective MBR (type 0xEE in slot 0)
    ProtectedGpt,
    /// Sector 0 lacks the 0xAA55 boot signature
    Unrecognized,
}

impl DiskLayoutVariant {
    /// Get a human-readable name for this layout
    pub fn name(&self) -> &'static str {
        match self {
            DiskLayoutVariant::LegacyMbr => "MBR",
            DiskLayoutVariant::ProtectedGpt => "GPT (protective MBR)",
            DiskLayoutVariant::Unrecognized => "Unrecognized",
        }
    }

    /// Whether a partition table will be decoded for this layout
    pub fn is_recognized(&self) -> bool {
        !matches!(self, DiskLayoutVariant::Unrecognized)
    }
}

impl fmt::Display for DiskLayoutVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_offsets() {
        assert_eq!(Structure::LegacyTable.offset(), 0);
        assert_eq!(Structure::GptHeader.offset(), 512);
        assert_eq!(Structure::LegacyTable.size(), 512);
        assert_eq!(Structure::GptHeader.size(), 92);
    }

    #[test]
    fn test_lba_to_offset() {
        assert_eq!(lba_to_offset(2), 1024);
        assert_eq!(lba_to_offset(2048), 1_048_576);
    }

    #[test]
    fn test_variant_recognized() {
        assert!(DiskLayoutVariant::LegacyMbr.is_recognized());
        assert!(DiskLayoutVariant::ProtectedGpt.is_recognized());
        assert!(!DiskLayoutVariant::Unrecognized.is_recognized());
        assert_eq!(DiskLayoutVariant::LegacyMbr.to_string(), "MBR");
    }
}
