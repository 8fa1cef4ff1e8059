//! MBR partition entries and type codes

use serde::Serialize;
use std::fmt;

/// MBR partition type codes
///
/// These are the standard partition type identifiers used in the MBR partition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MbrPartitionType {
    /// Empty/unused partition entry
    Empty,
    /// FAT12, CHS
    Fat12,
    /// FAT16 < 32MB, CHS
    Fat16Small,
    /// Extended partition, CHS
    Extended,
    /// FAT16 >= 32MB, CHS
    Fat16,
    /// NTFS/exFAT/HPFS
    Ntfs,
    /// FAT32, CHS
    Fat32Chs,
    /// FAT32, LBA
    Fat32Lba,
    /// FAT16, LBA
    Fat16Lba,
    /// Extended partition, LBA
    ExtendedLba,
    /// Linux swap
    LinuxSwap,
    /// Linux native (ext2/ext3/ext4)
    LinuxNative,
    /// Linux extended
    LinuxExtended,
    /// Linux LVM
    LinuxLvm,
    /// FreeBSD slice
    FreeBsd,
    /// GPT protective MBR
    GptProtective,
    /// EFI system partition
    EfiSystem,
    /// Linux RAID autodetect
    LinuxRaid,
    /// Any other code
    Unknown(u8),
}

impl MbrPartitionType {
    /// Create a partition type from a byte value
    pub fn from_byte(b: u8) -> Self {
        match b {
            0x00 => Self::Empty,
            0x01 => Self::Fat12,
            0x04 => Self::Fat16Small,
            0x05 => Self::Extended,
            0x06 => Self::Fat16,
            0x07 => Self::Ntfs,
            0x0B => Self::Fat32Chs,
            0x0C => Self::Fat32Lba,
            0x0E => Self::Fat16Lba,
            0x0F => Self::ExtendedLba,
            0x82 => Self::LinuxSwap,
            0x83 => Self::LinuxNative,
            0x85 => Self::LinuxExtended,
            0x8E => Self::LinuxLvm,
            0xA5 => Self::FreeBsd,
            0xEE => Self::GptProtective,
            0xEF => Self::EfiSystem,
            0xFD => Self::LinuxRaid,
            other => Self::Unknown(other),
        }
    }

    /// Get a human-readable name for this partition type
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Fat12 => "FAT12",
            Self::Fat16Small => "FAT16 (<32MB)",
            Self::Extended => "Extended",
            Self::Fat16 => "FAT16",
            Self::Ntfs => "NTFS/exFAT",
            Self::Fat32Chs => "FAT32 (CHS)",
            Self::Fat32Lba => "FAT32 (LBA)",
            Self::Fat16Lba => "FAT16 (LBA)",
            Self::ExtendedLba => "Extended (LBA)",
            Self::LinuxSwap => "Linux swap",
            Self::LinuxNative => "Linux",
            Self::LinuxExtended => "Linux extended",
            Self::LinuxLvm => "Linux LVM",
            Self::FreeBsd => "FreeBSD",
            Self::GptProtective => "GPT Protective",
            Self::EfiSystem => "EFI System",
            Self::LinuxRaid => "Linux RAID",
            Self::Unknown(_) => "Unknown",
        }
    }
}

impl fmt::Display for MbrPartitionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One of the four 16-byte entries of an MBR partition table
///
/// ```text
/// Offset  Size  Field
/// ------  ----  -----
/// 0x00    1     Boot flag (0x80 = active)
/// 0x01    3     Start CHS
/// 0x04    1     Partition type
/// 0x05    3     End CHS
/// 0x08    4     Start LBA (LE)
/// 0x0C    4     Total sectors (LE)
/// ```
///
/// CHS addresses are kept as the raw bytes found on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegacyPartitionEntry {
    pub boot_flag: u8,
    #[serde(serialize_with = "crate::hexfmt::serialize")]
    pub start_chs: [u8; 3],
    pub partition_type: u8,
    #[serde(serialize_with = "crate::hexfmt::serialize")]
    pub end_chs: [u8; 3],
    pub start_lba: u32,
    pub total_sectors: u32,
}

impl LegacyPartitionEntry {
    /// Size of a partition entry in bytes
    pub const ENTRY_SIZE: usize = 16;

    /// Boot flag value of an active partition
    pub const BOOTABLE: u8 = 0x80;

    /// Partition type of the single entry in a protective MBR
    pub const GPT_PROTECTIVE: u8 = 0xEE;

    /// Parse a partition entry from its 16 bytes
    pub fn from_bytes(bytes: &[u8; Self::ENTRY_SIZE]) -> Self {
        Self {
            boot_flag: bytes[0],
            start_chs: [bytes[1], bytes[2], bytes[3]],
            partition_type: bytes[4],
            end_chs: [bytes[5], bytes[6], bytes[7]],
            start_lba: u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]),
            total_sectors: u32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]),
        }
    }

    /// Check if the entry is marked active
    pub fn is_bootable(&self) -> bool {
        self.boot_flag == Self::BOOTABLE
    }

    /// Check if the boot flag holds one of the two defined values
    pub fn has_valid_boot_flag(&self) -> bool {
        self.boot_flag == Self::BOOTABLE || self.boot_flag == 0x00
    }

    /// Check if this entry is unused (type 0x00)
    pub fn is_unused(&self) -> bool {
        self.partition_type == 0x00
    }

    /// Check if this entry is a GPT protective partition
    pub fn is_gpt_protective(&self) -> bool {
        self.partition_type == Self::GPT_PROTECTIVE
    }

    /// Get the decoded partition type
    pub fn kind(&self) -> MbrPartitionType {
        MbrPartitionType::from_byte(self.partition_type)
    }

    /// Last sector covered by this partition, `None` if it is zero-length
    pub fn end_lba(&self) -> Option<u64> {
        if self.total_sectors == 0 {
            None
        } else {
            Some(self.start_lba as u64 + self.total_sectors as u64 - 1)
        }
    }
}

impl fmt::Display for LegacyPartitionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{:02X} {} @ LBA {} (+{} sectors)",
            self.partition_type,
            self.kind(),
            self.start_lba,
            self.total_sectors
        )
    }
}
