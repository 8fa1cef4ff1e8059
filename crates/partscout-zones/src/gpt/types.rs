//! GPT header structure

use serde::Serialize;

/// GPT header
///
/// The GPT header contains metadata about the partition table. Only the
/// first 92 bytes are defined; the rest of the sector is reserved.
///
/// ```text
/// Offset  Size  Field
/// ------  ----  -----
/// 0x00    8     Signature ("EFI PART")
/// 0x08    4     Revision
/// 0x0C    4     Header size
/// 0x10    4     Header CRC32
/// 0x14    4     Reserved
/// 0x18    8     Current LBA
/// 0x20    8     Backup LBA
/// 0x28    8     First usable LBA
/// 0x30    8     Last usable LBA
/// 0x38    16    Disk GUID
/// 0x48    8     Partition entry array LBA
/// 0x50    4     Number of partition entries
/// 0x54    4     Size of a partition entry
/// 0x58    4     Partition entry array CRC32
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GptHeader {
    /// Header signature ("EFI PART")
    #[serde(serialize_with = "crate::hexfmt::serialize")]
    pub signature: [u8; 8],
    /// GPT revision (usually 0x00010000)
    pub revision: u32,
    /// Header size in bytes (usually 92)
    pub header_size: u32,
    /// CRC32 checksum of header, as stored
    pub header_crc32: u32,
    /// Reserved (should be zero)
    pub reserved: u32,
    /// Current LBA (location of this header)
    pub current_lba: u64,
    /// Backup LBA (location of backup header)
    pub backup_lba: u64,
    /// First usable LBA for partitions
    pub first_usable_lba: u64,
    /// Last usable LBA for partitions
    pub last_usable_lba: u64,
    /// Disk GUID, bytes in on-disk order
    #[serde(serialize_with = "crate::hexfmt::serialize")]
    pub disk_guid: [u8; 16],
    /// Starting LBA of partition entries
    pub partition_entry_lba: u64,
    /// Number of partition entries
    pub number_of_partitions: u32,
    /// Size of each partition entry
    pub partition_entry_size: u32,
    /// CRC32 of partition entries array, as stored
    pub partition_entry_array_crc32: u32,
}

impl GptHeader {
    /// GPT header signature
    pub const SIGNATURE: &'static [u8; 8] = b"EFI PART";

    /// Number of defined header bytes
    pub const HEADER_SIZE: usize = 92;

    /// Decode a GPT header from its 92 defined bytes
    ///
    /// The signature is kept as found; see [`GptHeader::has_valid_signature`].
    pub fn from_bytes(bytes: &[u8; Self::HEADER_SIZE]) -> Self {
        let u32_at =
            |o: usize| u32::from_le_bytes([bytes[o], bytes[o + 1], bytes[o + 2], bytes[o + 3]]);
        let u64_at = |o: usize| {
            let mut b = [0u8; 8];
            b.copy_from_slice(&bytes[o..o + 8]);
            u64::from_le_bytes(b)
        };

        let mut signature = [0u8; 8];
        signature.copy_from_slice(&bytes[0..8]);

        let mut disk_guid = [0u8; 16];
        disk_guid.copy_from_slice(&bytes[56..72]);

        Self {
            signature,
            revision: u32_at(8),
            header_size: u32_at(12),
            header_crc32: u32_at(16),
            reserved: u32_at(20),
            current_lba: u64_at(24),
            backup_lba: u64_at(32),
            first_usable_lba: u64_at(40),
            last_usable_lba: u64_at(48),
            disk_guid,
            partition_entry_lba: u64_at(72),
            number_of_partitions: u32_at(80),
            partition_entry_size: u32_at(84),
            partition_entry_array_crc32: u32_at(88),
        }
    }

    /// Check the signature reads "EFI PART"
    pub fn has_valid_signature(&self) -> bool {
        &self.signature == Self::SIGNATURE
    }

    /// Get the revision as `major.minor`
    pub fn revision_string(&self) -> String {
        format!("{}.{}", self.revision >> 16, self.revision & 0xFFFF)
    }

    /// Get the disk GUID as plain hex, in on-disk byte order
    pub fn disk_guid_hex(&self) -> String {
        hex::encode(self.disk_guid)
    }

    /// Get the number of usable sectors on the disk
    pub fn usable_lba_count(&self) -> u64 {
        if self.last_usable_lba >= self.first_usable_lba {
            self.last_usable_lba - self.first_usable_lba + 1
        } else {
            0
        }
    }
}
