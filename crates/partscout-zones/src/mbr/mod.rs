//! MBR (Master Boot Record) partition table decoding

pub mod types;

use crate::reader::read_structure;
use partscout_core::{PartitionTable, ReadSeek, Result, Structure, SECTOR_SIZE};
use serde::Serialize;
pub use types::{LegacyPartitionEntry, MbrPartitionType};

/// MBR sector
///
/// The Master Boot Record is the traditional partitioning scheme used by BIOS-based systems.
/// On GPT disks the same layout is written as a protective MBR.
///
/// # Structure
///
/// ```text
/// Offset  Size  Field
/// ------  ----  -----
/// 0x000   446   Bootstrap code
/// 0x1BE   16    Partition entry 1
/// 0x1CE   16    Partition entry 2
/// 0x1DE   16    Partition entry 3
/// 0x1EE   16    Partition entry 4
/// 0x1FE   2     Boot signature (0xAA55)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegacyTable {
    #[serde(skip)]
    pub bootstrap_code: [u8; 446],
    pub partitions: [LegacyPartitionEntry; 4],
    pub boot_signature: u16,
}

impl LegacyTable {
    /// The boot signature that must be present at offset 0x1FE
    pub const BOOT_SIGNATURE: u16 = 0xAA55;

    /// Size of the MBR in bytes (always 512)
    pub const MBR_SIZE: usize = SECTOR_SIZE;

    /// Size of the bootstrap code area
    pub const BOOTSTRAP_SIZE: usize = 446;

    /// Offset of the first partition entry
    pub const PARTITION_TABLE_OFFSET: usize = 0x1BE;

    /// Offset of the disk signature
    pub const DISK_SIGNATURE_OFFSET: usize = 0x1B8;

    /// Offset of the boot signature
    pub const BOOT_SIGNATURE_OFFSET: usize = 0x1FE;

    /// Number of partition entries in MBR
    pub const NUM_PARTITIONS: usize = 4;

    /// Decode an MBR from the 512 bytes of sector 0
    pub fn from_bytes(sector: &[u8; Self::MBR_SIZE]) -> Self {
        let mut bootstrap_code = [0u8; Self::BOOTSTRAP_SIZE];
        bootstrap_code.copy_from_slice(&sector[..Self::BOOTSTRAP_SIZE]);

        let partitions = std::array::from_fn(|i| {
            let offset = Self::PARTITION_TABLE_OFFSET + i * LegacyPartitionEntry::ENTRY_SIZE;
            let mut entry = [0u8; LegacyPartitionEntry::ENTRY_SIZE];
            entry.copy_from_slice(&sector[offset..offset + LegacyPartitionEntry::ENTRY_SIZE]);
            LegacyPartitionEntry::from_bytes(&entry)
        });

        let boot_signature = u16::from_le_bytes([
            sector[Self::BOOT_SIGNATURE_OFFSET],
            sector[Self::BOOT_SIGNATURE_OFFSET + 1],
        ]);

        Self {
            bootstrap_code,
            partitions,
            boot_signature,
        }
    }

    /// Check the sector ends in 0x55 0xAA
    pub fn has_boot_signature(&self) -> bool {
        self.boot_signature == Self::BOOT_SIGNATURE
    }

    /// Check if slot 0 holds a GPT protective partition
    ///
    /// Only the first entry is consulted; a protective MBR always puts its
    /// covering partition there.
    pub fn is_protective(&self) -> bool {
        self.partitions[0].is_gpt_protective()
    }

    /// Get the disk signature stored at 0x1B8, inside the bootstrap area
    pub fn disk_signature(&self) -> u32 {
        let o = Self::DISK_SIGNATURE_OFFSET;
        u32::from_le_bytes([
            self.bootstrap_code[o],
            self.bootstrap_code[o + 1],
            self.bootstrap_code[o + 2],
            self.bootstrap_code[o + 3],
        ])
    }

    /// Iterate over entries whose type is not 0x00, with their slot index
    pub fn used_partitions(&self) -> impl Iterator<Item = (usize, &LegacyPartitionEntry)> {
        self.partitions
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_unused())
    }
}

impl PartitionTable for LegacyTable {
    fn identify(&self) -> &str {
        if self.is_protective() {
            "Protective Master Boot Record"
        } else {
            "Master Boot Record"
        }
    }

    fn offset(&self) -> u64 {
        Structure::LegacyTable.offset()
    }
}

/// Read and decode the MBR at offset 0
///
/// All four entries are returned as found, including empty ones.
///
/// # Errors
///
/// Returns [`partscout_core::Error::Read`] if the source holds fewer than
/// 512 bytes or the read fails.
pub fn decode_legacy(source: &mut dyn ReadSeek) -> Result<LegacyTable> {
    let sector: [u8; LegacyTable::MBR_SIZE] = read_structure(source, Structure::LegacyTable)?;
    let table = LegacyTable::from_bytes(&sector);

    for (i, p) in table.partitions.iter().enumerate() {
        if !p.has_valid_boot_flag() {
            tracing::warn!(slot = i, boot_flag = p.boot_flag, "non-standard boot flag");
        }
    }

    tracing::debug!(
        boot_signature = table.boot_signature,
        used = table.used_partitions().count(),
        "decoded MBR"
    );

    Ok(table)
}
