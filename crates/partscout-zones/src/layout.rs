//! Detect-then-decode pipeline

use crate::config::DecodeConfig;
use crate::detect::detect;
use crate::gpt::{decode_gpt_with, GptHeader};
use crate::mbr::{decode_legacy, LegacyTable};
use crate::reader::read_structure;
use partscout_core::{DiskLayoutVariant, PartitionTable, ReadSeek, Result, Structure};
use serde::Serialize;

/// Decoded partition layout of an image
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum DiskLayout {
    /// MBR disk
    Legacy { table: LegacyTable },
    /// GPT disk with its protective MBR
    Gpt {
        protective: LegacyTable,
        header: GptHeader,
    },
    /// Sector 0 without the boot signature
    Unrecognized { boot_signature: u16 },
}

impl DiskLayout {
    /// Layout variant this result was decoded as
    pub fn variant(&self) -> DiskLayoutVariant {
        match self {
            DiskLayout::Legacy { .. } => DiskLayoutVariant::LegacyMbr,
            DiskLayout::Gpt { .. } => DiskLayoutVariant::ProtectedGpt,
            DiskLayout::Unrecognized { .. } => DiskLayoutVariant::Unrecognized,
        }
    }

    /// The governing partition table, if one was found
    pub fn table(&self) -> Option<&dyn PartitionTable> {
        match self {
            DiskLayout::Legacy { table } => Some(table),
            DiskLayout::Gpt { header, .. } => Some(header),
            DiskLayout::Unrecognized { .. } => None,
        }
    }
}

/// Detect the layout of `source` and decode its partition table
///
/// # Errors
///
/// Propagates the first read or decode failure; nothing partial is returned.
///
/// # Example
///
/// ```rust,no_run
/// use partscout_zones::{inspect, DecodeConfig, DiskLayout};
/// use std::fs::File;
///
/// let mut file = File::open("disk.img").unwrap();
/// match inspect(&mut file, &DecodeConfig::default()).unwrap() {
///     DiskLayout::Gpt { header, .. } => println!("GPT, {} entries", header.number_of_partitions),
///     DiskLayout::Legacy { table } => println!("MBR, sig 0x{:08X}", table.disk_signature()),
///     DiskLayout::Unrecognized { .. } => println!("no partition table"),
/// }
/// ```
pub fn inspect(source: &mut dyn ReadSeek, config: &DecodeConfig) -> Result<DiskLayout> {
    let variant = detect(source)?;
    tracing::info!(%variant, "detected disk layout");

    let layout = match variant {
        DiskLayoutVariant::LegacyMbr => DiskLayout::Legacy {
            table: decode_legacy(source)?,
        },
        DiskLayoutVariant::ProtectedGpt => {
            let protective = decode_legacy(source)?;
            let header = decode_gpt_with(source, config)?;
            DiskLayout::Gpt { protective, header }
        }
        DiskLayoutVariant::Unrecognized => {
            // Not a boot sector, so its entries are not decoded or checked.
            let sector: [u8; LegacyTable::MBR_SIZE] =
                read_structure(source, Structure::LegacyTable)?;
            DiskLayout::Unrecognized {
                boot_signature: LegacyTable::from_bytes(&sector).boot_signature,
            }
        }
    };

    Ok(layout)
}
