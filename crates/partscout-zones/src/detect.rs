//! Disk layout detection from sector 0

use crate::mbr::LegacyTable;
use crate::reader::read_structure;
use partscout_core::{DiskLayoutVariant, ReadSeek, Result, Structure};

/// Classify a decoded sector 0
///
/// A missing 0xAA55 signature means the image is not a boot sector at all.
/// Otherwise slot 0 alone decides between GPT and MBR; slots 1-3 are never
/// consulted.
pub fn classify(table: &LegacyTable) -> DiskLayoutVariant {
    if !table.has_boot_signature() {
        DiskLayoutVariant::Unrecognized
    } else if table.is_protective() {
        DiskLayoutVariant::ProtectedGpt
    } else {
        DiskLayoutVariant::LegacyMbr
    }
}

/// Determine which partitioning scheme governs `source`
///
/// Reads the first 512 bytes. The decoded sector is dropped afterwards and
/// nothing is logged about its entries; decoders re-read what they need.
///
/// # Errors
///
/// Returns [`partscout_core::Error::Read`] if fewer than 512 bytes are
/// available. [`DiskLayoutVariant::Unrecognized`] is a normal result, not an
/// error.
pub fn detect(source: &mut dyn ReadSeek) -> Result<DiskLayoutVariant> {
    let sector: [u8; LegacyTable::MBR_SIZE] = read_structure(source, Structure::LegacyTable)?;
    let table = LegacyTable::from_bytes(&sector);
    let variant = classify(&table);

    tracing::debug!(
        %variant,
        boot_signature = table.boot_signature,
        slot0_type = table.partitions[0].partition_type,
        "classified sector 0"
    );

    Ok(variant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mbr::tests::{create_test_mbr, put_entry};
    use partscout_core::Error;
    use std::io::Cursor;

    fn signed_sector() -> Vec<u8> {
        let mut mbr = vec![0u8; 512];
        mbr[510] = 0x55;
        mbr[511] = 0xAA;
        mbr
    }

    #[test]
    fn test_detect_legacy() {
        let mut cursor = Cursor::new(create_test_mbr());
        assert_eq!(detect(&mut cursor).unwrap(), DiskLayoutVariant::LegacyMbr);
    }

    #[test]
    fn test_detect_legacy_for_any_slot0_type_but_ee() {
        for partition_type in [0x00u8, 0x07, 0x0C, 0x83, 0xED, 0xEF, 0xFF] {
            let mut mbr = signed_sector();
            put_entry(&mut mbr, 0, 0x80, partition_type, 2048, 2048);

            assert_eq!(
                detect(&mut Cursor::new(mbr)).unwrap(),
                DiskLayoutVariant::LegacyMbr,
                "slot 0 type 0x{:02X}",
                partition_type
            );
        }
    }

    #[test]
    fn test_detect_protected_gpt() {
        let mut mbr = signed_sector();
        put_entry(&mut mbr, 0, 0x00, 0xEE, 1, 0xFFFF_FFFF);

        assert_eq!(detect(&mut Cursor::new(mbr)).unwrap(), DiskLayoutVariant::ProtectedGpt);
    }

    #[test]
    fn test_detect_protected_gpt_ignores_other_slots() {
        for other in [0x00u8, 0x07, 0xEE] {
            let mut mbr = signed_sector();
            put_entry(&mut mbr, 0, 0x00, 0xEE, 1, 0xFFFF_FFFF);
            for slot in 1..4 {
                put_entry(&mut mbr, slot, 0x80, other, 100, 100);
            }

            assert_eq!(detect(&mut Cursor::new(mbr)).unwrap(), DiskLayoutVariant::ProtectedGpt);
        }
    }

    #[test]
    fn test_ee_outside_slot0_is_legacy() {
        let mut mbr = signed_sector();
        put_entry(&mut mbr, 0, 0x80, 0x07, 2048, 2048);
        put_entry(&mut mbr, 3, 0x00, 0xEE, 1, 0xFFFF_FFFF);

        assert_eq!(detect(&mut Cursor::new(mbr)).unwrap(), DiskLayoutVariant::LegacyMbr);
    }

    #[test]
    fn test_detect_unrecognized_without_signature() {
        for tail in [[0x00u8, 0x00], [0xAA, 0x55], [0x55, 0x00], [0x00, 0xAA], [0xFF, 0xFF]] {
            let mut mbr = create_test_mbr();
            mbr[510] = tail[0];
            mbr[511] = tail[1];

            assert_eq!(
                detect(&mut Cursor::new(mbr)).unwrap(),
                DiskLayoutVariant::Unrecognized,
                "tail {:02X?}",
                tail
            );
        }
    }

    #[test]
    fn test_unrecognized_even_with_protective_type() {
        let mut mbr = vec![0u8; 512];
        put_entry(&mut mbr, 0, 0x00, 0xEE, 1, 0xFFFF_FFFF);

        assert_eq!(detect(&mut Cursor::new(mbr)).unwrap(), DiskLayoutVariant::Unrecognized);
    }

    #[test]
    fn test_detect_short_source() {
        for len in [0usize, 1, 510, 511] {
            let result = detect(&mut Cursor::new(vec![0u8; len]));
            assert!(
                matches!(
                    result,
                    Err(Error::Read {
                        structure: Structure::LegacyTable,
                        ..
                    })
                ),
                "length {}",
                len
            );
        }
    }

    #[test]
    fn test_detect_only_reads_first_sector() {
        let mut image = create_test_mbr();
        image.extend_from_slice(&[0xFF; 512]);

        assert_eq!(detect(&mut Cursor::new(image)).unwrap(), DiskLayoutVariant::LegacyMbr);
    }
}
