//! GPT (GUID Partition Table) header decoding

pub mod types;

use crate::config::DecodeConfig;
use crate::reader::read_structure;
use partscout_core::{Error, PartitionTable, ReadSeek, Result, Structure};
pub use types::GptHeader;

impl PartitionTable for GptHeader {
    fn identify(&self) -> &str {
        "GUID Partition Table"
    }

    fn offset(&self) -> u64 {
        Structure::GptHeader.offset()
    }
}

/// Read and decode the primary GPT header at LBA 1
///
/// The partition entry array is not read. The signature is not checked;
/// use [`decode_gpt_with`] and [`DecodeConfig::strict`] for that.
///
/// # Errors
///
/// Returns [`Error::Read`] if the source ends before the 92 header bytes
/// starting at offset 512.
pub fn decode_gpt(source: &mut dyn ReadSeek) -> Result<GptHeader> {
    decode_gpt_with(source, &DecodeConfig::default())
}

/// Read and decode the primary GPT header using `config`
///
/// # Errors
///
/// Returns [`Error::Read`] on a short source and
/// [`Error::MalformedStructure`] if signature verification is enabled and
/// the header is not signed "EFI PART".
pub fn decode_gpt_with(source: &mut dyn ReadSeek, config: &DecodeConfig) -> Result<GptHeader> {
    let bytes: [u8; GptHeader::HEADER_SIZE] = read_structure(source, Structure::GptHeader)?;
    let header = GptHeader::from_bytes(&bytes);

    if !header.has_valid_signature() {
        if config.verify_gpt_signature {
            return Err(Error::malformed(
                Structure::GptHeader,
                Structure::GptHeader.offset(),
                format!(
                    "Invalid GPT signature: expected {:?}, got {:?}",
                    String::from_utf8_lossy(GptHeader::SIGNATURE),
                    String::from_utf8_lossy(&header.signature)
                ),
            ));
        }
        tracing::warn!(signature = %hex::encode(header.signature), "GPT header signature mismatch");
    }

    tracing::debug!(
        partition_entry_lba = header.partition_entry_lba,
        number_of_partitions = header.number_of_partitions,
        "decoded GPT header"
    );

    Ok(header)
}
