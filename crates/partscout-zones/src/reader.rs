//! Fixed-size structure reads

use partscout_core::{Error, ReadSeek, Result, Structure};
use std::io::SeekFrom;

/// Seek to `structure`'s offset and read exactly `N` bytes
///
/// A short read or a seek beyond the end never yields a partially filled
/// buffer; both surface as [`Error::Read`].
pub(crate) fn read_structure<const N: usize>(
    source: &mut dyn ReadSeek,
    structure: Structure,
) -> Result<[u8; N]> {
    debug_assert_eq!(N, structure.size());

    let offset = structure.offset();
    tracing::trace!(%structure, offset, len = N, "reading structure");

    source
        .seek(SeekFrom::Start(offset))
        .map_err(|e| Error::read(structure, offset, e))?;

    let mut buf = [0u8; N];
    source
        .read_exact(&mut buf)
        .map_err(|e| Error::read(structure, offset, e))?;

    Ok(buf)
}
