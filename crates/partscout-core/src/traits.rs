//! Core traits for partscout

use std::io::{Read, Seek};

/// Trait for decoded partition table structures
pub trait PartitionTable {
    /// Get a human-readable identifier for this partition table type
    fn identify(&self) -> &str;

    /// Absolute byte offset the structure was decoded from
    fn offset(&self) -> u64;
}

/// Combined trait for Read + Seek
///
/// Decoders only ever borrow a source through this trait, so they can read
/// and reposition it but never write to it.
pub trait ReadSeek: Read + Seek {}

/// Blanket implementation for any type that implements Read + Seek
impl<T: Read + Seek> ReadSeek for T {}
