//! # partscout core
//!
//! Shared traits, types, and error handling for the partscout workspace.
//!
//! This crate provides the foundations used by the partition table decoders:
//! - **Sources**: any readable and seekable byte stream ([`ReadSeek`])
//! - **Layouts**: which on-disk scheme governs an image ([`DiskLayoutVariant`])
//! - **Errors**: read/decode failures tagged with the structure and offset involved
//!
//! ## Example
//!
//! ```rust
//! use partscout_core::{DiskLayoutVariant, Structure, SECTOR_SIZE};
//!
//! assert_eq!(Structure::GptHeader.offset(), SECTOR_SIZE as u64);
//! assert_eq!(DiskLayoutVariant::ProtectedGpt.name(), "GPT (protective MBR)");
//! ```

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items
pub use error::{Error, Result};
pub use traits::{PartitionTable, ReadSeek};
pub use types::{lba_to_offset, DiskLayoutVariant, Structure, SECTOR_SIZE};
