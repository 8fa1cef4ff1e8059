//! # partscout zones
//!
//! Partition table detection and decoding.
//!
//! This crate reads the on-disk structures that describe how an image is
//! partitioned:
//! - **detect**: classify sector 0 as MBR, protective MBR (GPT) or neither
//! - **MBR**: the four legacy partition entries of sector 0
//! - **GPT**: the primary GPT header at LBA 1 (the entry array is not read)
//!
//! ## Example
//!
//! ```rust,no_run
//! use partscout_core::DiskLayoutVariant;
//! use partscout_zones::{decode_gpt, decode_legacy, detect};
//! use std::fs::File;
//!
//! let mut file = File::open("disk.img").unwrap();
//!
//! match detect(&mut file).unwrap() {
//!     DiskLayoutVariant::LegacyMbr => {
//!         for p in decode_legacy(&mut file).unwrap().partitions.iter() {
//!             println!("  {}", p);
//!         }
//!     }
//!     DiskLayoutVariant::ProtectedGpt => {
//!         let header = decode_gpt(&mut file).unwrap();
//!         println!("GPT with {} entries", header.number_of_partitions);
//!     }
//!     DiskLayoutVariant::Unrecognized => println!("No boot signature"),
//! }
//! ```

pub mod config;
pub mod detect;
pub mod gpt;
mod hexfmt;
pub mod layout;
pub mod mbr;
mod reader;

pub use config::DecodeConfig;
pub use detect::{classify, detect};
pub use gpt::{decode_gpt, decode_gpt_with, GptHeader};
pub use layout::{inspect, DiskLayout};
pub use mbr::{decode_legacy, LegacyPartitionEntry, LegacyTable, MbrPartitionType};
