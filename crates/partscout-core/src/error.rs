//! Decode error types

use crate::types::Structure;
use std::io;
use thiserror::Error;

/// The main error type for partscout operations
#[derive(Error, Debug)]
pub enum Error {
    /// The image could not be opened
    #[error("Source unavailable: {path}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A seek or read did not yield the bytes a structure needs
    #[error("Read error: {structure} at offset 0x{offset:X}")]
    Read {
        structure: Structure,
        offset: u64,
        #[source]
        source: io::Error,
    },

    /// The bytes were read but violate an invariant of the structure
    #[error("Malformed structure: {structure} at offset 0x{offset:X}: {reason}")]
    MalformedStructure {
        structure: Structure,
        offset: u64,
        reason: String,
    },
}

/// Result type alias for partscout operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a source unavailable error
    pub fn source_unavailable(path: impl Into<String>, source: io::Error) -> Self {
        Error::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create a read error for the structure expected at `offset`
    pub fn read(structure: Structure, offset: u64, source: io::Error) -> Self {
        Error::Read {
            structure,
            offset,
            source,
        }
    }

    /// Create a malformed structure error
    pub fn malformed(structure: Structure, offset: u64, reason: impl Into<String>) -> Self {
        Error::MalformedStructure {
            structure,
            offset,
            reason: reason.into(),
        }
    }

    /// The structure this error refers to, if any
    pub fn structure(&self) -> Option<Structure> {
        match self {
            Error::Read { structure, .. } | Error::MalformedStructure { structure, .. } => {
                Some(*structure)
            }
            Error::SourceUnavailable { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_message_names_structure_and_offset() {
        let err = Error::read(
            Structure::GptHeader,
            512,
            io::Error::new(io::ErrorKind::UnexpectedEof, "failed to fill whole buffer"),
        );

        assert_eq!(err.to_string(), "Read error: GPT header at offset 0x200");
        assert_eq!(err.structure(), Some(Structure::GptHeader));
    }

    #[test]
    fn test_source_unavailable_has_no_structure() {
        let err = Error::source_unavailable(
            "missing.img",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );

        assert_eq!(err.to_string(), "Source unavailable: missing.img");
        assert_eq!(err.structure(), None);
    }

    #[test]
    fn test_malformed_message() {
        let err = Error::malformed(Structure::GptHeader, 512, "bad signature");
        assert_eq!(
            err.to_string(),
            "Malformed structure: GPT header at offset 0x200: bad signature"
        );
    }

    #[test]
    fn test_io_cause_is_only_in_source_chain() {
        use std::error::Error as _;

        let err = Error::source_unavailable(
            "missing.img",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );

        assert!(!err.to_string().contains("not found"));
        assert_eq!(err.source().unwrap().to_string(), "not found");
    }
}
