//! Hex rendering for opaque byte fields

use serde::Serializer;

/// Serialize raw bytes as a lowercase hex string
pub(crate) fn serialize<T, S>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: AsRef<[u8]>,
    S: Serializer,
{
    serializer.serialize_str(&hex::encode(bytes))
}
