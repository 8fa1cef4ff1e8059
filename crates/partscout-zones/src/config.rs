//! Decoder configuration

/// Configuration for decoding a partition table
#[derive(Debug, Clone, Default)]
pub struct DecodeConfig {
    /// Reject a GPT header whose signature is not "EFI PART"
    ///
    /// Off by default: the protective MBR alone decides that an image is GPT.
    pub verify_gpt_signature: bool,
}

impl DecodeConfig {
    /// Configuration that also validates the GPT header signature
    pub fn strict() -> Self {
        Self {
            verify_gpt_signature: true,
        }
    }
}
