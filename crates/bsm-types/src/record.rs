use crate::token::Token;

/// One audit record: everything between a header token and its trailer.
///
/// The header and trailer themselves are consumed during framing and are
/// not part of [`tokens`](Self::tokens); what the header contributes is
/// the timestamp (widened to 64 bits regardless of which header variant
/// opened the record), and what the trailer contributes is
/// [`byte_count`](Self::byte_count), kept so callers can run their own
/// consistency checks against the on-disk record length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// Record timestamp, seconds part.
    pub seconds: u64,
    /// Record timestamp, nanoseconds part.
    pub nanoseconds: u64,
    /// The trailer's declared record length in bytes. Not validated
    /// against the bytes actually consumed.
    pub byte_count: u32,
    /// Interior tokens, in wire order.
    pub tokens: Vec<Token>,
}
