use bsm_wire::WireError;

/// Errors produced while decoding tokens and framing records.
///
/// There is no in-stream recovery: a single malformed token leaves the
/// byte offset of the next token unknown, so every error here poisons the
/// stream it came from. EOF on a record boundary is *not* an error; the
/// iterator and stream report it as the end of the sequence.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// A wire-level failure: unknown token ID, malformed address length,
    /// or an integer primitive misuse.
    #[error(transparent)]
    Wire(#[from] WireError),

    /// The byte source ended in the middle of a token. `offset` is how
    /// many bytes of the token had been read.
    #[error("byte source ended {offset} bytes into a token")]
    UnexpectedEof { offset: usize },

    /// A token declared a size beyond the configured cap. Guards against
    /// adversarial streams forcing unbounded allocation.
    #[error("token of {size} bytes exceeds the {limit}-byte cap")]
    TokenTooLarge { size: usize, limit: usize },

    /// A token buffer was shorter than its variant's layout requires.
    /// With a correctly sized buffer this cannot happen; it means the
    /// caller handed [`decode_token`](crate::decode_token) a buffer the
    /// sizer never approved.
    #[error("{token} token buffer ends early at byte {offset}")]
    Truncated { token: &'static str, offset: usize },

    /// A trailer token carried the wrong magic constant.
    #[error("trailer magic {found:#06x}, expected 0xb105")]
    BadTrailerMagic { found: u16 },

    /// The first token of a record was not a header variant.
    #[error("record does not begin with a header token (found {found:#04x})")]
    MissingHeader { found: u8 },

    /// The byte source ended between a header and its trailer.
    #[error("byte source ended inside a record")]
    TruncatedRecord,

    /// Propagated from the byte source.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
