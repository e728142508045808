/// Errors produced at the wire level, before any typed token exists.
///
/// Each variant carries enough context to name the offending token and
/// field; with a binary audit trail there is no line number to point at,
/// so the token ID (in hex) and the bad value are the diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// An integer primitive was handed more bytes than its width permits.
    ///
    /// The primitives accept *short* slices (zero-padded on the left), so
    /// this only fires when a caller slices the buffer wrong.
    #[error("{len} bytes do not fit a u{width}")]
    Overflow { width: u32, len: usize },

    /// Token ID not present in the registry.
    ///
    /// Fatal for the rest of the stream: without a registered shape the
    /// token's length is unknowable and the byte offset of the next token
    /// is lost.
    #[error("unknown token id {id:#04x}")]
    UnknownToken { id: u8 },

    /// A declared address length/type was neither 4 (IPv4) nor 16 (IPv6).
    #[error("invalid address length {value} in {token} token")]
    MalformedLength { token: &'static str, value: u64 },
}
