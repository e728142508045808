//! Tokens describing system-call arguments, results, and kernel objects.

/// The arg token (0x2d) describes one system-call argument: a 32-bit
/// value with an optional descriptive string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArgToken32 {
    pub token_id: u8,
    pub argument_id: u8,
    pub value: u32,
    /// Declared text length, including the NUL.
    pub length: u16,
    pub text: Vec<u8>,
}

/// The arg token (0x71) carries a 64-bit argument value. Here the
/// declared length excludes the NUL, unlike the 32-bit variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArgToken64 {
    pub token_id: u8,
    pub argument_id: u8,
    pub value: u64,
    pub length: u16,
    pub text: Vec<u8>,
}

/// The return token (0x27) carries errno and a 32-bit return value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReturnToken32 {
    pub token_id: u8,
    /// errno, or 0 on success.
    pub error_number: u8,
    pub return_value: u32,
}

/// Return token (0x72): 64-bit return value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReturnToken64 {
    pub token_id: u8,
    pub error_number: u8,
    pub return_value: u64,
}

/// The exit token (0x52) carries process exit status and return value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExitToken {
    pub token_id: u8,
    pub status: u32,
    /// Two's-complement on the wire; negative exits are meaningful.
    pub return_value: i32,
}

/// The attribute token (0x3e) describes file attributes (mode, owner,
/// filesystem, inode) with a 32-bit device number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeToken32 {
    pub token_id: u8,
    pub file_access_mode: u32,
    pub owner_uid: u32,
    pub owner_gid: u32,
    pub filesystem_id: u32,
    pub node_id: u64,
    pub device: u32,
}

/// Attribute token (0x73): 64-bit device number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeToken64 {
    pub token_id: u8,
    pub file_access_mode: u32,
    pub owner_uid: u32,
    pub owner_gid: u32,
    pub filesystem_id: u32,
    pub node_id: u64,
    pub device: u64,
}

/// The System V IPC token (0x22) holds a message queue, semaphore, or
/// shared memory handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SysvIpcToken {
    pub token_id: u8,
    pub object_type: u8,
    pub object_id: u32,
}

/// The System V IPC permission token (0x32) holds the access permissions
/// attached to an IPC object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SysvIpcPermToken {
    pub token_id: u8,
    pub owner_uid: u32,
    pub owner_gid: u32,
    pub creator_uid: u32,
    pub creator_gid: u32,
    pub access_mode: u32,
    pub sequence_number: u32,
    pub key: u32,
}

/// The seq token (0x2f) carries a monotonically increasing event sequence
/// number. 32 bits wide, so wraparound comparisons need serial-number
/// arithmetic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeqToken {
    pub token_id: u8,
    pub sequence_number: u32,
}

/// The arbitrary data token (0x21) wraps an opaque untyped payload,
/// shaped as `unit_count` items of `unit_size` bytes each. The
/// how-to-print byte is preserved but not interpreted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArbitraryDataToken {
    pub token_id: u8,
    pub how_to_print: u8,
    pub unit_size: u8,
    pub unit_count: u8,
    pub items: Vec<Vec<u8>>,
}
