//! String-carrying tokens.
//!
//! On the wire every string is NUL-terminated; decoded values are the raw
//! bytes with the terminator stripped. The format guarantees nothing about
//! encoding, so fields are `Vec<u8>`, not `String`; audit trails from
//! real systems do contain non-UTF-8 path names.

/// The path token (0x23) contains a pathname.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathToken {
    pub token_id: u8,
    /// Declared length, including the NUL.
    pub length: u16,
    pub path: Vec<u8>,
}

/// The path_attr token (0x25) contains an ordered set of pathnames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathAttrToken {
    pub token_id: u8,
    pub count: u16,
    pub paths: Vec<Vec<u8>>,
}

/// The text token (0x28) contains one free-form string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextToken {
    pub token_id: u8,
    /// Declared length, including the NUL.
    pub length: u16,
    pub text: Vec<u8>,
}

/// The zonename token (0x60) names the Solaris zone or FreeBSD jail the
/// record originated from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZonenameToken {
    pub token_id: u8,
    pub length: u16,
    pub name: Vec<u8>,
}

/// The exec_args token (0x3c) contains the argument vector of an exec()
/// call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecArgsToken {
    pub token_id: u8,
    pub count: u32,
    pub args: Vec<Vec<u8>>,
}

/// The exec_env token (0x3d) contains the environment passed to an exec()
/// call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecEnvToken {
    pub token_id: u8,
    pub count: u32,
    pub env: Vec<Vec<u8>>,
}
