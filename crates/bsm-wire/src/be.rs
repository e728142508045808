//! Big-endian integer primitives.
//!
//! BSM stores every multi-byte integer in network byte order. These helpers
//! decode from a slice *up to* the target width: a short slice is treated as
//! if zero-padded on the left, so `[0x02]` decodes to 2 as a u16. A slice
//! longer than the width is a caller bug and fails with
//! [`WireError::Overflow`] rather than silently truncating.
//!
//! | Input            | `read_u16` result |
//! |------------------|-------------------|
//! | `[]`             | 0                 |
//! | `[0x02]`         | 2                 |
//! | `[0x01, 0x00]`   | 256               |
//! | `[0x01, 0x00, 0x00]` | error         |

use crate::error::WireError;

/// Decode an unsigned 16-bit big-endian integer from at most 2 bytes.
///
/// # Errors
///
/// [`WireError::Overflow`] if the slice is longer than 2 bytes.
pub fn read_u16(buf: &[u8]) -> Result<u16, WireError> {
    if buf.len() > 2 {
        return Err(WireError::Overflow {
            width: 16,
            len: buf.len(),
        });
    }
    let mut value: u16 = 0;
    for &byte in buf {
        value = value << 8 | u16::from(byte);
    }
    Ok(value)
}

/// Decode an unsigned 32-bit big-endian integer from at most 4 bytes.
///
/// # Errors
///
/// [`WireError::Overflow`] if the slice is longer than 4 bytes.
pub fn read_u32(buf: &[u8]) -> Result<u32, WireError> {
    if buf.len() > 4 {
        return Err(WireError::Overflow {
            width: 32,
            len: buf.len(),
        });
    }
    let mut value: u32 = 0;
    for &byte in buf {
        value = value << 8 | u32::from(byte);
    }
    Ok(value)
}

/// Decode an unsigned 64-bit big-endian integer from at most 8 bytes.
///
/// # Errors
///
/// [`WireError::Overflow`] if the slice is longer than 8 bytes.
pub fn read_u64(buf: &[u8]) -> Result<u64, WireError> {
    if buf.len() > 8 {
        return Err(WireError::Overflow {
            width: 64,
            len: buf.len(),
        });
    }
    let mut value: u64 = 0;
    for &byte in buf {
        value = value << 8 | u64::from(byte);
    }
    Ok(value)
}
