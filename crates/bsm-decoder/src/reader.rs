use std::io::{ErrorKind, Read};

use bsm_types::Token;
use bsm_wire::{token_size, TokenSize};

use crate::decode::decode_token;
use crate::error::DecodeError;

/// Default cap on a single token's total size: 1 MiB.
///
/// Declared lengths are attacker-controlled (a file token can claim a
/// 64 KiB name, arbitrary-data 64 KiB of payload, and the multi-string
/// tokens have no declared bound at all), so allocation is limited before
/// any byte is trusted.
pub const DEFAULT_MAX_TOKEN_SIZE: usize = 1 << 20;

/// Read exactly one token from the byte source.
///
/// Drives the sizer ⇄ read loop: fetch the ID byte, ask the sizer, fetch
/// exactly the bytes it requests, re-ask until the total size is known,
/// fetch the remainder, decode. Short reads from the source are looped
/// over until each precise target is met.
///
/// Returns `Ok(None)` when the source is exhausted *before the first
/// byte*, a clean token boundary. EOF anywhere later in the token is
/// [`DecodeError::UnexpectedEof`].
///
/// # Errors
///
/// Sizer and decoder errors as documented on
/// [`token_size`](bsm_wire::token_size) and
/// [`decode_token`](crate::decode_token), plus
/// [`DecodeError::TokenTooLarge`] when the token would exceed
/// `max_token_size` and [`DecodeError::Io`] from the source.
pub fn read_token<R: Read>(
    reader: &mut R,
    max_token_size: usize,
) -> Result<Option<Token>, DecodeError> {
    let Some(id) = read_first_byte(reader)? else {
        return Ok(None);
    };

    // Fresh buffer per token; decoded values own their bytes and nothing
    // aliases into a previous token.
    let mut buf = vec![id];
    loop {
        match token_size(&buf)? {
            TokenSize::NeedBytes(more) => {
                grow_exact(reader, &mut buf, more, max_token_size)?;
            }
            TokenSize::Complete(size) => {
                if size > max_token_size {
                    return Err(DecodeError::TokenTooLarge {
                        size,
                        limit: max_token_size,
                    });
                }
                let more = size.saturating_sub(buf.len());
                grow_exact(reader, &mut buf, more, max_token_size)?;
                break;
            }
        }
    }

    decode_token(&buf).map(Some)
}

/// Read one byte, or detect EOF on a clean boundary.
fn read_first_byte<R: Read>(reader: &mut R) -> Result<Option<u8>, DecodeError> {
    let mut byte = [0u8; 1];
    loop {
        match reader.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte[0])),
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(DecodeError::Io(e)),
        }
    }
}

/// Append exactly `more` bytes from the source onto `buf`.
///
/// EOF before the target is met is [`DecodeError::UnexpectedEof`] with
/// the number of token bytes read so far. The growing buffer is also held
/// under the size cap, which bounds the multi-string tokens whose sizer
/// requests arrive one byte at a time.
fn grow_exact<R: Read>(
    reader: &mut R,
    buf: &mut Vec<u8>,
    more: usize,
    max_token_size: usize,
) -> Result<(), DecodeError> {
    let target = buf.len() + more;
    if target > max_token_size {
        return Err(DecodeError::TokenTooLarge {
            size: target,
            limit: max_token_size,
        });
    }

    let mut filled = buf.len();
    buf.resize(target, 0);
    while filled < target {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => return Err(DecodeError::UnexpectedEof { offset: filled }),
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(DecodeError::Io(e)),
        }
    }
    Ok(())
}
