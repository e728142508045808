use crate::be::{read_u16, read_u32};
use crate::error::WireError;
use crate::token_id;

/// Outcome of asking the sizer about a prefix of the token stream.
///
/// The reader loop alternates between the sizer and the byte source:
/// [`NeedBytes`](TokenSize::NeedBytes) tells the reader exactly how many
/// more bytes to fetch before asking again, and
/// [`Complete`](TokenSize::Complete) is the final answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenSize {
    /// Total length of the token in bytes, including the ID byte.
    Complete(usize),
    /// Exactly this many more bytes are required before the total length
    /// can be determined.
    NeedBytes(usize),
}

/// Sizes of an IPv4- vs IPv6-bearing variant of an address-carrying token.
///
/// Any declared length other than 4 or 16 is malformed; the format knows
/// no other address families.
fn sized_by_address(
    token: &'static str,
    length: u64,
    v4_total: usize,
    v6_total: usize,
) -> Result<TokenSize, WireError> {
    match length {
        4 => Ok(TokenSize::Complete(v4_total)),
        16 => Ok(TokenSize::Complete(v6_total)),
        value => Err(WireError::MalformedLength { token, value }),
    }
}

/// Count NUL bytes in a payload; the multi-string tokens are delimited by
/// them and declare only how many strings to expect.
fn nul_count(payload: &[u8]) -> usize {
    payload.iter().filter(|&&b| b == 0x00).count()
}

/// Determine the total size of the token starting at `buf[0]`.
///
/// `buf` is a prefix of the token stream. Three outcomes:
///
/// - `Ok(Complete(n))`: the token occupies exactly `n` bytes.
/// - `Ok(NeedBytes(m))`: supply `m` more bytes and ask again. For most
///   variable-length tokens one round trip reaches the interior length
///   field; the multi-string tokens (0x25, 0x3c, 0x3d) carry no byte
///   length at all and are grown one byte at a time until the declared
///   number of NUL terminators has appeared.
/// - `Err`: unknown token ID, or a declared address length outside
///   {4, 16}.
///
/// The empty prefix asks for one byte (the token ID).
///
/// # Errors
///
/// [`WireError::UnknownToken`] and [`WireError::MalformedLength`] as
/// described above.
#[allow(clippy::too_many_lines)]
pub fn token_size(buf: &[u8]) -> Result<TokenSize, WireError> {
    if buf.is_empty() {
        return Ok(TokenSize::NeedBytes(1));
    }

    let size = match buf[0] {
        // file: seconds(4) + microseconds(4) + name length(2), then the
        // name and its NUL. The declared length excludes the NUL.
        token_id::FILE => {
            if buf.len() < 11 {
                return Ok(TokenSize::NeedBytes(11 - buf.len()));
            }
            let name_len = read_u16(&buf[9..11])?;
            11 + usize::from(name_len) + 1
        }

        token_id::TRAILER => 7,
        token_id::HEADER_32 => 18,
        token_id::HEADER_64 => 26,

        // Expanded headers carry a 4-byte address type at offset 10,
        // after record byte count(4) + version(1) + event type(2) +
        // modifier(2). The timestamps follow the address.
        token_id::EXPANDED_HEADER_32 => {
            if buf.len() < 14 {
                return Ok(TokenSize::NeedBytes(14 - buf.len()));
            }
            let address_type = read_u32(&buf[10..14])?;
            return sized_by_address("expanded header32", u64::from(address_type), 26, 38);
        }
        token_id::EXPANDED_HEADER_64 => {
            if buf.len() < 14 {
                return Ok(TokenSize::NeedBytes(14 - buf.len()));
            }
            let address_type = read_u32(&buf[10..14])?;
            return sized_by_address("expanded header64", u64::from(address_type), 34, 46);
        }

        // arbitrary data: how-to-print(1) + unit size(1) + unit count(1),
        // then unit_size * unit_count bytes of payload.
        token_id::ARBITRARY_DATA => {
            if buf.len() < 4 {
                return Ok(TokenSize::NeedBytes(4 - buf.len()));
            }
            4 + usize::from(buf[2]) * usize::from(buf[3])
        }

        token_id::SYSV_IPC => 6,

        // The single-string tokens declare their length (NUL included)
        // in a u16 right after the ID.
        token_id::PATH | token_id::TEXT | token_id::ZONENAME => {
            if buf.len() < 3 {
                return Ok(TokenSize::NeedBytes(3 - buf.len()));
            }
            3 + usize::from(read_u16(&buf[1..3])?)
        }

        token_id::SUBJECT_32 | token_id::PROCESS_32 => 37,
        token_id::SUBJECT_64 | token_id::PROCESS_64 => 41,

        // path_attr declares a string count (u16) and nothing about byte
        // length; the token ends once `count` NULs have been seen.
        token_id::PATH_ATTR => {
            if buf.len() < 3 {
                return Ok(TokenSize::NeedBytes(3 - buf.len()));
            }
            let count = usize::from(read_u16(&buf[1..3])?);
            if nul_count(&buf[3..]) < count {
                return Ok(TokenSize::NeedBytes(1));
            }
            buf.len()
        }

        // exec args / exec env: same NUL-terminated scheme with a u32 count.
        token_id::EXEC_ARGS | token_id::EXEC_ENV => {
            if buf.len() < 5 {
                return Ok(TokenSize::NeedBytes(5 - buf.len()));
            }
            let count = read_u32(&buf[1..5])? as usize;
            if nul_count(&buf[5..]) < count {
                return Ok(TokenSize::NeedBytes(1));
            }
            buf.len()
        }

        token_id::RETURN_32 => 6,
        token_id::RETURN_64 => 10,
        token_id::IN_ADDR => 5,
        token_id::EXPANDED_IN_ADDR => 18,
        token_id::IP => 21,
        token_id::IPORT => 3,

        // arg tokens declare the text length after the argument number and
        // value. The 32-bit variant's length covers the NUL, the 64-bit
        // variant's does not; this asymmetry is the format's, not ours.
        token_id::ARG_32 => {
            if buf.len() < 8 {
                return Ok(TokenSize::NeedBytes(8 - buf.len()));
            }
            8 + usize::from(read_u16(&buf[6..8])?)
        }
        token_id::ARG_64 => {
            if buf.len() < 12 {
                return Ok(TokenSize::NeedBytes(12 - buf.len()));
            }
            12 + usize::from(read_u16(&buf[10..12])?) + 1
        }

        token_id::SOCKET | token_id::SOCKET_INET32 | token_id::SOCKET_UNIX => 9,
        token_id::SOCKET_INET128 => 21,
        token_id::SEQ => 5,
        token_id::SYSV_IPC_PERM => 29,

        token_id::GROUPS => {
            if buf.len() < 3 {
                return Ok(TokenSize::NeedBytes(3 - buf.len()));
            }
            3 + usize::from(read_u16(&buf[1..3])?) * 4
        }

        token_id::ATTRIBUTE_32 => 29,
        token_id::ATTRIBUTE_64 => 33,
        token_id::EXIT => 9,

        // Expanded subject/process, 32-bit port: the terminal address
        // length is a u32 at offset 33, after eight u32 credential fields.
        token_id::EXPANDED_SUBJECT_32 => {
            if buf.len() < 37 {
                return Ok(TokenSize::NeedBytes(37 - buf.len()));
            }
            let length = read_u32(&buf[33..37])?;
            return sized_by_address("expanded subject32", u64::from(length), 41, 53);
        }
        token_id::EXPANDED_PROCESS_32 => {
            if buf.len() < 37 {
                return Ok(TokenSize::NeedBytes(37 - buf.len()));
            }
            let length = read_u32(&buf[33..37])?;
            return sized_by_address("expanded process32", u64::from(length), 41, 53);
        }

        // The 64-bit-port variants store the address length as a single
        // byte at offset 37, unlike their 32-bit counterparts.
        token_id::EXPANDED_SUBJECT_64 => {
            if buf.len() < 38 {
                return Ok(TokenSize::NeedBytes(38 - buf.len()));
            }
            return sized_by_address("expanded subject64", u64::from(buf[37]), 42, 54);
        }
        token_id::EXPANDED_PROCESS_64 => {
            if buf.len() < 38 {
                return Ok(TokenSize::NeedBytes(38 - buf.len()));
            }
            return sized_by_address("expanded process64", u64::from(buf[37]), 42, 54);
        }

        // expanded socket: domain(2) + type(2) + address type(2), then a
        // port + address pair for each endpoint.
        token_id::EXPANDED_SOCKET => {
            if buf.len() < 7 {
                return Ok(TokenSize::NeedBytes(7 - buf.len()));
            }
            let address_type = read_u16(&buf[5..7])?;
            return sized_by_address("expanded socket", u64::from(address_type), 19, 43);
        }

        id => return Err(WireError::UnknownToken { id }),
    };

    Ok(TokenSize::Complete(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_prefix_asks_for_the_id_byte() {
        assert_eq!(token_size(&[]).unwrap(), TokenSize::NeedBytes(1));
    }

    #[test]
    fn fixed_sizes() {
        let expected: &[(u8, usize)] = &[
            (0x13, 7),
            (0x14, 18),
            (0x22, 6),
            (0x24, 37),
            (0x26, 37),
            (0x27, 6),
            (0x2a, 5),
            (0x2b, 21),
            (0x2c, 3),
            (0x2e, 9),
            (0x2f, 5),
            (0x32, 29),
            (0x3e, 29),
            (0x52, 9),
            (0x72, 10),
            (0x73, 33),
            (0x74, 26),
            (0x75, 41),
            (0x77, 41),
            (0x7e, 18),
            (0x80, 9),
            (0x81, 21),
            (0x82, 9),
        ];
        for &(id, size) in expected {
            assert_eq!(
                token_size(&[id]).unwrap(),
                TokenSize::Complete(size),
                "token {id:#04x}"
            );
        }
    }

    #[test]
    fn file_token_two_phase() {
        // The bare ID cannot be sized: the name length lives at offset 9.
        assert_eq!(token_size(&[0x11]).unwrap(), TokenSize::NeedBytes(10));

        let prefix = [
            0x11, // token ID
            0x00, 0x01, 0x02, 0x03, // seconds
            0x04, 0x05, 0x06, 0x07, // microseconds
            0x23, 0xf8, // name length = 9208
        ];
        assert_eq!(
            token_size(&prefix).unwrap(),
            TokenSize::Complete(11 + 9208 + 1)
        );
    }

    #[test]
    fn string_tokens_include_their_nul_in_the_declared_length() {
        for id in [0x23u8, 0x28, 0x60] {
            assert_eq!(token_size(&[id]).unwrap(), TokenSize::NeedBytes(2));
            assert_eq!(
                token_size(&[id, 0x00, 0x06]).unwrap(),
                TokenSize::Complete(9),
                "token {id:#04x}"
            );
        }
    }

    #[test]
    fn arg_tokens() {
        assert_eq!(token_size(&[0x2d]).unwrap(), TokenSize::NeedBytes(7));
        let arg32 = [0x2d, 0x01, 0, 0, 0, 0, 0x00, 0x05];
        assert_eq!(token_size(&arg32).unwrap(), TokenSize::Complete(13));

        assert_eq!(token_size(&[0x71]).unwrap(), TokenSize::NeedBytes(11));
        let arg64 = [0x71, 0x01, 0, 0, 0, 0, 0, 0, 0, 0, 0x00, 0x05];
        assert_eq!(token_size(&arg64).unwrap(), TokenSize::Complete(18));
    }

    #[test]
    fn arbitrary_data_scales_with_unit_count() {
        assert_eq!(token_size(&[0x21]).unwrap(), TokenSize::NeedBytes(3));
        assert_eq!(
            token_size(&[0x21, 0x00, 0x04, 0x03]).unwrap(),
            TokenSize::Complete(4 + 12)
        );
    }

    #[test]
    fn groups_scale_with_count() {
        assert_eq!(
            token_size(&[0x34, 0x00, 0x05]).unwrap(),
            TokenSize::Complete(3 + 20)
        );
    }

    #[test]
    fn expanded_subject32_rejects_bad_address_length() {
        let mut buf = vec![0x7a];
        buf.extend_from_slice(&[0x00; 32]); // eight u32 credential fields
        buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]); // address length = 0
        buf.extend_from_slice(&[0x00, 0x01, 0x02, 0x03]); // address bytes

        let err = token_size(&buf).unwrap_err();
        assert!(matches!(
            err,
            WireError::MalformedLength {
                token: "expanded subject32",
                value: 0,
            }
        ));

        buf[36] = 4; // IPv4
        assert_eq!(token_size(&buf).unwrap(), TokenSize::Complete(41));
    }

    #[test]
    fn expanded_subject64_reads_one_byte_length() {
        assert_eq!(token_size(&[0x7c]).unwrap(), TokenSize::NeedBytes(37));

        let mut buf = vec![0x7c];
        buf.extend_from_slice(&[0x00; 32]); // credentials
        buf.extend_from_slice(&[0x00; 4]); // low half of the u64 port
        buf.push(16); // address length
        assert_eq!(token_size(&buf).unwrap(), TokenSize::Complete(54));

        buf[37] = 9;
        assert!(matches!(
            token_size(&buf),
            Err(WireError::MalformedLength {
                token: "expanded subject64",
                value: 9,
            })
        ));
    }

    #[test]
    fn expanded_headers() {
        assert_eq!(token_size(&[0x15]).unwrap(), TokenSize::NeedBytes(13));

        let mut buf = vec![0x15];
        buf.extend_from_slice(&[0x00; 9]); // byte count, version, type, modifier
        buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x04]); // address type = IPv4
        assert_eq!(token_size(&buf).unwrap(), TokenSize::Complete(26));

        buf[0] = 0x79;
        buf[13] = 16; // IPv6
        assert_eq!(token_size(&buf).unwrap(), TokenSize::Complete(46));

        buf[13] = 7;
        assert!(matches!(
            token_size(&buf),
            Err(WireError::MalformedLength { value: 7, .. })
        ));
    }

    #[test]
    fn expanded_socket() {
        let mut buf = vec![0x7f, 0x00, 0x02, 0x00, 0x01];
        buf.extend_from_slice(&[0x00, 0x04]); // address type = IPv4
        assert_eq!(token_size(&buf).unwrap(), TokenSize::Complete(19));
        buf[6] = 16;
        assert_eq!(token_size(&buf).unwrap(), TokenSize::Complete(43));
    }

    #[test]
    fn multi_string_tokens_grow_until_enough_nuls() {
        // path_attr declaring 2 strings
        let mut buf = vec![0x25, 0x00, 0x02];
        assert_eq!(token_size(&buf).unwrap(), TokenSize::NeedBytes(1));
        buf.extend_from_slice(b"/a\0");
        assert_eq!(token_size(&buf).unwrap(), TokenSize::NeedBytes(1));
        buf.extend_from_slice(b"/b\0");
        assert_eq!(token_size(&buf).unwrap(), TokenSize::Complete(buf.len()));

        // exec args declaring 1 string, u32 count
        let mut buf = vec![0x3c, 0x00, 0x00, 0x00, 0x01];
        assert_eq!(token_size(&buf).unwrap(), TokenSize::NeedBytes(1));
        buf.extend_from_slice(b"/bin/sh\0");
        assert_eq!(token_size(&buf).unwrap(), TokenSize::Complete(buf.len()));
    }

    #[test]
    fn unknown_id_is_an_error() {
        assert!(matches!(
            token_size(&[0xff]),
            Err(WireError::UnknownToken { id: 0xff })
        ));
        assert!(matches!(
            token_size(&[0x00]),
            Err(WireError::UnknownToken { id: 0x00 })
        ));
    }

    #[test]
    fn need_bytes_shrinks_as_the_prefix_grows() {
        // For every registered ID, feeding the sizer one byte at a time
        // must never increase the outstanding request, and must terminate.
        for &id in crate::token_id::ALL {
            let mut buf = vec![id];
            let mut last_need = usize::MAX;
            loop {
                match token_size(&buf) {
                    Ok(TokenSize::Complete(size)) => {
                        assert!(size >= buf.len(), "token {id:#04x} shrank below its prefix");
                        break;
                    }
                    Ok(TokenSize::NeedBytes(n)) => {
                        assert!(n > 0, "token {id:#04x} asked for zero bytes");
                        assert!(n <= last_need, "token {id:#04x} request grew");
                        last_need = n;
                        // Supply zeroes; for the address-length tokens this
                        // eventually errors, which also terminates the walk.
                        buf.push(0x00);
                        if buf.len() > 64 {
                            // Multi-string tokens with a zero count complete
                            // immediately; nothing should still be pending
                            // this deep into a zero-filled prefix.
                            panic!("token {id:#04x} never settled");
                        }
                    }
                    Err(WireError::MalformedLength { .. }) => break,
                    Err(e) => panic!("token {id:#04x}: unexpected error {e}"),
                }
            }
        }
    }
}
