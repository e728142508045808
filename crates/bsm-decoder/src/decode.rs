use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use bsm_types::header::{
    ExpandedHeaderToken32, ExpandedHeaderToken64, FileToken, HeaderToken32, HeaderToken64,
    TrailerToken,
};
use bsm_types::net::{
    ExpandedInAddrToken, ExpandedSocketToken, InAddrToken, IpToken, IportToken, SocketToken,
};
use bsm_types::subject::{
    ExpandedProcessToken32, ExpandedProcessToken64, ExpandedSubjectToken32,
    ExpandedSubjectToken64, GroupsToken, ProcessToken32, ProcessToken64, SubjectToken32,
    SubjectToken64,
};
use bsm_types::syscall::{
    ArbitraryDataToken, ArgToken32, ArgToken64, AttributeToken32, AttributeToken64, ExitToken,
    ReturnToken32, ReturnToken64, SeqToken, SysvIpcPermToken, SysvIpcToken,
};
use bsm_types::text::{
    ExecArgsToken, ExecEnvToken, PathAttrToken, PathToken, TextToken, ZonenameToken,
};
use bsm_types::Token;
use bsm_wire::{be, token_id, WireError};

use crate::error::DecodeError;

/// Bounds-checked positional reader over a single token's buffer.
///
/// Every field access goes through here so that a buffer shorter than the
/// variant's layout surfaces as [`DecodeError::Truncated`] instead of a
/// panic; [`decode_token`] must be total over arbitrary input.
struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
    token: &'static str,
}

impl<'a> Cursor<'a> {
    fn new(buf: &'a [u8], token: &'static str) -> Self {
        // Position 1: the ID byte was matched by the caller.
        Self { buf, pos: 1, token }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        let end = self.pos.checked_add(n).filter(|&end| end <= self.buf.len());
        match end {
            Some(end) => {
                let slice = &self.buf[self.pos..end];
                self.pos = end;
                Ok(slice)
            }
            None => Err(DecodeError::Truncated {
                token: self.token,
                offset: self.buf.len(),
            }),
        }
    }

    fn u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.take(1)?[0])
    }

    fn u16(&mut self) -> Result<u16, DecodeError> {
        Ok(be::read_u16(self.take(2)?)?)
    }

    fn u32(&mut self) -> Result<u32, DecodeError> {
        Ok(be::read_u32(self.take(4)?)?)
    }

    fn u64(&mut self) -> Result<u64, DecodeError> {
        Ok(be::read_u64(self.take(8)?)?)
    }

    fn ipv4(&mut self) -> Result<Ipv4Addr, DecodeError> {
        let bytes: [u8; 4] = self.take(4)?.try_into().expect("slice is 4 bytes");
        Ok(Ipv4Addr::from(bytes))
    }

    fn ipv6(&mut self) -> Result<Ipv6Addr, DecodeError> {
        let bytes: [u8; 16] = self.take(16)?.try_into().expect("slice is 16 bytes");
        Ok(Ipv6Addr::from(bytes))
    }

    /// Read an address whose declared length must be 4 or 16.
    fn addr(&mut self, length: u64) -> Result<IpAddr, DecodeError> {
        match length {
            4 => Ok(IpAddr::V4(self.ipv4()?)),
            16 => Ok(IpAddr::V6(self.ipv6()?)),
            value => Err(WireError::MalformedLength {
                token: self.token,
                value,
            }
            .into()),
        }
    }

    /// Read a NUL-terminated string field of `declared` wire bytes where
    /// the declared length covers the terminator.
    fn string(&mut self, declared: u16) -> Result<Vec<u8>, DecodeError> {
        let declared = usize::from(declared);
        if declared == 0 {
            return Ok(Vec::new());
        }
        let bytes = self.take(declared)?;
        Ok(bytes[..declared - 1].to_vec())
    }

    fn remaining(&mut self) -> &'a [u8] {
        let rest = &self.buf[self.pos..];
        self.pos = self.buf.len();
        rest
    }
}

/// Split a payload of NUL-terminated strings, dropping the empty element
/// a terminating NUL leaves behind.
fn split_strings(payload: &[u8]) -> Vec<Vec<u8>> {
    let mut strings: Vec<Vec<u8>> = payload.split(|&b| b == 0x00).map(<[u8]>::to_vec).collect();
    if strings.last().is_some_and(Vec::is_empty) {
        strings.pop();
    }
    strings
}

/// Decode one token from a buffer whose first byte is the token ID and
/// whose length is what the sizer reported for it.
///
/// The returned value's `token_id()` always equals `buf[0]`. The function
/// is total: any buffer, including one of the wrong length, produces a
/// token or an error, never a panic.
///
/// # Errors
///
/// - [`WireError::UnknownToken`] for an unregistered ID.
/// - [`WireError::MalformedLength`] for an address length outside {4, 16}.
/// - [`DecodeError::BadTrailerMagic`] for a trailer without 0xb105.
/// - [`DecodeError::Truncated`] if the buffer is shorter than the
///   variant's layout (a sizing bug in the caller).
#[allow(clippy::too_many_lines, clippy::missing_panics_doc)]
pub fn decode_token(buf: &[u8]) -> Result<Token, DecodeError> {
    let id = *buf.first().ok_or(DecodeError::UnexpectedEof { offset: 0 })?;
    match id {
        token_id::HEADER_32 => {
            let mut cur = Cursor::new(buf, "header32");
            Ok(Token::Header32(HeaderToken32 {
                token_id: id,
                record_byte_count: cur.u32()?,
                version: cur.u8()?,
                event_type: cur.u16()?,
                event_modifier: cur.u16()?,
                seconds: cur.u32()?,
                nanoseconds: cur.u32()?,
            }))
        }

        token_id::HEADER_64 => {
            let mut cur = Cursor::new(buf, "header64");
            Ok(Token::Header64(HeaderToken64 {
                token_id: id,
                record_byte_count: cur.u32()?,
                version: cur.u8()?,
                event_type: cur.u16()?,
                event_modifier: cur.u16()?,
                seconds: cur.u64()?,
                nanoseconds: cur.u64()?,
            }))
        }

        token_id::EXPANDED_HEADER_32 => {
            let mut cur = Cursor::new(buf, "expanded header32");
            let record_byte_count = cur.u32()?;
            let version = cur.u8()?;
            let event_type = cur.u16()?;
            let event_modifier = cur.u16()?;
            let address_type = cur.u32()?;
            let machine_address = cur.addr(u64::from(address_type))?;
            Ok(Token::ExpandedHeader32(ExpandedHeaderToken32 {
                token_id: id,
                record_byte_count,
                version,
                event_type,
                event_modifier,
                address_type,
                machine_address,
                seconds: cur.u32()?,
                nanoseconds: cur.u32()?,
            }))
        }

        token_id::EXPANDED_HEADER_64 => {
            let mut cur = Cursor::new(buf, "expanded header64");
            let record_byte_count = cur.u32()?;
            let version = cur.u8()?;
            let event_type = cur.u16()?;
            let event_modifier = cur.u16()?;
            let address_type = cur.u32()?;
            let machine_address = cur.addr(u64::from(address_type))?;
            Ok(Token::ExpandedHeader64(ExpandedHeaderToken64 {
                token_id: id,
                record_byte_count,
                version,
                event_type,
                event_modifier,
                address_type,
                machine_address,
                seconds: cur.u64()?,
                nanoseconds: cur.u64()?,
            }))
        }

        token_id::TRAILER => {
            let mut cur = Cursor::new(buf, "trailer");
            let magic = cur.u16()?;
            if magic != token_id::TRAILER_MAGIC {
                return Err(DecodeError::BadTrailerMagic { found: magic });
            }
            Ok(Token::Trailer(TrailerToken {
                token_id: id,
                magic,
                record_byte_count: cur.u32()?,
            }))
        }

        token_id::FILE => {
            let mut cur = Cursor::new(buf, "file");
            let seconds = cur.u32()?;
            let microseconds = cur.u32()?;
            let name_length = cur.u16()?;
            // Declared length excludes the NUL here; take the name and
            // leave the terminator in the buffer.
            let name = cur.take(usize::from(name_length))?.to_vec();
            Ok(Token::File(FileToken {
                token_id: id,
                seconds,
                microseconds,
                name_length,
                name,
            }))
        }

        token_id::ARBITRARY_DATA => {
            let mut cur = Cursor::new(buf, "arbitrary data");
            let how_to_print = cur.u8()?;
            let unit_size = cur.u8()?;
            let unit_count = cur.u8()?;
            let mut items = Vec::with_capacity(usize::from(unit_count));
            for _ in 0..unit_count {
                items.push(cur.take(usize::from(unit_size))?.to_vec());
            }
            Ok(Token::ArbitraryData(ArbitraryDataToken {
                token_id: id,
                how_to_print,
                unit_size,
                unit_count,
                items,
            }))
        }

        token_id::SYSV_IPC => {
            let mut cur = Cursor::new(buf, "System V IPC");
            Ok(Token::SysvIpc(SysvIpcToken {
                token_id: id,
                object_type: cur.u8()?,
                object_id: cur.u32()?,
            }))
        }

        token_id::SYSV_IPC_PERM => {
            let mut cur = Cursor::new(buf, "System V IPC permission");
            Ok(Token::SysvIpcPerm(SysvIpcPermToken {
                token_id: id,
                owner_uid: cur.u32()?,
                owner_gid: cur.u32()?,
                creator_uid: cur.u32()?,
                creator_gid: cur.u32()?,
                access_mode: cur.u32()?,
                sequence_number: cur.u32()?,
                key: cur.u32()?,
            }))
        }

        token_id::PATH => {
            let mut cur = Cursor::new(buf, "path");
            let length = cur.u16()?;
            Ok(Token::Path(PathToken {
                token_id: id,
                length,
                path: cur.string(length)?,
            }))
        }

        token_id::TEXT => {
            let mut cur = Cursor::new(buf, "text");
            let length = cur.u16()?;
            Ok(Token::Text(TextToken {
                token_id: id,
                length,
                text: cur.string(length)?,
            }))
        }

        token_id::ZONENAME => {
            let mut cur = Cursor::new(buf, "zonename");
            let length = cur.u16()?;
            Ok(Token::Zonename(ZonenameToken {
                token_id: id,
                length,
                name: cur.string(length)?,
            }))
        }

        token_id::PATH_ATTR => {
            let mut cur = Cursor::new(buf, "path_attr");
            let count = cur.u16()?;
            Ok(Token::PathAttr(PathAttrToken {
                token_id: id,
                count,
                paths: split_strings(cur.remaining()),
            }))
        }

        token_id::EXEC_ARGS => {
            let mut cur = Cursor::new(buf, "exec_args");
            let count = cur.u32()?;
            Ok(Token::ExecArgs(ExecArgsToken {
                token_id: id,
                count,
                args: split_strings(cur.remaining()),
            }))
        }

        token_id::EXEC_ENV => {
            let mut cur = Cursor::new(buf, "exec_env");
            let count = cur.u32()?;
            Ok(Token::ExecEnv(ExecEnvToken {
                token_id: id,
                count,
                env: split_strings(cur.remaining()),
            }))
        }

        token_id::SUBJECT_32 => {
            let mut cur = Cursor::new(buf, "subject32");
            Ok(Token::Subject32(SubjectToken32 {
                token_id: id,
                audit_id: cur.u32()?,
                effective_uid: cur.u32()?,
                effective_gid: cur.u32()?,
                real_uid: cur.u32()?,
                real_gid: cur.u32()?,
                process_id: cur.u32()?,
                session_id: cur.u32()?,
                terminal_port: cur.u32()?,
                terminal_address: cur.ipv4()?,
            }))
        }

        token_id::SUBJECT_64 => {
            let mut cur = Cursor::new(buf, "subject64");
            Ok(Token::Subject64(SubjectToken64 {
                token_id: id,
                audit_id: cur.u32()?,
                effective_uid: cur.u32()?,
                effective_gid: cur.u32()?,
                real_uid: cur.u32()?,
                real_gid: cur.u32()?,
                process_id: cur.u32()?,
                session_id: cur.u32()?,
                terminal_port: cur.u64()?,
                terminal_address: cur.ipv4()?,
            }))
        }

        token_id::PROCESS_32 => {
            let mut cur = Cursor::new(buf, "process32");
            Ok(Token::Process32(ProcessToken32 {
                token_id: id,
                audit_id: cur.u32()?,
                effective_uid: cur.u32()?,
                effective_gid: cur.u32()?,
                real_uid: cur.u32()?,
                real_gid: cur.u32()?,
                process_id: cur.u32()?,
                session_id: cur.u32()?,
                terminal_port: cur.u32()?,
                terminal_address: cur.ipv4()?,
            }))
        }

        token_id::PROCESS_64 => {
            let mut cur = Cursor::new(buf, "process64");
            Ok(Token::Process64(ProcessToken64 {
                token_id: id,
                audit_id: cur.u32()?,
                effective_uid: cur.u32()?,
                effective_gid: cur.u32()?,
                real_uid: cur.u32()?,
                real_gid: cur.u32()?,
                process_id: cur.u32()?,
                session_id: cur.u32()?,
                terminal_port: cur.u64()?,
                terminal_address: cur.ipv4()?,
            }))
        }

        token_id::EXPANDED_SUBJECT_32 => {
            let mut cur = Cursor::new(buf, "expanded subject32");
            let audit_id = cur.u32()?;
            let effective_uid = cur.u32()?;
            let effective_gid = cur.u32()?;
            let real_uid = cur.u32()?;
            let real_gid = cur.u32()?;
            let process_id = cur.u32()?;
            let session_id = cur.u32()?;
            let terminal_port = cur.u32()?;
            let address_length = cur.u32()?;
            let terminal_address = cur.addr(u64::from(address_length))?;
            Ok(Token::ExpandedSubject32(ExpandedSubjectToken32 {
                token_id: id,
                audit_id,
                effective_uid,
                effective_gid,
                real_uid,
                real_gid,
                process_id,
                session_id,
                terminal_port,
                address_length,
                terminal_address,
            }))
        }

        token_id::EXPANDED_SUBJECT_64 => {
            let mut cur = Cursor::new(buf, "expanded subject64");
            let audit_id = cur.u32()?;
            let effective_uid = cur.u32()?;
            let effective_gid = cur.u32()?;
            let real_uid = cur.u32()?;
            let real_gid = cur.u32()?;
            let process_id = cur.u32()?;
            let session_id = cur.u32()?;
            let terminal_port = cur.u64()?;
            let address_length = cur.u8()?;
            let terminal_address = cur.addr(u64::from(address_length))?;
            Ok(Token::ExpandedSubject64(ExpandedSubjectToken64 {
                token_id: id,
                audit_id,
                effective_uid,
                effective_gid,
                real_uid,
                real_gid,
                process_id,
                session_id,
                terminal_port,
                address_length,
                terminal_address,
            }))
        }

        token_id::EXPANDED_PROCESS_32 => {
            let mut cur = Cursor::new(buf, "expanded process32");
            let audit_id = cur.u32()?;
            let effective_uid = cur.u32()?;
            let effective_gid = cur.u32()?;
            let real_uid = cur.u32()?;
            let real_gid = cur.u32()?;
            let process_id = cur.u32()?;
            let session_id = cur.u32()?;
            let terminal_port = cur.u32()?;
            let address_length = cur.u32()?;
            let terminal_address = cur.addr(u64::from(address_length))?;
            Ok(Token::ExpandedProcess32(ExpandedProcessToken32 {
                token_id: id,
                audit_id,
                effective_uid,
                effective_gid,
                real_uid,
                real_gid,
                process_id,
                session_id,
                terminal_port,
                address_length,
                terminal_address,
            }))
        }

        token_id::EXPANDED_PROCESS_64 => {
            let mut cur = Cursor::new(buf, "expanded process64");
            let audit_id = cur.u32()?;
            let effective_uid = cur.u32()?;
            let effective_gid = cur.u32()?;
            let real_uid = cur.u32()?;
            let real_gid = cur.u32()?;
            let process_id = cur.u32()?;
            let session_id = cur.u32()?;
            let terminal_port = cur.u64()?;
            let address_length = cur.u8()?;
            let terminal_address = cur.addr(u64::from(address_length))?;
            Ok(Token::ExpandedProcess64(ExpandedProcessToken64 {
                token_id: id,
                audit_id,
                effective_uid,
                effective_gid,
                real_uid,
                real_gid,
                process_id,
                session_id,
                terminal_port,
                address_length,
                terminal_address,
            }))
        }

        token_id::RETURN_32 => {
            let mut cur = Cursor::new(buf, "return32");
            Ok(Token::Return32(ReturnToken32 {
                token_id: id,
                error_number: cur.u8()?,
                return_value: cur.u32()?,
            }))
        }

        token_id::RETURN_64 => {
            let mut cur = Cursor::new(buf, "return64");
            Ok(Token::Return64(ReturnToken64 {
                token_id: id,
                error_number: cur.u8()?,
                return_value: cur.u64()?,
            }))
        }

        token_id::IN_ADDR => {
            let mut cur = Cursor::new(buf, "in_addr");
            Ok(Token::InAddr(InAddrToken {
                token_id: id,
                address: cur.ipv4()?,
            }))
        }

        // The wire slot is 16 bytes regardless of the declared type; an
        // IPv4 address occupies the first four.
        token_id::EXPANDED_IN_ADDR => {
            let mut cur = Cursor::new(buf, "expanded in_addr");
            let address_type = cur.u8()?;
            let slot = cur.take(16)?;
            let address = match address_type {
                4 => IpAddr::V4(Ipv4Addr::from(
                    <[u8; 4]>::try_from(&slot[..4]).expect("slot is 16 bytes"),
                )),
                16 => IpAddr::V6(Ipv6Addr::from(
                    <[u8; 16]>::try_from(slot).expect("slot is 16 bytes"),
                )),
                value => {
                    return Err(WireError::MalformedLength {
                        token: "expanded in_addr",
                        value: u64::from(value),
                    }
                    .into())
                }
            };
            Ok(Token::ExpandedInAddr(ExpandedInAddrToken {
                token_id: id,
                address_type,
                address,
            }))
        }

        token_id::IP => {
            let mut cur = Cursor::new(buf, "ip");
            Ok(Token::Ip(IpToken {
                token_id: id,
                version_and_ihl: cur.u8()?,
                type_of_service: cur.u8()?,
                length: cur.u16()?,
                id: cur.u16()?,
                offset: cur.u16()?,
                ttl: cur.u8()?,
                protocol: cur.u8()?,
                checksum: cur.u16()?,
                source: cur.ipv4()?,
                destination: cur.ipv4()?,
            }))
        }

        token_id::IPORT => {
            let mut cur = Cursor::new(buf, "iport");
            Ok(Token::Iport(IportToken {
                token_id: id,
                port: cur.u16()?,
            }))
        }

        token_id::ARG_32 => {
            let mut cur = Cursor::new(buf, "arg32");
            let argument_id = cur.u8()?;
            let value = cur.u32()?;
            let length = cur.u16()?;
            Ok(Token::Arg32(ArgToken32 {
                token_id: id,
                argument_id,
                value,
                length,
                text: cur.string(length)?,
            }))
        }

        // arg64's declared length excludes the NUL, so the text is the
        // full declared run and the terminator sits after it.
        token_id::ARG_64 => {
            let mut cur = Cursor::new(buf, "arg64");
            let argument_id = cur.u8()?;
            let value = cur.u64()?;
            let length = cur.u16()?;
            let text = cur.take(usize::from(length))?.to_vec();
            Ok(Token::Arg64(ArgToken64 {
                token_id: id,
                argument_id,
                value,
                length,
                text,
            }))
        }

        token_id::SOCKET | token_id::SOCKET_INET32 | token_id::SOCKET_UNIX => {
            let mut cur = Cursor::new(buf, "socket");
            Ok(Token::Socket(SocketToken {
                token_id: id,
                family: cur.u16()?,
                local_port: cur.u16()?,
                address: IpAddr::V4(cur.ipv4()?),
            }))
        }

        token_id::SOCKET_INET128 => {
            let mut cur = Cursor::new(buf, "socket");
            Ok(Token::Socket(SocketToken {
                token_id: id,
                family: cur.u16()?,
                local_port: cur.u16()?,
                address: IpAddr::V6(cur.ipv6()?),
            }))
        }

        token_id::EXPANDED_SOCKET => {
            let mut cur = Cursor::new(buf, "expanded socket");
            let domain = cur.u16()?;
            let socket_type = cur.u16()?;
            let address_type = cur.u16()?;
            let local_port = cur.u16()?;
            let local_address = cur.addr(u64::from(address_type))?;
            let remote_port = cur.u16()?;
            let remote_address = cur.addr(u64::from(address_type))?;
            Ok(Token::ExpandedSocket(ExpandedSocketToken {
                token_id: id,
                domain,
                socket_type,
                address_type,
                local_port,
                local_address,
                remote_port,
                remote_address,
            }))
        }

        token_id::SEQ => {
            let mut cur = Cursor::new(buf, "seq");
            Ok(Token::Seq(SeqToken {
                token_id: id,
                sequence_number: cur.u32()?,
            }))
        }

        token_id::GROUPS => {
            let mut cur = Cursor::new(buf, "groups");
            let count = cur.u16()?;
            let mut groups = Vec::with_capacity(usize::from(count));
            for _ in 0..count {
                groups.push(cur.u32()?);
            }
            Ok(Token::Groups(GroupsToken {
                token_id: id,
                count,
                groups,
            }))
        }

        token_id::ATTRIBUTE_32 => {
            let mut cur = Cursor::new(buf, "attribute32");
            Ok(Token::Attribute32(AttributeToken32 {
                token_id: id,
                file_access_mode: cur.u32()?,
                owner_uid: cur.u32()?,
                owner_gid: cur.u32()?,
                filesystem_id: cur.u32()?,
                node_id: cur.u64()?,
                device: cur.u32()?,
            }))
        }

        token_id::ATTRIBUTE_64 => {
            let mut cur = Cursor::new(buf, "attribute64");
            Ok(Token::Attribute64(AttributeToken64 {
                token_id: id,
                file_access_mode: cur.u32()?,
                owner_uid: cur.u32()?,
                owner_gid: cur.u32()?,
                filesystem_id: cur.u32()?,
                node_id: cur.u64()?,
                device: cur.u64()?,
            }))
        }

        // Status and return value are adjacent 4-byte fields; the return
        // value is two's-complement and reinterpreted as signed here.
        token_id::EXIT => {
            let mut cur = Cursor::new(buf, "exit");
            let status = cur.u32()?;
            let return_value = cur.u32()? as i32;
            Ok(Token::Exit(ExitToken {
                token_id: id,
                status,
                return_value,
            }))
        }

        id => Err(WireError::UnknownToken { id }.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header32_fields() {
        let buf = [
            0x14, // token ID
            0x00, 0x00, 0x00, 0x38, // record byte count = 56
            0x0b, // version
            0xaf, 0xc8, // event type
            0x00, 0x00, // event modifier
            0x5a, 0x9a, 0xc2, 0xe6, // seconds
            0x00, 0x03, 0x01, 0x28, // nanoseconds
        ];
        let Token::Header32(h) = decode_token(&buf).unwrap() else {
            panic!("wrong variant");
        };
        assert_eq!(h.token_id, 0x14);
        assert_eq!(h.record_byte_count, 56);
        assert_eq!(h.version, 0x0b);
        assert_eq!(h.event_type, 0xafc8);
        assert_eq!(h.event_modifier, 0x0000);
        assert_eq!(h.seconds, 0x5a9a_c2e6);
        assert_eq!(h.nanoseconds, 0x0003_0128);
    }

    #[test]
    fn trailer_magic_enforced() {
        let good = [0x13, 0xb1, 0x05, 0x00, 0x00, 0x00, 0x38];
        let Token::Trailer(t) = decode_token(&good).unwrap() else {
            panic!("wrong variant");
        };
        assert_eq!(t.magic, 0xb105);
        assert_eq!(t.record_byte_count, 56);

        let bad = [0x13, 0xb1, 0x06, 0x00, 0x00, 0x00, 0x38];
        assert!(matches!(
            decode_token(&bad),
            Err(DecodeError::BadTrailerMagic { found: 0xb106 })
        ));
    }

    #[test]
    fn text_strips_the_nul() {
        let buf = [0x28, 0x00, 0x06, b'h', b'e', b'l', b'l', b'o', 0x00];
        let Token::Text(t) = decode_token(&buf).unwrap() else {
            panic!("wrong variant");
        };
        assert_eq!(t.length, 6);
        assert_eq!(t.text, b"hello");
    }

    #[test]
    fn empty_declared_length_yields_empty_string() {
        let buf = [0x23, 0x00, 0x00];
        let Token::Path(p) = decode_token(&buf).unwrap() else {
            panic!("wrong variant");
        };
        assert!(p.path.is_empty());
    }

    #[test]
    fn socket_family_keeps_its_id() {
        for id in [0x2eu8, 0x80, 0x82] {
            let buf = [id, 0x00, 0x02, 0x1f, 0x90, 0x0a, 0x00, 0x00, 0x01];
            let Token::Socket(s) = decode_token(&buf).unwrap() else {
                panic!("wrong variant");
            };
            assert_eq!(s.token_id, id);
            assert_eq!(s.family, 2);
            assert_eq!(s.local_port, 8080);
            assert_eq!(s.address, "10.0.0.1".parse::<IpAddr>().unwrap());
        }

        let mut buf = vec![0x81, 0x00, 0x1c, 0x01, 0xbb];
        buf.extend_from_slice(&[
            0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x01,
        ]);
        let Token::Socket(s) = decode_token(&buf).unwrap() else {
            panic!("wrong variant");
        };
        assert_eq!(s.token_id, 0x81);
        assert_eq!(s.address, "2001:db8::1".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn exit_return_value_is_signed() {
        let buf = [0x52, 0x00, 0x00, 0x00, 0x01, 0xff, 0xff, 0xff, 0xff];
        let Token::Exit(e) = decode_token(&buf).unwrap() else {
            panic!("wrong variant");
        };
        assert_eq!(e.status, 1);
        assert_eq!(e.return_value, -1);
    }

    #[test]
    fn exec_args_splits_on_nul() {
        let mut buf = vec![0x3c, 0x00, 0x00, 0x00, 0x02];
        buf.extend_from_slice(b"/bin/ls\0-l\0");
        let Token::ExecArgs(e) = decode_token(&buf).unwrap() else {
            panic!("wrong variant");
        };
        assert_eq!(e.count, 2);
        assert_eq!(e.args, vec![b"/bin/ls".to_vec(), b"-l".to_vec()]);
    }

    #[test]
    fn arbitrary_data_splits_into_units() {
        let buf = [0x21, 0x00, 0x02, 0x03, 1, 2, 3, 4, 5, 6];
        let Token::ArbitraryData(d) = decode_token(&buf).unwrap() else {
            panic!("wrong variant");
        };
        assert_eq!(d.items, vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
    }

    #[test]
    fn expanded_subject32_with_ipv6() {
        let mut buf = vec![0x7a];
        for field in 1u32..=8 {
            buf.extend_from_slice(&field.to_be_bytes());
        }
        buf.extend_from_slice(&16u32.to_be_bytes());
        buf.extend_from_slice(&[0xfe, 0x80, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x01]);

        let Token::ExpandedSubject32(s) = decode_token(&buf).unwrap() else {
            panic!("wrong variant");
        };
        assert_eq!(s.audit_id, 1);
        assert_eq!(s.terminal_port, 8);
        assert_eq!(s.address_length, 16);
        assert_eq!(
            s.terminal_address,
            "fe80::1".parse::<IpAddr>().unwrap()
        );
    }

    #[test]
    fn expanded_in_addr_v4_uses_the_first_four_bytes() {
        let mut buf = vec![0x7e, 4];
        buf.extend_from_slice(&[192, 0, 2, 7]);
        buf.extend_from_slice(&[0x00; 12]);
        let Token::ExpandedInAddr(a) = decode_token(&buf).unwrap() else {
            panic!("wrong variant");
        };
        assert_eq!(a.address, "192.0.2.7".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn arg_variants_disagree_about_the_nul() {
        // arg32: declared length 5 covers "arg\0" plus one more... use "path" + NUL = 5
        let mut buf = vec![0x2d, 0x01];
        buf.extend_from_slice(&7u32.to_be_bytes());
        buf.extend_from_slice(&5u16.to_be_bytes());
        buf.extend_from_slice(b"path\0");
        let Token::Arg32(a) = decode_token(&buf).unwrap() else {
            panic!("wrong variant");
        };
        assert_eq!(a.value, 7);
        assert_eq!(a.text, b"path");

        // arg64: declared length 4 excludes the NUL
        let mut buf = vec![0x71, 0x02];
        buf.extend_from_slice(&9u64.to_be_bytes());
        buf.extend_from_slice(&4u16.to_be_bytes());
        buf.extend_from_slice(b"path\0");
        let Token::Arg64(a) = decode_token(&buf).unwrap() else {
            panic!("wrong variant");
        };
        assert_eq!(a.value, 9);
        assert_eq!(a.text, b"path");
    }

    #[test]
    fn unknown_id_rejected() {
        assert!(matches!(
            decode_token(&[0xff]),
            Err(DecodeError::Wire(WireError::UnknownToken { id: 0xff }))
        ));
    }

    #[test]
    fn short_buffer_is_an_error_not_a_panic() {
        // A header buffer chopped mid-field.
        let result = decode_token(&[0x14, 0x00, 0x00]);
        assert!(matches!(
            result,
            Err(DecodeError::Truncated {
                token: "header32",
                ..
            })
        ));
    }
}
