//! Shared fixtures: hand-assembled wire bytes for tests and benchmarks.

/// Builders that assemble token byte sequences the way an auditing kernel
/// would emit them. Byte counts in header/trailer pairs are computed, not
/// hardcoded, so fixtures stay consistent as tests compose them.
pub mod build {
    /// header32 (0x14) with the given byte count and timestamp.
    #[must_use]
    pub fn header32(record_byte_count: u32, event_type: u16, seconds: u32, nanos: u32) -> Vec<u8> {
        let mut bytes = vec![0x14];
        bytes.extend_from_slice(&record_byte_count.to_be_bytes());
        bytes.push(0x0b); // version: OpenBSM AUDIT_HEADER_VERSION
        bytes.extend_from_slice(&event_type.to_be_bytes());
        bytes.extend_from_slice(&0u16.to_be_bytes()); // modifier
        bytes.extend_from_slice(&seconds.to_be_bytes());
        bytes.extend_from_slice(&nanos.to_be_bytes());
        bytes
    }

    /// trailer (0x13) with the magic and the given byte count.
    #[must_use]
    pub fn trailer(record_byte_count: u32) -> Vec<u8> {
        let mut bytes = vec![0x13, 0xb1, 0x05];
        bytes.extend_from_slice(&record_byte_count.to_be_bytes());
        bytes
    }

    /// text (0x28) wrapping `text` with its NUL terminator.
    #[must_use]
    pub fn text(text: &[u8]) -> Vec<u8> {
        let mut bytes = vec![0x28];
        bytes.extend_from_slice(&(u16::try_from(text.len() + 1).unwrap()).to_be_bytes());
        bytes.extend_from_slice(text);
        bytes.push(0x00);
        bytes
    }

    /// path (0x23) wrapping `path` with its NUL terminator.
    #[must_use]
    pub fn path(path: &[u8]) -> Vec<u8> {
        let mut bytes = vec![0x23];
        bytes.extend_from_slice(&(u16::try_from(path.len() + 1).unwrap()).to_be_bytes());
        bytes.extend_from_slice(path);
        bytes.push(0x00);
        bytes
    }

    /// subject32 (0x24) with sequential credential fields and a loopback
    /// terminal address.
    #[must_use]
    pub fn subject32(audit_id: u32, pid: u32) -> Vec<u8> {
        let mut bytes = vec![0x24];
        bytes.extend_from_slice(&audit_id.to_be_bytes());
        for field in [501u32, 20, 501, 20] {
            bytes.extend_from_slice(&field.to_be_bytes());
        }
        bytes.extend_from_slice(&pid.to_be_bytes());
        bytes.extend_from_slice(&pid.to_be_bytes()); // session
        bytes.extend_from_slice(&0u32.to_be_bytes()); // terminal port
        bytes.extend_from_slice(&[127, 0, 0, 1]);
        bytes
    }

    /// return32 (0x27).
    #[must_use]
    pub fn return32(errno: u8, value: u32) -> Vec<u8> {
        let mut bytes = vec![0x27, errno];
        bytes.extend_from_slice(&value.to_be_bytes());
        bytes
    }

    /// exec_args (0x3c) from a list of NUL-free argument strings.
    #[must_use]
    pub fn exec_args(args: &[&[u8]]) -> Vec<u8> {
        let mut bytes = vec![0x3c];
        bytes.extend_from_slice(&(u32::try_from(args.len()).unwrap()).to_be_bytes());
        for arg in args {
            bytes.extend_from_slice(arg);
            bytes.push(0x00);
        }
        bytes
    }

    /// file (0x11) marker naming the trail.
    #[must_use]
    pub fn file_marker(name: &[u8]) -> Vec<u8> {
        let mut bytes = vec![0x11];
        bytes.extend_from_slice(&0x5a9a_c2e6u32.to_be_bytes());
        bytes.extend_from_slice(&0u32.to_be_bytes());
        bytes.extend_from_slice(&(u16::try_from(name.len()).unwrap()).to_be_bytes());
        bytes.extend_from_slice(name);
        bytes.push(0x00);
        bytes
    }

    /// A complete record: header, the given interior tokens, trailer.
    /// Both byte counts cover the whole record, header through trailer.
    #[must_use]
    pub fn record(seconds: u32, interior: &[Vec<u8>]) -> Vec<u8> {
        let interior_len: usize = interior.iter().map(Vec::len).sum();
        let total = u32::try_from(18 + interior_len + 7).unwrap();

        let mut bytes = header32(total, 0x0048, seconds, 0);
        for token in interior {
            bytes.extend_from_slice(token);
        }
        bytes.extend_from_slice(&trailer(total));
        bytes
    }

    /// A trail of `count` execve-shaped records.
    #[must_use]
    pub fn trail(count: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        for index in 0..count {
            bytes.extend_from_slice(&record(
                1_520_000_000 + index,
                &[
                    subject32(1000, 4000 + index),
                    exec_args(&[b"/bin/ls", b"-l", b"/tmp"]),
                    path(b"/bin/ls"),
                    return32(0, 0),
                ],
            ));
        }
        bytes
    }
}
