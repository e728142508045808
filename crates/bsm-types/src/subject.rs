use std::net::{IpAddr, Ipv4Addr};

/// The subject token (0x24) describes the credentials of the process
/// performing the audited operation: audit/effective/real user and group
/// IDs, process and session IDs, and the terminal the subject is attached
/// to. 32-bit terminal port.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectToken32 {
    pub token_id: u8,
    pub audit_id: u32,
    pub effective_uid: u32,
    pub effective_gid: u32,
    pub real_uid: u32,
    pub real_gid: u32,
    pub process_id: u32,
    pub session_id: u32,
    pub terminal_port: u32,
    pub terminal_address: Ipv4Addr,
}

/// Subject token (0x75): 64-bit terminal port.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectToken64 {
    pub token_id: u8,
    pub audit_id: u32,
    pub effective_uid: u32,
    pub effective_gid: u32,
    pub real_uid: u32,
    pub real_gid: u32,
    pub process_id: u32,
    pub session_id: u32,
    pub terminal_port: u64,
    pub terminal_address: Ipv4Addr,
}

/// The process token (0x26) shares the [`SubjectToken32`] layout, but
/// describes a process that is the *target* of the event (signal
/// delivery, for instance) rather than the party performing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessToken32 {
    pub token_id: u8,
    pub audit_id: u32,
    pub effective_uid: u32,
    pub effective_gid: u32,
    pub real_uid: u32,
    pub real_gid: u32,
    pub process_id: u32,
    pub session_id: u32,
    pub terminal_port: u32,
    pub terminal_address: Ipv4Addr,
}

/// Process token (0x77): 64-bit terminal port.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessToken64 {
    pub token_id: u8,
    pub audit_id: u32,
    pub effective_uid: u32,
    pub effective_gid: u32,
    pub real_uid: u32,
    pub real_gid: u32,
    pub process_id: u32,
    pub session_id: u32,
    pub terminal_port: u64,
    pub terminal_address: Ipv4Addr,
}

/// The expanded subject token (0x7a) extends the subject credentials with
/// a length-typed terminal address capable of holding IPv6. The address
/// length is a u32 on the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpandedSubjectToken32 {
    pub token_id: u8,
    pub audit_id: u32,
    pub effective_uid: u32,
    pub effective_gid: u32,
    pub real_uid: u32,
    pub real_gid: u32,
    pub process_id: u32,
    pub session_id: u32,
    pub terminal_port: u32,
    /// Declared length of the terminal address: 4 or 16.
    pub address_length: u32,
    pub terminal_address: IpAddr,
}

/// Expanded subject token (0x7c): 64-bit terminal port. The address
/// length is a single byte on the wire, unlike the 32-bit variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpandedSubjectToken64 {
    pub token_id: u8,
    pub audit_id: u32,
    pub effective_uid: u32,
    pub effective_gid: u32,
    pub real_uid: u32,
    pub real_gid: u32,
    pub process_id: u32,
    pub session_id: u32,
    pub terminal_port: u64,
    pub address_length: u8,
    pub terminal_address: IpAddr,
}

/// Expanded process token (0x7b): the [`ExpandedSubjectToken32`] layout
/// for a target process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpandedProcessToken32 {
    pub token_id: u8,
    pub audit_id: u32,
    pub effective_uid: u32,
    pub effective_gid: u32,
    pub real_uid: u32,
    pub real_gid: u32,
    pub process_id: u32,
    pub session_id: u32,
    pub terminal_port: u32,
    pub address_length: u32,
    pub terminal_address: IpAddr,
}

/// Expanded process token (0x7d): 64-bit terminal port, one-byte address
/// length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpandedProcessToken64 {
    pub token_id: u8,
    pub audit_id: u32,
    pub effective_uid: u32,
    pub effective_gid: u32,
    pub real_uid: u32,
    pub real_gid: u32,
    pub process_id: u32,
    pub session_id: u32,
    pub terminal_port: u64,
    pub address_length: u8,
    pub terminal_address: IpAddr,
}

/// The groups token (0x34) lists the supplementary group IDs associated
/// with the audit event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupsToken {
    pub token_id: u8,
    pub count: u16,
    pub groups: Vec<u32>,
}
