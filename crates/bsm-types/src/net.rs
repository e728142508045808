use std::net::{IpAddr, Ipv4Addr};

/// The in_addr token (0x2a) holds a bare IPv4 address in network byte
/// order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InAddrToken {
    pub token_id: u8,
    pub address: Ipv4Addr,
}

/// The expanded in_addr token (0x7e) holds an IPv4 or IPv6 address
/// preceded by a one-byte type. The wire slot is always 16 bytes; for
/// IPv4 only the first four are meaningful.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpandedInAddrToken {
    pub token_id: u8,
    /// Declared address type: 4 or 16.
    pub address_type: u8,
    pub address: IpAddr,
}

/// The ip token (0x2b) carries a raw IPv4 packet header captured with
/// the event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IpToken {
    pub token_id: u8,
    /// IP version and header length, packed as on the wire.
    pub version_and_ihl: u8,
    pub type_of_service: u8,
    pub length: u16,
    pub id: u16,
    /// Fragment offset and flags, packed as on the wire.
    pub offset: u16,
    pub ttl: u8,
    pub protocol: u8,
    pub checksum: u16,
    pub source: Ipv4Addr,
    pub destination: Ipv4Addr,
}

/// The iport token (0x2c) stores an IP port number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IportToken {
    pub token_id: u8,
    pub port: u16,
}

/// Socket token: UNIX-domain and Internet sockets.
///
/// Four token IDs share this shape: 0x2e (the classic Solaris ID), 0x80
/// (inet32), and 0x82 (UNIX domain) carry a 4-byte address, while 0x81
/// (inet128) carries a 16-byte address. The preserved `token_id` byte is
/// the only way to tell them apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SocketToken {
    pub token_id: u8,
    pub family: u16,
    pub local_port: u16,
    pub address: IpAddr,
}

/// The expanded socket token (0x7f) describes both endpoints of an IPv4
/// or IPv6 socket, with domain and type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpandedSocketToken {
    pub token_id: u8,
    pub domain: u16,
    pub socket_type: u16,
    /// Declared address type: 4 or 16, governing both endpoint addresses.
    pub address_type: u16,
    pub local_port: u16,
    pub local_address: IpAddr,
    pub remote_port: u16,
    pub remote_address: IpAddr,
}
