use crate::header::{
    ExpandedHeaderToken32, ExpandedHeaderToken64, FileToken, HeaderToken32, HeaderToken64,
    TrailerToken,
};
use crate::net::{
    ExpandedInAddrToken, ExpandedSocketToken, InAddrToken, IpToken, IportToken, SocketToken,
};
use crate::subject::{
    ExpandedProcessToken32, ExpandedProcessToken64, ExpandedSubjectToken32, ExpandedSubjectToken64,
    GroupsToken, ProcessToken32, ProcessToken64, SubjectToken32, SubjectToken64,
};
use crate::syscall::{
    ArbitraryDataToken, ArgToken32, ArgToken64, AttributeToken32, AttributeToken64, ExitToken,
    ReturnToken32, ReturnToken64, SeqToken, SysvIpcPermToken, SysvIpcToken,
};
use crate::text::{
    ExecArgsToken, ExecEnvToken, PathAttrToken, PathToken, TextToken, ZonenameToken,
};

/// One decoded BSM token.
///
/// The exhaustive sum over every token shape in the registry. Consumers
/// dispatch with `match`, and the compiler guarantees no shape is
/// forgotten. Each variant preserves the literal token-ID byte it was
/// decoded from; this matters for the shapes shared by several IDs (the
/// socket family) and for faithful diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Header32(HeaderToken32),
    Header64(HeaderToken64),
    ExpandedHeader32(ExpandedHeaderToken32),
    ExpandedHeader64(ExpandedHeaderToken64),
    Trailer(TrailerToken),
    File(FileToken),
    ArbitraryData(ArbitraryDataToken),
    SysvIpc(SysvIpcToken),
    SysvIpcPerm(SysvIpcPermToken),
    Path(PathToken),
    PathAttr(PathAttrToken),
    Subject32(SubjectToken32),
    Subject64(SubjectToken64),
    ExpandedSubject32(ExpandedSubjectToken32),
    ExpandedSubject64(ExpandedSubjectToken64),
    Process32(ProcessToken32),
    Process64(ProcessToken64),
    ExpandedProcess32(ExpandedProcessToken32),
    ExpandedProcess64(ExpandedProcessToken64),
    Return32(ReturnToken32),
    Return64(ReturnToken64),
    Text(TextToken),
    InAddr(InAddrToken),
    ExpandedInAddr(ExpandedInAddrToken),
    Ip(IpToken),
    Iport(IportToken),
    Arg32(ArgToken32),
    Arg64(ArgToken64),
    Socket(SocketToken),
    ExpandedSocket(ExpandedSocketToken),
    Seq(SeqToken),
    Groups(GroupsToken),
    ExecArgs(ExecArgsToken),
    ExecEnv(ExecEnvToken),
    Attribute32(AttributeToken32),
    Attribute64(AttributeToken64),
    Exit(ExitToken),
    Zonename(ZonenameToken),
}

impl Token {
    /// The literal token-ID byte this value was decoded from.
    #[must_use]
    pub fn token_id(&self) -> u8 {
        match self {
            Self::Header32(t) => t.token_id,
            Self::Header64(t) => t.token_id,
            Self::ExpandedHeader32(t) => t.token_id,
            Self::ExpandedHeader64(t) => t.token_id,
            Self::Trailer(t) => t.token_id,
            Self::File(t) => t.token_id,
            Self::ArbitraryData(t) => t.token_id,
            Self::SysvIpc(t) => t.token_id,
            Self::SysvIpcPerm(t) => t.token_id,
            Self::Path(t) => t.token_id,
            Self::PathAttr(t) => t.token_id,
            Self::Subject32(t) => t.token_id,
            Self::Subject64(t) => t.token_id,
            Self::ExpandedSubject32(t) => t.token_id,
            Self::ExpandedSubject64(t) => t.token_id,
            Self::Process32(t) => t.token_id,
            Self::Process64(t) => t.token_id,
            Self::ExpandedProcess32(t) => t.token_id,
            Self::ExpandedProcess64(t) => t.token_id,
            Self::Return32(t) => t.token_id,
            Self::Return64(t) => t.token_id,
            Self::Text(t) => t.token_id,
            Self::InAddr(t) => t.token_id,
            Self::ExpandedInAddr(t) => t.token_id,
            Self::Ip(t) => t.token_id,
            Self::Iport(t) => t.token_id,
            Self::Arg32(t) => t.token_id,
            Self::Arg64(t) => t.token_id,
            Self::Socket(t) => t.token_id,
            Self::ExpandedSocket(t) => t.token_id,
            Self::Seq(t) => t.token_id,
            Self::Groups(t) => t.token_id,
            Self::ExecArgs(t) => t.token_id,
            Self::ExecEnv(t) => t.token_id,
            Self::Attribute32(t) => t.token_id,
            Self::Attribute64(t) => t.token_id,
            Self::Exit(t) => t.token_id,
            Self::Zonename(t) => t.token_id,
        }
    }

    /// The conventional BSM name of this token, for diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Header32(_) => "header32",
            Self::Header64(_) => "header64",
            Self::ExpandedHeader32(_) => "expanded header32",
            Self::ExpandedHeader64(_) => "expanded header64",
            Self::Trailer(_) => "trailer",
            Self::File(_) => "file",
            Self::ArbitraryData(_) => "arbitrary data",
            Self::SysvIpc(_) => "System V IPC",
            Self::SysvIpcPerm(_) => "System V IPC permission",
            Self::Path(_) => "path",
            Self::PathAttr(_) => "path_attr",
            Self::Subject32(_) => "subject32",
            Self::Subject64(_) => "subject64",
            Self::ExpandedSubject32(_) => "expanded subject32",
            Self::ExpandedSubject64(_) => "expanded subject64",
            Self::Process32(_) => "process32",
            Self::Process64(_) => "process64",
            Self::ExpandedProcess32(_) => "expanded process32",
            Self::ExpandedProcess64(_) => "expanded process64",
            Self::Return32(_) => "return32",
            Self::Return64(_) => "return64",
            Self::Text(_) => "text",
            Self::InAddr(_) => "in_addr",
            Self::ExpandedInAddr(_) => "expanded in_addr",
            Self::Ip(_) => "ip",
            Self::Iport(_) => "iport",
            Self::Arg32(_) => "arg32",
            Self::Arg64(_) => "arg64",
            Self::Socket(_) => "socket",
            Self::ExpandedSocket(_) => "expanded socket",
            Self::Seq(_) => "seq",
            Self::Groups(_) => "groups",
            Self::ExecArgs(_) => "exec_args",
            Self::ExecEnv(_) => "exec_env",
            Self::Attribute32(_) => "attribute32",
            Self::Attribute64(_) => "attribute64",
            Self::Exit(_) => "exit",
            Self::Zonename(_) => "zonename",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_id_is_the_preserved_byte() {
        let token = Token::Iport(IportToken {
            token_id: 0x2c,
            port: 22,
        });
        assert_eq!(token.token_id(), 0x2c);
        assert_eq!(token.name(), "iport");
    }

    #[test]
    fn socket_variants_differ_only_by_id() {
        use std::net::{IpAddr, Ipv4Addr};

        let base = SocketToken {
            token_id: 0x2e,
            family: 2,
            local_port: 80,
            address: IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)),
        };
        for id in [0x2eu8, 0x80, 0x82] {
            let token = Token::Socket(SocketToken { token_id: id, ..base.clone() });
            assert_eq!(token.token_id(), id);
            assert_eq!(token.name(), "socket");
        }
    }
}
