use std::fs::File;
use std::io::BufReader;
use std::net::IpAddr;

use anyhow::Context;
use bsm_decoder::Records;
use bsm_types::Token;

use crate::InspectArgs;

/// Print every record with a one-line summary per token.
pub fn run(args: &InspectArgs) -> anyhow::Result<()> {
    let file = File::open(&args.file)
        .with_context(|| format!("cannot open {}", args.file.display()))?;

    for (index, result) in Records::new(BufReader::new(file)).enumerate() {
        let record =
            result.with_context(|| format!("record {index} in {}", args.file.display()))?;

        println!(
            "record {index} @ {}.{:09} ({} tokens, {} bytes)",
            record.seconds,
            record.nanoseconds,
            record.tokens.len(),
            record.byte_count,
        );
        for token in &record.tokens {
            if args.fields {
                println!("  [{:#04x}] {}: {}", token.token_id(), token.name(), summarize(token));
            } else {
                println!("  [{:#04x}] {}", token.token_id(), token.name());
            }
        }
    }

    Ok(())
}

/// Strings in a trail are raw bytes with no encoding promise; render them
/// lossily for display only.
fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn lossy_list(items: &[Vec<u8>]) -> String {
    items
        .iter()
        .map(|item| lossy(item))
        .collect::<Vec<_>>()
        .join(" ")
}

fn addr(address: &IpAddr) -> String {
    address.to_string()
}

/// One-line rendering of a token's decoded fields.
#[allow(clippy::too_many_lines)]
fn summarize(token: &Token) -> String {
    match token {
        Token::Header32(t) => format!(
            "event {:#06x} mod {:#06x} len {}",
            t.event_type, t.event_modifier, t.record_byte_count
        ),
        Token::Header64(t) => format!(
            "event {:#06x} mod {:#06x} len {}",
            t.event_type, t.event_modifier, t.record_byte_count
        ),
        Token::ExpandedHeader32(t) => format!(
            "event {:#06x} from {} len {}",
            t.event_type,
            addr(&t.machine_address),
            t.record_byte_count
        ),
        Token::ExpandedHeader64(t) => format!(
            "event {:#06x} from {} len {}",
            t.event_type,
            addr(&t.machine_address),
            t.record_byte_count
        ),
        Token::Trailer(t) => format!("len {}", t.record_byte_count),
        Token::File(t) => format!("{} @ {}.{:06}", lossy(&t.name), t.seconds, t.microseconds),
        Token::ArbitraryData(t) => {
            format!("{} units of {} bytes", t.unit_count, t.unit_size)
        }
        Token::SysvIpc(t) => format!("type {} id {}", t.object_type, t.object_id),
        Token::SysvIpcPerm(t) => format!(
            "owner {}:{} mode {:o}",
            t.owner_uid, t.owner_gid, t.access_mode
        ),
        Token::Path(t) => lossy(&t.path),
        Token::PathAttr(t) => lossy_list(&t.paths),
        Token::Subject32(t) => format!(
            "auid {} euid {} pid {} sid {} tty {}",
            t.audit_id, t.effective_uid, t.process_id, t.session_id, t.terminal_address
        ),
        Token::Subject64(t) => format!(
            "auid {} euid {} pid {} sid {} tty {}",
            t.audit_id, t.effective_uid, t.process_id, t.session_id, t.terminal_address
        ),
        Token::ExpandedSubject32(t) => format!(
            "auid {} euid {} pid {} tty {}",
            t.audit_id,
            t.effective_uid,
            t.process_id,
            addr(&t.terminal_address)
        ),
        Token::ExpandedSubject64(t) => format!(
            "auid {} euid {} pid {} tty {}",
            t.audit_id,
            t.effective_uid,
            t.process_id,
            addr(&t.terminal_address)
        ),
        Token::Process32(t) => format!(
            "auid {} euid {} pid {} sid {}",
            t.audit_id, t.effective_uid, t.process_id, t.session_id
        ),
        Token::Process64(t) => format!(
            "auid {} euid {} pid {} sid {}",
            t.audit_id, t.effective_uid, t.process_id, t.session_id
        ),
        Token::ExpandedProcess32(t) => format!(
            "auid {} euid {} pid {} tty {}",
            t.audit_id,
            t.effective_uid,
            t.process_id,
            addr(&t.terminal_address)
        ),
        Token::ExpandedProcess64(t) => format!(
            "auid {} euid {} pid {} tty {}",
            t.audit_id,
            t.effective_uid,
            t.process_id,
            addr(&t.terminal_address)
        ),
        Token::Return32(t) => format!("errno {} value {}", t.error_number, t.return_value),
        Token::Return64(t) => format!("errno {} value {}", t.error_number, t.return_value),
        Token::Text(t) => lossy(&t.text),
        Token::InAddr(t) => t.address.to_string(),
        Token::ExpandedInAddr(t) => addr(&t.address),
        Token::Ip(t) => format!(
            "{} -> {} proto {} len {}",
            t.source, t.destination, t.protocol, t.length
        ),
        Token::Iport(t) => format!("port {}", t.port),
        Token::Arg32(t) => format!("arg {} = {} ({})", t.argument_id, t.value, lossy(&t.text)),
        Token::Arg64(t) => format!("arg {} = {} ({})", t.argument_id, t.value, lossy(&t.text)),
        Token::Socket(t) => format!("family {} {}:{}", t.family, addr(&t.address), t.local_port),
        Token::ExpandedSocket(t) => format!(
            "{}:{} -> {}:{}",
            addr(&t.local_address),
            t.local_port,
            addr(&t.remote_address),
            t.remote_port
        ),
        Token::Seq(t) => format!("seq {}", t.sequence_number),
        Token::Groups(t) => t
            .groups
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(","),
        Token::ExecArgs(t) => lossy_list(&t.args),
        Token::ExecEnv(t) => lossy_list(&t.env),
        Token::Attribute32(t) => format!(
            "mode {:o} owner {}:{} inode {} dev {}",
            t.file_access_mode, t.owner_uid, t.owner_gid, t.node_id, t.device
        ),
        Token::Attribute64(t) => format!(
            "mode {:o} owner {}:{} inode {} dev {}",
            t.file_access_mode, t.owner_uid, t.owner_gid, t.node_id, t.device
        ),
        Token::Exit(t) => format!("status {} value {}", t.status, t.return_value),
        Token::Zonename(t) => lossy(&t.name),
    }
}
