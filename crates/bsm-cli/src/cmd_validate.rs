use std::cell::Cell;
use std::fs::File;
use std::io::{BufReader, Read};
use std::rc::Rc;

use anyhow::Context;
use bsm_decoder::{read_record, DEFAULT_MAX_TOKEN_SIZE};

use crate::ValidateArgs;

/// A reader that counts the bytes handed out, so each record's actual
/// span can be compared against the byte count its trailer declared.
struct CountingReader<R> {
    inner: R,
    count: Rc<Cell<u64>>,
}

impl<R: Read> Read for CountingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.count.set(self.count.get() + n as u64);
        Ok(n)
    }
}

/// Decode the whole trail and report what was found.
///
/// The trailer byte counts are compared against the bytes each record
/// actually spanned, purely as a diagnostic: a mismatch is reported but
/// is not a failure, and a trail whose first record is preceded by a
/// file-token marker will legitimately report one.
pub fn run(args: &ValidateArgs) -> anyhow::Result<()> {
    let file = File::open(&args.file)
        .with_context(|| format!("cannot open {}", args.file.display()))?;

    let count = Rc::new(Cell::new(0u64));
    let mut reader = CountingReader {
        inner: BufReader::new(file),
        count: count.clone(),
    };

    let mut records = 0u64;
    let mut tokens = 0u64;
    let mut mismatches = 0u64;

    loop {
        let before = count.get();
        let record = read_record(&mut reader, DEFAULT_MAX_TOKEN_SIZE)
            .with_context(|| format!("record {records} in {}", args.file.display()))?;
        let Some(record) = record else { break };

        let span = count.get() - before;
        if span != u64::from(record.byte_count) {
            mismatches += 1;
        }
        records += 1;
        tokens += record.tokens.len() as u64;
    }

    println!("{}: ok", args.file.display());
    println!("  records: {records}");
    println!("  tokens:  {tokens}");
    println!("  bytes:   {}", count.get());
    if mismatches > 0 {
        println!("  note: {mismatches} record(s) spanned a different byte count than their trailer declared");
    }

    Ok(())
}
