use bsm_types::{Record, Token};
use bsm_wire::{token_size, TokenSize};
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::decode::decode_token;
use crate::error::DecodeError;
use crate::framer::header_timestamps;
use crate::reader::DEFAULT_MAX_TOKEN_SIZE;

/// Asynchronous record stream: the [`Records`](crate::Records) iterator
/// over any [`AsyncRead`] source.
///
/// Useful when the trail arrives over a socket or pipe rather than a
/// file. Backpressure is inherent to the pull model: no bytes are read
/// from the source until the consumer awaits the next record, so a slow
/// consumer holds at most one partially read token in memory.
///
/// The stream is fused: after an error or EOF, `next` returns `None`
/// forever. Dropping the stream drops the source.
///
/// # Example
///
/// ```rust,no_run
/// use bsm_decoder::RecordStream;
///
/// async fn count(source: impl tokio::io::AsyncRead + Unpin) -> usize {
///     let mut stream = RecordStream::new(source);
///     let mut records = 0;
///     while let Some(result) = stream.next().await {
///         result.unwrap();
///         records += 1;
///     }
///     records
/// }
/// ```
pub struct RecordStream<R> {
    reader: R,
    max_token_size: usize,
    done: bool,
}

impl<R: AsyncRead + Unpin> RecordStream<R> {
    /// Stream records from `reader` with the default 1 MiB token cap.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            max_token_size: DEFAULT_MAX_TOKEN_SIZE,
            done: false,
        }
    }

    /// Override the per-token size cap.
    #[must_use]
    pub fn with_max_token_size(mut self, max_token_size: usize) -> Self {
        self.max_token_size = max_token_size;
        self
    }

    /// Give the byte source back, abandoning any unread records.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Read the next record: `Some(Ok(record))`, `Some(Err(_))` once on
    /// failure, or `None` at the end of the trail.
    pub async fn next(&mut self) -> Option<Result<Record, DecodeError>> {
        if self.done {
            return None;
        }
        match self.read_record().await {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }

    /// The framer loop of [`read_record`](crate::read_record), awaiting
    /// the source instead of blocking on it.
    async fn read_record(&mut self) -> Result<Option<Record>, DecodeError> {
        let (seconds, nanoseconds) = loop {
            let Some(token) = self.read_token().await? else {
                return Ok(None);
            };
            if let Some(timestamps) = header_timestamps(&token) {
                break timestamps;
            }
            match token {
                Token::File(_) => {}
                other => {
                    return Err(DecodeError::MissingHeader {
                        found: other.token_id(),
                    })
                }
            }
        };

        let mut tokens = Vec::new();
        loop {
            match self.read_token().await? {
                None => return Err(DecodeError::TruncatedRecord),
                Some(Token::Trailer(trailer)) => {
                    return Ok(Some(Record {
                        seconds,
                        nanoseconds,
                        byte_count: trailer.record_byte_count,
                        tokens,
                    }));
                }
                Some(token) => tokens.push(token),
            }
        }
    }

    async fn read_token(&mut self) -> Result<Option<Token>, DecodeError> {
        let mut first = [0u8; 1];
        if self.reader.read(&mut first).await? == 0 {
            return Ok(None);
        }

        let mut buf = vec![first[0]];
        loop {
            match token_size(&buf)? {
                TokenSize::NeedBytes(more) => {
                    self.grow_exact(&mut buf, more).await?;
                }
                TokenSize::Complete(size) => {
                    if size > self.max_token_size {
                        return Err(DecodeError::TokenTooLarge {
                            size,
                            limit: self.max_token_size,
                        });
                    }
                    let more = size.saturating_sub(buf.len());
                    self.grow_exact(&mut buf, more).await?;
                    break;
                }
            }
        }

        decode_token(&buf).map(Some)
    }

    async fn grow_exact(&mut self, buf: &mut Vec<u8>, more: usize) -> Result<(), DecodeError> {
        let target = buf.len() + more;
        if target > self.max_token_size {
            return Err(DecodeError::TokenTooLarge {
                size: target,
                limit: self.max_token_size,
            });
        }

        let mut filled = buf.len();
        buf.resize(target, 0);
        while filled < target {
            match self.reader.read(&mut buf[filled..target]).await? {
                0 => return Err(DecodeError::UnexpectedEof { offset: filled }),
                n => filled += n,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_text(seconds: u32) -> Vec<u8> {
        let mut bytes = vec![0x14, 0x00, 0x00, 0x00, 0x22, 0x0b, 0x00, 0x48, 0x00, 0x00];
        bytes.extend_from_slice(&seconds.to_be_bytes());
        bytes.extend_from_slice(&0u32.to_be_bytes());
        bytes.extend_from_slice(&[0x28, 0x00, 0x06]);
        bytes.extend_from_slice(b"hello\0");
        bytes.extend_from_slice(&[0x13, 0xb1, 0x05, 0x00, 0x00, 0x00, 0x22]);
        bytes
    }

    #[tokio::test]
    async fn streams_records_then_ends() {
        let mut bytes = record_with_text(1);
        bytes.extend_from_slice(&record_with_text(2));

        let mut stream = RecordStream::new(bytes.as_slice());
        let first = stream.next().await.unwrap().unwrap();
        assert_eq!(first.seconds, 1);
        assert_eq!(first.tokens.len(), 1);
        let second = stream.next().await.unwrap().unwrap();
        assert_eq!(second.seconds, 2);
        assert!(stream.next().await.is_none());
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn matches_the_sync_iterator() {
        let mut bytes = record_with_text(11);
        bytes.extend_from_slice(&record_with_text(12));
        bytes.extend_from_slice(&record_with_text(13));

        let sync_records: Vec<_> = crate::Records::new(std::io::Cursor::new(bytes.clone()))
            .map(Result::unwrap)
            .collect();

        let mut stream = RecordStream::new(bytes.as_slice());
        let mut async_records = Vec::new();
        while let Some(result) = stream.next().await {
            async_records.push(result.unwrap());
        }

        assert_eq!(sync_records, async_records);
    }

    #[tokio::test]
    async fn truncated_record_surfaces_once() {
        let bytes = record_with_text(1);
        let cut = &bytes[..bytes.len() - 3]; // lose most of the trailer

        let mut stream = RecordStream::new(cut);
        assert!(matches!(
            stream.next().await,
            Some(Err(DecodeError::UnexpectedEof { .. }))
        ));
        assert!(stream.next().await.is_none());
    }
}
