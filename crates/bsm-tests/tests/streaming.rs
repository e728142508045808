//! The async stream must agree with the sync iterator, record for record.

use std::io::Cursor;

use bsm_decoder::{DecodeError, RecordStream, Records};
use bsm_tests::build;

#[tokio::test(flavor = "current_thread")]
async fn async_stream_matches_sync_iterator() {
    let bytes = build::trail(20);

    let sync_records: Vec<_> = Records::new(Cursor::new(bytes.clone()))
        .map(Result::unwrap)
        .collect();

    let mut stream = RecordStream::new(bytes.as_slice());
    let mut async_records = Vec::new();
    while let Some(result) = stream.next().await {
        async_records.push(result.unwrap());
    }

    assert_eq!(sync_records, async_records);
}

#[tokio::test(flavor = "current_thread")]
async fn async_stream_respects_the_token_cap() {
    let bytes = build::record(1, &[build::text(&[b'a'; 500])]);

    let mut stream = RecordStream::new(bytes.as_slice()).with_max_token_size(100);
    assert!(matches!(
        stream.next().await,
        Some(Err(DecodeError::TokenTooLarge { limit: 100, .. }))
    ));
    assert!(stream.next().await.is_none());
}

#[tokio::test(flavor = "current_thread")]
async fn async_stream_ends_cleanly_on_boundary_eof() {
    let bytes = build::trail(1);
    let mut stream = RecordStream::new(bytes.as_slice());
    assert!(stream.next().await.unwrap().is_ok());
    assert!(stream.next().await.is_none());
}

#[tokio::test(flavor = "current_thread")]
async fn async_stream_reads_through_a_buffered_reader() {
    let bytes = build::trail(5);
    let reader = tokio::io::BufReader::with_capacity(16, bytes.as_slice());

    let mut stream = RecordStream::new(reader);
    let mut count = 0;
    while let Some(result) = stream.next().await {
        result.unwrap();
        count += 1;
    }
    assert_eq!(count, 5);
}
