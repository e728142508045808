#![warn(clippy::pedantic)]

pub mod decode;
pub mod error;
pub mod framer;
pub mod reader;
pub mod records;
pub mod streaming;

pub use decode::decode_token;
pub use error::DecodeError;
pub use framer::read_record;
pub use reader::{read_token, DEFAULT_MAX_TOKEN_SIZE};
pub use records::Records;
pub use streaming::RecordStream;
