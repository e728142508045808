#![warn(clippy::pedantic)]

pub mod be;
pub mod error;
pub mod sizer;
pub mod token_id;

pub use error::WireError;
pub use sizer::{token_size, TokenSize};
