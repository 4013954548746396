mod chunked_transfer;
mod error;
mod message_part;
mod messenger;
mod reader_writer;
mod single_flight;

pub use error::*;
pub use message_part::*;
pub use messenger::*;
pub use reader_writer::*;
pub use single_flight::*;

/// Size of each chunk in a variable data transfer.
pub const BUFFER_SIZE: usize = 1024;

/// Bytes that terminate every message.
pub const SUCCESS_BYTES: &[u8; 4] = &[255, 255, 255, 255];
