//! Bounded reader for the request head.
//!
//! The head is scanned one byte at a time straight off the stream. Nothing is
//! read ahead, so at most `max_size` bytes are ever consumed and no byte past
//! the terminator is touched.

use std::fmt;
use std::io;

use tokio::io::{AsyncRead, AsyncReadExt};

/// Blank line ending the request head.
pub const TERMINATOR: &[u8; 4] = b"\r\n\r\n";

/// Initial buffer size; the buffer only grows past it for unusually long heads.
const INITIAL_CAPACITY: usize = 4096;

#[derive(Debug)]
pub enum HeaderError {
    /// `max_size` bytes were consumed without seeing the terminator.
    TooLarge,
    /// The stream failed or hit EOF before the terminator.
    ReadFailure(io::Error),
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderError::TooLarge => write!(f, "request header too large"),
            HeaderError::ReadFailure(e) => write!(f, "can't read request header: {e}"),
        }
    }
}

impl std::error::Error for HeaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HeaderError::TooLarge => None,
            HeaderError::ReadFailure(e) => Some(e),
        }
    }
}

/// Reads the request head, returning every byte before the first `\r\n\r\n`.
pub async fn read_header_block<R>(
    stream: &mut R,
    max_size: usize,
) -> Result<Vec<u8>, HeaderError>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::with_capacity(max_size.min(INITIAL_CAPACITY));

    loop {
        // Checked before each read: a terminator landing on the last allowed
        // byte still counts.
        if buf.len() == max_size {
            return Err(HeaderError::TooLarge);
        }

        let byte = stream.read_u8().await.map_err(HeaderError::ReadFailure)?;
        buf.push(byte);

        if buf.len() >= TERMINATOR.len() && buf.ends_with(TERMINATOR) {
            buf.truncate(buf.len() - TERMINATOR.len());
            return Ok(buf);
        }
    }
}
