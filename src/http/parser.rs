use std::collections::HashMap;
use std::fmt;

use crate::http::request::Request;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The request line has fewer than two space-separated tokens.
    MalformedRequest,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MalformedRequest => write!(f, "malformed request line"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses a request head as returned by the header reader (terminator already
/// stripped).
pub fn parse_request_head(block: &[u8]) -> Result<Request, ParseError> {
    let head = String::from_utf8_lossy(block);
    let mut lines = head.split("\r\n");

    // Request line, split on single spaces: "GET  /" yields an empty target.
    let request_line = lines.next().unwrap_or_default();
    let mut parts = request_line.split(' ');

    let method = parts.next().ok_or(ParseError::MalformedRequest)?;
    let target = parts.next().ok_or(ParseError::MalformedRequest)?;
    let version = parts.next().unwrap_or_default();

    // Header fields are collected but never drive routing, so a line without a
    // colon is skipped rather than rejected.
    let mut headers = HashMap::new();
    for line in lines {
        if let Some((key, value)) = line.split_once(':') {
            headers.insert(
                key.trim().to_string(),
                value.trim().to_string(),
            );
        }
    }

    Ok(Request {
        method: method.to_string(),
        target: target.to_string(),
        version: version.to_string(),
        headers,
    })
}
