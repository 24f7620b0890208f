use crate::http::request::{Method, Request};
use std::collections::HashMap;

/// Upper bound on the request line plus header block.
pub const MAX_HEAD_SIZE: usize = 64 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The header block has not been terminated yet; read more bytes.
    Incomplete,
    /// Fewer than two tokens on the request line, or an empty token.
    InvalidRequestLine,
    /// The request target does not start with `/`.
    InvalidTarget,
    /// A header line without the `": "` separator.
    InvalidHeader,
    /// The head is not valid UTF-8.
    InvalidEncoding,
    /// The head grew past [`MAX_HEAD_SIZE`].
    HeadTooLarge,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            ParseError::Incomplete => "incomplete request head",
            ParseError::InvalidRequestLine => "malformed request line",
            ParseError::InvalidTarget => "request target must start with '/'",
            ParseError::InvalidHeader => "malformed header line",
            ParseError::InvalidEncoding => "request head is not valid UTF-8",
            ParseError::HeadTooLarge => "request head too large",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ParseError {}

/// Parses the request line and headers at the start of `buf`.
///
/// The head ends at the first empty line after the request line (`\r\n` or a
/// bare `\n`). When `eof` is set the end of the buffer also terminates it, so
/// a client that half-closes without the blank line is still served.
///
/// Returns the request and the number of bytes it occupied. Whatever follows
/// the head is left alone: request bodies are never read.
pub fn parse_http_request(buf: &[u8], eof: bool) -> Result<(Request, usize), ParseError> {
    let head_end = match find_head_end(buf) {
        Some(end) => end,
        None if buf.len() > MAX_HEAD_SIZE => return Err(ParseError::HeadTooLarge),
        None if eof && !buf.is_empty() => buf.len(),
        None => return Err(ParseError::Incomplete),
    };

    if head_end > MAX_HEAD_SIZE {
        return Err(ParseError::HeadTooLarge);
    }

    let head = std::str::from_utf8(&buf[..head_end])
        .map_err(|_| ParseError::InvalidEncoding)?;

    let mut lines = head.split('\n').map(strip_line_ending);

    // Request line
    let request_line = lines.next().ok_or(ParseError::InvalidRequestLine)?;
    let mut parts = request_line.splitn(3, ' ');

    let method = parts
        .next()
        .filter(|m| !m.is_empty())
        .ok_or(ParseError::InvalidRequestLine)?;
    let target = parts
        .next()
        .filter(|t| !t.is_empty())
        .ok_or(ParseError::InvalidRequestLine)?;
    let version = parts.next().filter(|v| !v.is_empty());

    if !target.starts_with('/') {
        return Err(ParseError::InvalidTarget);
    }

    // Headers
    let mut headers = HashMap::new();

    for line in lines {
        if line.is_empty() {
            break;
        }

        let (key, value) = line
            .split_once(": ")
            .ok_or(ParseError::InvalidHeader)?;

        headers.insert(key.to_string(), value.to_string());
    }

    let request = Request {
        method: Method::parse(method),
        target: target.to_string(),
        version: version.map(str::to_string),
        headers,
    };

    Ok((request, head_end))
}

/// Offset just past the empty line that closes the head, if there is one.
fn find_head_end(buf: &[u8]) -> Option<usize> {
    let mut start = match buf.iter().position(|&b| b == b'\n') {
        Some(nl) => nl + 1,
        None => return None,
    };

    while let Some(offset) = buf[start..].iter().position(|&b| b == b'\n') {
        let line = &buf[start..start + offset];
        if line.is_empty() || line == b"\r" {
            return Some(start + offset + 1);
        }
        start += offset + 1;
    }

    None
}

fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}
