//! Line-oriented and bulk stream helpers.
//!
//! Lines are written with a CRLF terminator and read back with every `\r`
//! removed, so files produced on any platform read the same.

use std::fmt;
use std::io::{self, BufRead, ErrorKind, Read, Write};

/// Buffer size used by [`transfer`] and [`transfer_text`].
pub const TRANSFER_BUF_LEN: usize = 4096;

/// Reads one line, without its terminator.
///
/// Returns `Ok(None)` once the reader is exhausted. A last line without a
/// trailing `\n` is still returned.
pub fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<Vec<u8>>> {
    let mut raw = Vec::new();
    if reader.read_until(b'\n', &mut raw)? == 0 {
        return Ok(None);
    }

    if raw.last() == Some(&b'\n') {
        raw.pop();
    }
    raw.retain(|&b| b != b'\r');
    Ok(Some(raw))
}

/// Writes `line` followed by `\r\n`.
pub fn write_line<W: Write>(line: &[u8], writer: &mut W) -> io::Result<()> {
    writer.write_all(line)?;
    writer.write_all(b"\r\n")
}

/// Copies every byte from `reader` to `writer`, then flushes `writer`.
///
/// Returns the number of bytes copied.
pub fn transfer<R: Read, W: Write>(reader: &mut R, writer: &mut W) -> io::Result<u64> {
    let mut buf = [0u8; TRANSFER_BUF_LEN];
    let mut total = 0u64;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        writer.write_all(&buf[..n])?;
        total += n as u64;
    }

    writer.flush()?;
    Ok(total)
}

/// Copies UTF-8 text from `reader` to a character sink.
///
/// Returns the number of `char`s copied. Invalid UTF-8 fails with
/// [`ErrorKind::InvalidData`].
pub fn transfer_text<R: Read, W: fmt::Write>(
    reader: &mut R,
    writer: &mut W,
) -> io::Result<u64> {
    let mut buf = [0u8; TRANSFER_BUF_LEN];
    // bytes of a char split across two reads
    let mut pending: Vec<u8> = Vec::with_capacity(4);
    let mut total = 0u64;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        pending.extend_from_slice(&buf[..n]);

        let valid = match std::str::from_utf8(&pending) {
            Ok(s) => s.len(),
            Err(e) if e.error_len().is_none() => e.valid_up_to(),
            Err(e) => return Err(io::Error::new(ErrorKind::InvalidData, e)),
        };

        let text = std::str::from_utf8(&pending[..valid])
            .map_err(|e| io::Error::new(ErrorKind::InvalidData, e))?;
        writer.write_str(text).map_err(io::Error::other)?;
        total += text.chars().count() as u64;
        pending.drain(..valid);
    }

    if !pending.is_empty() {
        return Err(io::Error::new(
            ErrorKind::InvalidData,
            "stream ended inside a UTF-8 sequence",
        ));
    }
    Ok(total)
}
