use std::io::BufRead;

use crate::error::HostsError;

/// Read one line from `input` and scan a leading integer from it.
///
/// Leading whitespace and an optional sign are accepted and anything after
/// the digits is ignored. When nothing can be scanned (no digits, or end of
/// input) the result is `0`.
pub fn read_index<R: BufRead>(input: &mut R) -> Result<i64, HostsError> {
    let mut line = String::new();
    input.read_line(&mut line).map_err(HostsError::Prompt)?;
    Ok(scan_index(&line))
}

/// Scan a leading integer, falling back to `0`.
pub fn scan_index(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let digits_start = usize::from(trimmed.starts_with(['-', '+']));
    let digits_len = trimmed[digits_start..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    match trimmed[..digits_start + digits_len].parse::<i64>() {
        Ok(index) => index,
        Err(error) => {
            tracing::warn!(input = raw.trim_end(), %error, "could not scan an index, using 0");
            0
        }
    }
}

/// Convert a scanned index to a line position; negatives match no line.
pub fn to_position(index: i64) -> Option<usize> {
    usize::try_from(index).ok()
}
