//! # Token-Id String Format

use core::fmt::Write;

use crate::{BCError, BCResult};

/// Join token ids with single spaces.
///
/// An empty slice formats as the empty string.
pub fn format_token_ids(ids: &[u32]) -> String {
    let mut buf = String::with_capacity(ids.len() * 6);
    for (idx, id) in ids.iter().enumerate() {
        if idx > 0 {
            buf.push(' ');
        }
        // Writing to a String cannot fail.
        let _ = write!(buf, "{id}");
    }
    buf
}

/// Parse whitespace-delimited token ids.
///
/// ## Returns
/// * `Ok(ids)` - on success; empty or all-whitespace input yields no ids.
/// * `Err(BCError::Parse)` - naming the first piece which is not a `u32`.
pub fn parse_token_ids(text: &str) -> BCResult<Vec<u32>> {
    text.split_whitespace()
        .map(|piece| {
            piece
                .parse::<u32>()
                .map_err(|e| BCError::Parse(format!("invalid token id {piece:?}: {e}")))
        })
        .collect()
}

/// Does any whitespace-delimited piece of `text` exactly match one of `symbols`?
pub fn contains_symbol(
    text: &str,
    symbols: &[&str],
) -> bool {
    text.split_whitespace().any(|piece| symbols.contains(&piece))
}
