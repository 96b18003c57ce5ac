//! Loading of range records into a [`BitTrie`].
//!
//! Each line of the input describes one range: a quoted lower bound, a quoted upper bound (both
//! decimal), and a free-text payload spanning the rest of the line:
//!
//! ```text
//! "16777216","16777471","AU","AUS","036","Australia"
//! ```
//!
//! The payload is stored under both bounds, such that a closest-match lookup of any key inside the
//! range finds one of them. [`render_place`] prints such an entry back as a location.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::{ip, BitTrie, Entry, Error, Key, Result};

/// A single parsed range record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeRecord {
    /// First key of the range.
    pub lower: u32,
    /// Last key of the range.
    pub upper: u32,
    /// Everything after the two bounds, without the line terminator.
    pub payload: String,
}

/// Parse one line of the record format. `line_no` is only used for error reporting.
///
/// ```
/// # use bit_trie::loader::parse_record;
/// let record = parse_record("\"0\",\"255\",\"ZZ\",\"Reserved\"\n", 1).unwrap();
/// assert_eq!(record.lower, 0);
/// assert_eq!(record.upper, 255);
/// assert_eq!(record.payload, "\"ZZ\",\"Reserved\"");
/// ```
pub fn parse_record(line: &str, line_no: usize) -> Result<RangeRecord> {
    let malformed = |reason: &str| Error::Malformed {
        line: line_no,
        reason: reason.to_string(),
    };
    let line = line.trim_end_matches(&['\r', '\n'][..]);
    let (lower, rest) = line
        .split_once(',')
        .ok_or_else(|| malformed("missing upper bound"))?;
    let (upper, payload) = rest
        .split_once(',')
        .ok_or_else(|| malformed("missing payload"))?;
    Ok(RangeRecord {
        lower: parse_bound(lower).ok_or_else(|| malformed("invalid lower bound"))?,
        upper: parse_bound(upper).ok_or_else(|| malformed("invalid upper bound"))?,
        payload: payload.to_string(),
    })
}

fn parse_bound(field: &str) -> Option<u32> {
    let field = field.trim();
    let field = field
        .strip_prefix('"')
        .and_then(|f| f.strip_suffix('"'))
        .unwrap_or(field);
    field.parse().ok()
}

/// Read all records from `reader` and insert each payload under both of its bounds. Blank lines
/// are skipped. Returns the number of records read, or [`Error::EmptyDataset`] if there was none.
pub fn load_ranges<K, R>(trie: &mut BitTrie<K, String>, reader: R) -> Result<usize>
where
    K: Key + From<u32>,
    R: BufRead,
{
    let mut records = 0;
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = parse_record(&line, i + 1)?;
        trie.insert_range(record.lower.into(), record.upper.into(), record.payload);
        records += 1;
    }
    if records == 0 {
        return Err(Error::EmptyDataset);
    }
    debug!(
        records = records,
        size = trie.size(),
        height = trie.height(),
        "loaded range records"
    );
    Ok(records)
}

/// Split a payload into its quoted fields. Commas inside quotes belong to the field. A payload
/// without any quotes is split on commas instead.
///
/// ```
/// # use bit_trie::loader::payload_fields;
/// assert_eq!(payload_fields("\"KR\",\"Korea, Republic of\""), ["KR", "Korea, Republic of"]);
/// ```
pub fn payload_fields(payload: &str) -> Vec<&str> {
    if !payload.contains('"') {
        return payload.split(',').map(str::trim).collect();
    }
    // every odd piece lies between an opening and a closing quote
    payload.split('"').skip(1).step_by(2).collect()
}

/// Renderer for range payloads of the form `"CC","CCC","NNN","Country"`, writing
/// `<key>: (<address>, CC, CCC: Country, NNN)`. Missing fields are left empty.
pub fn render_place(entry: &Entry<u32, String>, w: &mut dyn Write) -> io::Result<()> {
    let fields = payload_fields(entry.value());
    let field = |i: usize| fields.get(i).copied().unwrap_or("");
    writeln!(
        w,
        "{}: ({}, {}, {}: {}, {})",
        entry.key(),
        ip::format_key(entry.key()),
        field(0),
        field(1),
        field(3),
        field(2),
    )
}
