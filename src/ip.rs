//! Translation between user-typed queries and 32-bit keys.

use std::net::Ipv4Addr;

use crate::{Error, Result};

/// Parse a query into a key. A query containing a `.` is read in dotted four-byte notation (as an
/// IPv4 address), anything else as a decimal integer. Surrounding whitespace is ignored.
///
/// ```
/// # use bit_trie::ip::parse_key;
/// assert_eq!(parse_key("16777216").unwrap(), 0x0100_0000);
/// assert_eq!(parse_key("1.0.0.0\n").unwrap(), 0x0100_0000);
/// assert!(parse_key("1.0.0").is_err());
/// assert!(parse_key("4294967296").is_err());
/// ```
pub fn parse_key(query: &str) -> Result<u32> {
    let query = query.trim();
    let key = if query.contains('.') {
        query.parse::<Ipv4Addr>().map(u32::from).ok()
    } else {
        query.parse::<u32>().ok()
    };
    key.ok_or_else(|| Error::InvalidKey(query.to_string()))
}

/// Format a key in dotted four-byte notation. The all-ones key marks an invalid address in range
/// data sets and is formatted as `INVALID`.
///
/// ```
/// # use bit_trie::ip::format_key;
/// assert_eq!(format_key(0xc0a8_0001), "192.168.0.1");
/// assert_eq!(format_key(u32::MAX), "INVALID");
/// ```
pub fn format_key(key: u32) -> String {
    if key == u32::MAX {
        String::from("INVALID")
    } else {
        Ipv4Addr::from(key).to_string()
    }
}
