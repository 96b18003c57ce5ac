//! Interactive IPv4 location lookup.
//!
//! Loads range records of the form `"lower","upper","CC","CCC","NNN","Country"` into a
//! [`BitTrie`], prints its statistics, and then answers queries (a decimal number or a dotted
//! IPv4 address) read from standard input until a blank line or end of input.
//!
//! Run with: `cargo run --example place_ip -- <FILE>`

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use bit_trie::{ip, loader, BitTrie};
use clap::Parser;

/// Look up the location of IPv4 addresses.
#[derive(Parser, Debug)]
#[command(name = "place_ip")]
struct Args {
    /// CSV file with one address range per line
    file: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let file = File::open(&args.file).map_err(|e| format!("{}: {e}", args.file.display()))?;
    let mut trie: BitTrie<u32, String> =
        BitTrie::try_with_capacity(0)?.with_renderer(loader::render_place);
    loader::load_ranges(&mut trie, BufReader::new(file))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "\nheight: {}", trie.height())?;
    writeln!(out, "size: {}", trie.size())?;
    writeln!(out, "node_count: {}\n\n", trie.node_count())?;
    writeln!(
        out,
        "Enter an ipv4 string or a number (or a blank line to quit)."
    )?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let query = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if query.trim().is_empty() {
            break;
        }
        let key = match ip::parse_key(&query) {
            Ok(key) => key,
            Err(e) => {
                tracing::warn!(query = %query.trim(), "{e}");
                continue;
            }
        };
        let entry = trie.search(key)?;
        trie.show_value(entry, &mut out)?;
    }
    writeln!(out)?;

    Ok(())
}
