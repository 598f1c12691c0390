//! JSON output formatting

use std::io::{self, Write};

use crate::tree::TimelineNode;

/// Write the collected tree as pretty-printed JSON.
pub fn write_json<W: Write>(out: &mut W, node: &TimelineNode) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, node).map_err(io::Error::other)?;
    writeln!(out)
}

/// Print the collected tree as pretty-printed JSON to stdout.
pub fn print_json(node: &TimelineNode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_json(&mut lock, node)
}
