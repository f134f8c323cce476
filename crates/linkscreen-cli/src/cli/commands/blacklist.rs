//! Blacklist command: print the effective blacklist.

use anyhow::Result;
use linkscreen_core::Blacklist;
use std::io::{self, Write};

pub fn run_blacklist(blacklist: &Blacklist, json: bool) -> Result<()> {
    let mut out = io::stdout().lock();
    write_blacklist(&mut out, blacklist, json)?;
    out.flush()?;
    Ok(())
}

fn write_blacklist<W: Write>(out: &mut W, blacklist: &Blacklist, json: bool) -> Result<()> {
    if json {
        let value = serde_json::json!({
            "mode": blacklist.mode(),
            "hosts": blacklist.hosts().collect::<Vec<_>>(),
        });
        serde_json::to_writer_pretty(&mut *out, &value)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "match: {:?}", blacklist.mode())?;
    for host in blacklist.hosts() {
        writeln!(out, "  {host}")?;
    }
    Ok(())
}
