use std::io::Write;

use anyhow::Result;
use uniqfile::SuffixSource;

pub fn run(count: u32, seed: Option<u64>) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for suffix in suffixes(count, seed) {
        writeln!(out, "{suffix}")?;
    }
    Ok(())
}

pub fn suffixes(count: u32, seed: Option<u64>) -> Vec<String> {
    let source = seed.map_or_else(SuffixSource::new, SuffixSource::with_seed);
    (0..count).map(|_| source.next_suffix()).collect()
}
