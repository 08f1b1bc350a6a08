use anyhow::{Context, Result};
use std::io::BufRead;

/// Identifiers from the command line, or one per line from stdin when none were given.
pub fn collect_inputs(args: &[String]) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }

    let stdin = std::io::stdin();
    read_lines(stdin.lock())
}

pub fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read input")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            inputs.push(trimmed.to_string());
        }
    }
    Ok(inputs)
}
