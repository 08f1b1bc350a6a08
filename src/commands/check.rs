use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info};

use super::input::collect_inputs;
use super::Outcome;
use crate::models::cpf::{is_valid, normalize};

#[derive(Args)]
pub struct CheckCommand {
    /// CPFs to check (reads stdin when omitted)
    pub inputs: Vec<String>,

    /// Print one JSON object per input
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    input: &'a str,
    normalized: String,
    valid: bool,
}

impl CheckCommand {
    pub fn execute(&self, out: &mut impl Write) -> Result<Outcome> {
        let inputs = collect_inputs(&self.inputs)?;
        let mut invalid = 0usize;

        for input in &inputs {
            let valid = is_valid(input);
            if !valid {
                invalid += 1;
            }
            debug!(input = %input, valid, "checked CPF");

            if self.json {
                let report = CheckReport {
                    input: input.as_str(),
                    normalized: normalize(input),
                    valid,
                };
                writeln!(out, "{}", serde_json::to_string(&report)?)?;
            } else {
                let verdict = if valid { "valid" } else { "invalid" };
                writeln!(out, "{}: {}", input, verdict)?;
            }
        }

        info!(checked = inputs.len(), invalid, "CPF check finished");
        Ok(Outcome { success: invalid == 0 })
    }
}
