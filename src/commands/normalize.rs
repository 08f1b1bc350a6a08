use anyhow::Result;
use clap::Args;
use std::io::Write;

use super::input::collect_inputs;
use super::Outcome;
use crate::models::cpf::normalize;

#[derive(Args)]
pub struct NormalizeCommand {
    /// Identifiers to normalize (reads stdin when omitted)
    pub inputs: Vec<String>,
}

impl NormalizeCommand {
    pub fn execute(&self, out: &mut impl Write) -> Result<Outcome> {
        for input in collect_inputs(&self.inputs)? {
            writeln!(out, "{}", normalize(&input))?;
        }
        Ok(Outcome { success: true })
    }
}
