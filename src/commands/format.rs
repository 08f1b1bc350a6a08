use anyhow::Result;
use clap::Args;
use std::io::Write;
use tracing::warn;

use super::input::collect_inputs;
use super::Outcome;
use crate::models::Cpf;

#[derive(Args)]
pub struct FormatCommand {
    /// CPFs to format (reads stdin when omitted)
    pub inputs: Vec<String>,
}

impl FormatCommand {
    pub fn execute(&self, out: &mut impl Write, err: &mut impl Write) -> Result<Outcome> {
        let mut success = true;

        for input in collect_inputs(&self.inputs)? {
            match Cpf::parse(&input) {
                Ok(cpf) => writeln!(out, "{}", cpf)?,
                Err(e) => {
                    warn!(input = %input, "cannot format CPF");
                    writeln!(err, "{}: {}", input, e)?;
                    success = false;
                }
            }
        }

        Ok(Outcome { success })
    }
}
