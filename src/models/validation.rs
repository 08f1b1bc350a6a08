use anyhow::{anyhow, Result};
use tracing::debug;

use super::cpf;

/// CPF validation
pub fn validate_cpf(raw: &str) -> Result<()> {
    if cpf::is_valid(raw) {
        return Ok(());
    }

    debug!(input = raw, "rejected CPF");
    Err(anyhow!("Invalid CPF: {}", raw))
}

/// Validate a required text field with a maximum length in characters
pub fn validate_name(value: &str, field_name: &str, max_len: usize) -> Result<()> {
    if value.trim().is_empty() {
        return Err(anyhow!("{} cannot be empty", field_name));
    }

    if value.chars().count() > max_len {
        return Err(anyhow!(
            "{} cannot be longer than {} characters",
            field_name,
            max_len
        ));
    }

    Ok(())
}

/// Validate body measurements (weight in kg, height in m)
pub fn validate_measurement(value: f64, field_name: &str) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(anyhow!("{} must be a positive number", field_name));
    }
    Ok(())
}
