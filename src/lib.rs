// Library exports for workout-api
// The binary and the integration tests both go through these modules

pub mod commands;
pub mod config;
pub mod models;

pub use models::cpf::{check_digits, format, is_valid, normalize};
pub use models::{Cpf, CpfError};
