// Record types and identifier validation

pub mod cpf;
pub mod validation;
pub mod category;
pub mod training_center;
pub mod athlete;

pub use cpf::{Cpf, CpfError};
pub use validation::*;
pub use category::*;
pub use training_center::*;
pub use athlete::*;
