use anyhow::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::validate_name;

pub const TRAINING_CENTER_NAME_MAX_LEN: usize = 20;
pub const ADDRESS_MAX_LEN: usize = 60;
pub const OWNER_MAX_LEN: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingCenter {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub owner: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTrainingCenter {
    pub name: String,
    pub address: String,
    pub owner: String,
}

impl CreateTrainingCenter {
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name, "Training center name", TRAINING_CENTER_NAME_MAX_LEN)?;
        validate_name(&self.address, "Address", ADDRESS_MAX_LEN)?;
        validate_name(&self.owner, "Owner", OWNER_MAX_LEN)?;
        Ok(())
    }

    pub fn into_training_center(self) -> TrainingCenter {
        TrainingCenter {
            id: Uuid::new_v4(),
            name: self.name,
            address: self.address,
            owner: self.owner,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingCenterRef {
    pub name: String,
}

impl From<&TrainingCenter> for TrainingCenterRef {
    fn from(center: &TrainingCenter) -> Self {
        Self {
            name: center.name.clone(),
        }
    }
}
