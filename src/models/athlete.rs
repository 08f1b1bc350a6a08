use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::{CategoryRef, CATEGORY_NAME_MAX_LEN};
use super::cpf::Cpf;
use super::training_center::{TrainingCenterRef, TRAINING_CENTER_NAME_MAX_LEN};
use super::validation::{validate_measurement, validate_name};

pub const ATHLETE_NAME_MAX_LEN: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Athlete {
    pub id: Uuid,
    pub name: String,
    pub cpf: Cpf,
    pub age: u32,
    pub weight: f64,
    pub height: f64,
    pub sex: Sex,
    pub category: CategoryRef,
    pub training_center: TrainingCenterRef,
    pub created_at: DateTime<Utc>,
}

/// Athlete creation payload. The CPF is checked while deserializing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAthlete {
    pub name: String,
    pub cpf: Cpf,
    pub age: u32,
    pub weight: f64,
    pub height: f64,
    pub sex: Sex,
    pub category: CategoryRef,
    pub training_center: TrainingCenterRef,
}

impl CreateAthlete {
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name, "Athlete name", ATHLETE_NAME_MAX_LEN)?;
        validate_measurement(self.weight, "Weight")?;
        validate_measurement(self.height, "Height")?;
        validate_name(&self.category.name, "Category name", CATEGORY_NAME_MAX_LEN)?;
        validate_name(
            &self.training_center.name,
            "Training center name",
            TRAINING_CENTER_NAME_MAX_LEN,
        )?;
        Ok(())
    }

    pub fn into_athlete(self) -> Athlete {
        Athlete {
            id: Uuid::new_v4(),
            name: self.name,
            cpf: self.cpf,
            age: self.age,
            weight: self.weight,
            height: self.height,
            sex: self.sex,
            category: self.category,
            training_center: self.training_center,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct UpdateAthlete {
    pub name: Option<String>,
    pub age: Option<u32>,
}

impl UpdateAthlete {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            validate_name(name, "Athlete name", ATHLETE_NAME_MAX_LEN)?;
        }
        Ok(())
    }
}

impl Athlete {
    /// Apply only the fields set on the update
    pub fn apply_update(&mut self, update: UpdateAthlete) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(age) = update.age {
            self.age = age;
        }
    }
}
