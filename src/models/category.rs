use anyhow::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::validate_name;

pub const CATEGORY_NAME_MAX_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategory {
    pub name: String,
}

impl CreateCategory {
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name, "Category name", CATEGORY_NAME_MAX_LEN)
    }

    pub fn into_category(self) -> Category {
        Category {
            id: Uuid::new_v4(),
            name: self.name,
        }
    }
}

/// Reference to a category by name, as embedded in athlete payloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub name: String,
}

impl From<&Category> for CategoryRef {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_category_validation() {
        assert!(CreateCategory { name: "Scale".into() }.validate().is_ok());
        assert!(CreateCategory { name: "".into() }.validate().is_err());
        assert!(CreateCategory { name: "Intermediate".into() }.validate().is_err());
    }

    #[test]
    fn test_into_category_keeps_name() {
        let category = CreateCategory { name: "RX".into() }.into_category();
        assert_eq!(category.name, "RX");
        assert_eq!(CategoryRef::from(&category).name, "RX");
    }
}
