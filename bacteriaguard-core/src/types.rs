use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfirmationNumber(pub Uuid);

impl ConfirmationNumber {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConfirmationNumber {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConfirmationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultClass {
    Safe,
    Warning,
    Danger,
}

impl ResultClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultClass::Safe => "safe",
            ResultClass::Warning => "warning",
            ResultClass::Danger => "danger",
        }
    }
}

impl fmt::Display for ResultClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub classification: ResultClass,
    pub confidence: u8,
    pub details: String,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Meat,
    Seafood,
    Dairy,
    Vegetables,
    Beverages,
    Prepared,
    Other,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 7] = [
        FoodCategory::Meat,
        FoodCategory::Seafood,
        FoodCategory::Dairy,
        FoodCategory::Vegetables,
        FoodCategory::Beverages,
        FoodCategory::Prepared,
        FoodCategory::Other,
    ];

    /// Form value, as submitted by the category select.
    pub fn value(&self) -> &'static str {
        match self {
            FoodCategory::Meat => "meat",
            FoodCategory::Seafood => "seafood",
            FoodCategory::Dairy => "dairy",
            FoodCategory::Vegetables => "vegetables",
            FoodCategory::Beverages => "beverages",
            FoodCategory::Prepared => "prepared",
            FoodCategory::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FoodCategory::Meat => "Meat Products",
            FoodCategory::Seafood => "Seafood",
            FoodCategory::Dairy => "Dairy Products",
            FoodCategory::Vegetables => "Vegetables/Fruits",
            FoodCategory::Beverages => "Beverages",
            FoodCategory::Prepared => "Prepared Meals",
            FoodCategory::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown food category: {0}")]
pub struct ParseFoodCategoryError(pub String);

impl FromStr for FoodCategory {
    type Err = ParseFoodCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        FoodCategory::ALL
            .into_iter()
            .find(|c| c.value() == needle || c.label().to_lowercase() == needle)
            .ok_or_else(|| ParseFoodCategoryError(s.to_string()))
    }
}
