use crate::types::{ConfirmationNumber, FoodCategory};
use serde::{Deserialize, Serialize};

pub const ACK_TITLE: &str = "Report Submitted Successfully";
pub const ACK_DESCRIPTION: &str =
    "Your food poisoning report has been forwarded to health authorities.";

/// A photo picked in the upload area. Only the name is kept; contents are never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoAttachment {
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IncidentReport {
    pub food_category: Option<FoodCategory>,
    pub symptoms: String,
    pub location: String,
    // Whatever the date input produced, e.g. "2026-10-01". Not parsed.
    pub consumption_date: String,
    pub contact: String,
    pub description: String,
    pub photo: Option<PhotoAttachment>,
}

impl IncidentReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_food_category(mut self, category: FoodCategory) -> Self {
        self.food_category = Some(category);
        self
    }

    pub fn with_symptoms(mut self, symptoms: impl Into<String>) -> Self {
        self.symptoms = symptoms.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_consumption_date(mut self, date: impl Into<String>) -> Self {
        self.consumption_date = date.into();
        self
    }

    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = contact.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn contact(&self) -> Option<&str> {
        non_blank(&self.contact)
    }

    pub fn description(&self) -> Option<&str> {
        non_blank(&self.description)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Fields labelled "*" on the form that are still blank.
    ///
    /// Nothing enforces these; callers may only warn.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.food_category.is_none() {
            missing.push("food_category");
        }
        missing
    }
}

fn non_blank(s: &str) -> Option<&str> {
    let t = s.trim();
    (!t.is_empty()).then_some(t)
}

/// Transient notification shown by the display layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgment {
    pub title: String,
    pub description: String,
    pub confirmation_number: ConfirmationNumber,
}

impl Acknowledgment {
    pub fn issue() -> Self {
        Self {
            title: ACK_TITLE.into(),
            description: ACK_DESCRIPTION.into(),
            confirmation_number: ConfirmationNumber::new(),
        }
    }

    pub fn toast(&self) -> Toast {
        Toast {
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }
}
