use bacteriaguard_core::content::{EducationTopic, education_topics};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EducationError {
    #[error("no education topic at index {index} (have {len})")]
    UnknownTopic { index: usize, len: usize },
}

/// Read More / Show Less state for the education cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationPanel {
    expanded: Vec<bool>,
}

impl Default for EducationPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl EducationPanel {
    pub fn new() -> Self {
        Self {
            expanded: vec![false; education_topics().len()],
        }
    }

    pub fn topics(&self) -> &'static [EducationTopic] {
        education_topics()
    }

    fn check(&self, index: usize) -> Result<(), EducationError> {
        if index >= self.expanded.len() {
            return Err(EducationError::UnknownTopic {
                index,
                len: self.expanded.len(),
            });
        }
        Ok(())
    }

    /// Flips one card; returns whether it is now expanded.
    pub fn toggle(&mut self, index: usize) -> Result<bool, EducationError> {
        self.check(index)?;
        self.expanded[index] = !self.expanded[index];
        Ok(self.expanded[index])
    }

    pub fn is_expanded(&self, index: usize) -> Result<bool, EducationError> {
        self.check(index)?;
        Ok(self.expanded[index])
    }

    pub fn button_label(&self, index: usize) -> Result<&'static str, EducationError> {
        Ok(if self.is_expanded(index)? {
            "Show Less"
        } else {
            "Read More"
        })
    }

    pub fn visible_text(&self, index: usize) -> Result<&'static str, EducationError> {
        let expanded = self.is_expanded(index)?;
        let topic = &education_topics()[index];
        Ok(if expanded {
            topic.body
        } else {
            topic.description
        })
    }
}
