use crate::traits::Notifier;
use bacteriaguard_core::content::common_symptoms;
use bacteriaguard_core::report::{Acknowledgment, IncidentReport, PhotoAttachment};
use bacteriaguard_core::types::FoodCategory;
use std::collections::BTreeSet;
use std::sync::Arc;

/// In-memory incident report form.
///
/// Submission never leaves the process: it shows the acknowledgment toast and
/// clears the draft.
pub struct ReportForm {
    draft: IncidentReport,
    // Symptom badges are selectable but do not feed `draft.symptoms`.
    selected_tags: BTreeSet<&'static str>,
    notifier: Arc<dyn Notifier>,
}

impl ReportForm {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            draft: IncidentReport::default(),
            selected_tags: BTreeSet::new(),
            notifier,
        }
    }

    pub fn draft(&self) -> &IncidentReport {
        &self.draft
    }

    pub fn set_food_category(&mut self, category: Option<FoodCategory>) {
        self.draft.food_category = category;
    }

    pub fn set_symptoms(&mut self, value: impl Into<String>) {
        self.draft.symptoms = value.into();
    }

    pub fn set_location(&mut self, value: impl Into<String>) {
        self.draft.location = value.into();
    }

    pub fn set_consumption_date(&mut self, value: impl Into<String>) {
        self.draft.consumption_date = value.into();
    }

    pub fn set_contact(&mut self, value: impl Into<String>) {
        self.draft.contact = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.draft.description = value.into();
    }

    pub fn attach_photo(&mut self, file_name: impl Into<String>) {
        self.draft.photo = Some(PhotoAttachment {
            file_name: file_name.into(),
        });
    }

    pub fn clear_photo(&mut self) {
        self.draft.photo = None;
    }

    /// Toggles a symptom badge. Returns the new selection state, or `None` if
    /// `tag` is not one of the offered symptoms.
    pub fn toggle_symptom_tag(&mut self, tag: &str) -> Option<bool> {
        let known = common_symptoms()
            .iter()
            .copied()
            .find(|s| s.eq_ignore_ascii_case(tag.trim()))?;

        if self.selected_tags.remove(known) {
            Some(false)
        } else {
            self.selected_tags.insert(known);
            Some(true)
        }
    }

    pub fn selected_tags(&self) -> Vec<&'static str> {
        // Keep badge order rather than alphabetical.
        common_symptoms()
            .iter()
            .copied()
            .filter(|s| self.selected_tags.contains(s))
            .collect()
    }

    /// Replaces the whole draft, e.g. when a front end collects every field at once.
    pub fn fill(&mut self, report: IncidentReport) {
        self.draft = report;
    }

    pub fn submit(&mut self) -> Acknowledgment {
        let missing = self.draft.missing_required();
        if !missing.is_empty() {
            log::warn!("report submitted without required fields: {}", missing.join(", "));
        }
        if self.draft.photo.is_some() {
            log::debug!("photo attachment accepted but not processed");
        }

        let ack = Acknowledgment::issue();
        log::info!("report acknowledged: {}", ack.confirmation_number);
        self.notifier.notify(&ack.toast());

        self.draft = IncidentReport::default();
        self.selected_tags.clear();
        ack
    }
}
