use crate::types::{ResultClass, ScanResult};

fn outcome(
    classification: ResultClass,
    confidence: u8,
    details: &str,
    recommendations: &[&str],
) -> ScanResult {
    ScanResult {
        classification,
        confidence,
        details: details.to_string(),
        recommendations: recommendations.iter().map(|r| r.to_string()).collect(),
    }
}

/// The canned outcomes a completed scan draws from, in catalog order.
pub fn outcome_catalog() -> Vec<ScanResult> {
    vec![
        outcome(
            ResultClass::Safe,
            96,
            "No harmful bacteria detected. Sample appears safe for consumption.",
            &[
                "Store in refrigerated conditions",
                "Consume within recommended timeframe",
            ],
        ),
        outcome(
            ResultClass::Warning,
            78,
            "Moderate bacterial presence detected. Exercise caution.",
            &[
                "Cook thoroughly before consumption",
                "Do not consume raw",
                "Check expiration date",
            ],
        ),
        outcome(
            ResultClass::Danger,
            92,
            "High levels of harmful bacteria detected. Do not consume.",
            &[
                "Dispose of item immediately",
                "Clean preparation surfaces",
                "Wash hands thoroughly",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_safe_warning_danger() {
        let catalog = outcome_catalog();
        let classes: Vec<_> = catalog.iter().map(|o| o.classification).collect();
        assert_eq!(
            classes,
            vec![ResultClass::Safe, ResultClass::Warning, ResultClass::Danger]
        );

        let confidences: Vec<_> = catalog.iter().map(|o| o.confidence).collect();
        assert_eq!(confidences, vec![96, 78, 92]);

        let rec_counts: Vec<_> = catalog.iter().map(|o| o.recommendations.len()).collect();
        assert_eq!(rec_counts, vec![2, 3, 3]);
    }

    #[test]
    fn details_are_verbatim() {
        let catalog = outcome_catalog();
        assert!(catalog[0].details.starts_with("No harmful bacteria detected"));
        assert!(catalog[1].details.starts_with("Moderate bacterial presence detected"));
        assert!(catalog[2].details.starts_with("High levels of harmful bacteria detected"));
        assert_eq!(catalog[2].recommendations[2], "Wash hands thoroughly");
    }
}
