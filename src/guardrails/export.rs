use super::roi::{check_roi_export_threshold, ROI_LOW_WATERMARK};
use serde::{Deserialize, Serialize};

/// Aggregated export decision. Blockers prevent export; warnings do not.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportReadiness {
    pub can_export: bool,
    pub blockers: Vec<String>,
    pub warnings: Vec<String>,
}

pub fn check_export_readiness(
    roi: f64,
    opportunity_complete: bool,
    agent_data_complete: bool,
    pricing_complete: bool,
    maturity_complete: bool,
) -> ExportReadiness {
    let mut blockers = Vec::new();
    let mut warnings = Vec::new();

    if let Some(error) = check_roi_export_threshold(roi).error {
        blockers.push(error);
    }
    if !opportunity_complete {
        blockers.push("Opportunity data is incomplete".to_string());
    }
    if !agent_data_complete {
        blockers.push("Agent data is incomplete".to_string());
    }
    if !pricing_complete {
        blockers.push("Pricing data is incomplete".to_string());
    }
    if !maturity_complete {
        warnings.push("Maturity assessment is incomplete - results may be less accurate".to_string());
    }
    if roi < ROI_LOW_WATERMARK {
        warnings.push(
            "ROI below 100% may indicate limited value. Please review calculations before sharing."
                .to_string(),
        );
    }

    ExportReadiness {
        can_export: blockers.is_empty(),
        blockers,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_all_complete_in_band_can_export() {
        assert_eq!(
            check_export_readiness(150.0, true, true, true, true),
            ExportReadiness {
                can_export: true,
                blockers: vec![],
                warnings: vec![],
            }
        );
    }

    #[test]
    fn test_high_roi_blocks_export() {
        let readiness = check_export_readiness(350.0, true, true, true, true);
        assert!(!readiness.can_export);
        assert_eq!(readiness.blockers.len(), 1);
        assert!(readiness.blockers[0].contains("over 300%"));
    }

    #[test]
    fn test_missing_data_collects_every_blocker() {
        let readiness = check_export_readiness(150.0, false, false, false, true);
        assert_eq!(
            readiness.blockers,
            vec![
                "Opportunity data is incomplete",
                "Agent data is incomplete",
                "Pricing data is incomplete",
            ]
        );
    }

    #[test]
    fn test_maturity_and_low_roi_only_warn() {
        let readiness = check_export_readiness(50.0, true, true, true, false);
        assert!(readiness.can_export);
        assert_eq!(readiness.warnings.len(), 2);
    }
}
