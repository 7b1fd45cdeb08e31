use super::GuardrailResult;

/// ROI percentage above which a result needs manual review before export.
pub const ROI_EXPORT_LIMIT: f64 = 300.0;
/// ROI percentage below which the band guardrail flags limited value.
pub const ROI_LOW_WATERMARK: f64 = 100.0;

const ROI_REVIEW_MESSAGE: &str =
    "A result with an ROI over 300% requires a review. Please contact the Value Engineering team for support.";
const ROI_LOW_MESSAGE: &str =
    "ROI below 100% may indicate limited value. Please review your inputs to ensure accuracy.";

/// Hard block for ROI strictly above 300%. Exactly 300 passes.
pub fn check_roi_export_threshold(roi: f64) -> GuardrailResult {
    if roi > ROI_EXPORT_LIMIT {
        GuardrailResult::block(ROI_REVIEW_MESSAGE)
    } else {
        GuardrailResult::pass()
    }
}

/// Band check. ROI above 300 blocks whether or not the band is enabled;
/// below 100 warns, or blocks in `block_mode`, only when enabled.
pub fn check_roi_guardrail(roi: f64, enabled: bool, block_mode: bool) -> GuardrailResult {
    if roi > ROI_EXPORT_LIMIT {
        return check_roi_export_threshold(roi);
    }
    if !enabled || roi >= ROI_LOW_WATERMARK {
        return GuardrailResult::pass();
    }
    if block_mode {
        GuardrailResult::block(ROI_LOW_MESSAGE)
    } else {
        GuardrailResult::warn(ROI_LOW_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guardrails::Severity;

    #[test]
    fn test_export_threshold_boundary() {
        assert!(!check_roi_export_threshold(301.0).allowed);
        assert!(check_roi_export_threshold(300.0).allowed);
        assert_eq!(check_roi_export_threshold(300.01).severity, Severity::Error);
    }

    #[test]
    fn test_band_within_range_is_silent() {
        let result = check_roi_guardrail(250.0, true, false);
        assert!(result.allowed);
        assert!(result.warning.is_none());
        assert_eq!(result.severity, Severity::Info);
    }

    #[test]
    fn test_band_low_roi_warns_or_blocks() {
        let warned = check_roi_guardrail(80.0, true, false);
        assert!(warned.allowed);
        assert_eq!(warned.severity, Severity::Warning);

        let blocked = check_roi_guardrail(80.0, true, true);
        assert!(!blocked.allowed);
        assert_eq!(blocked.error.as_deref(), Some(ROI_LOW_MESSAGE));
    }

    #[test]
    fn test_band_disabled_still_blocks_above_limit() {
        assert!(check_roi_guardrail(80.0, false, true).allowed);
        assert!(!check_roi_guardrail(450.0, false, false).allowed);
    }

    #[test]
    fn test_band_lower_edge_is_inclusive() {
        assert_eq!(check_roi_guardrail(100.0, true, true), GuardrailResult::pass());
    }
}
