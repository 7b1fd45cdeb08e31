use super::GuardrailResult;

const BLOCK_PERCENT: f64 = 200.0;
const WARN_PERCENT: f64 = 100.0;

/// Compare a manually overridden value against its catalog default.
///
/// Deviation above 200% blocks and above 100% warns. A zero default has no
/// meaningful relative change, so any different value counts as unbounded.
pub fn check_manual_override_allowed(original: f64, new: f64, enabled: bool) -> GuardrailResult {
    if !enabled {
        return GuardrailResult::pass();
    }

    let percent_change = if original == 0.0 {
        if new == 0.0 {
            0.0
        } else {
            f64::INFINITY
        }
    } else {
        ((new - original) / original * 100.0).abs()
    };

    if percent_change > BLOCK_PERCENT {
        GuardrailResult::block(
            "Manual override exceeds 200% change from default. This may indicate an unrealistic value.",
        )
    } else if percent_change > WARN_PERCENT {
        GuardrailResult::warn(
            "Manual override exceeds 100% change from default. Please verify this value is correct.",
        )
    } else {
        GuardrailResult::pass()
    }
}
