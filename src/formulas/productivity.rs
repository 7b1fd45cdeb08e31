use super::{input, minutes_to_hours, percent_to_decimal, ComponentInputs};

const WEEKS_PER_YEAR: f64 = 52.0;

/// `ticketsRemaining × (minsSaved/60) × hourlyRate`
pub fn agent_productivity(tickets_remaining: f64, time_saved_minutes: f64, hourly_rate: f64) -> f64 {
    tickets_remaining * minutes_to_hours(time_saved_minutes) * hourly_rate
}

/// Standard productivity components differ only in which field holds the
/// remaining volume.
pub fn standard(inputs: &ComponentInputs, volume_field: &str, hourly_rate: f64) -> f64 {
    agent_productivity(
        input(inputs, volume_field),
        input(inputs, "timeSavedMinutes"),
        hourly_rate,
    )
}

pub fn esm_tickets_remaining(inputs: &ComponentInputs) -> f64 {
    input(inputs, "hrTicketsRemaining")
        + input(inputs, "facilitiesTicketsRemaining")
        + input(inputs, "legalTicketsRemaining")
        + input(inputs, "financeTicketsRemaining")
}

pub fn esm_agent_productivity(inputs: &ComponentInputs, hourly_rate: f64) -> f64 {
    agent_productivity(
        esm_tickets_remaining(inputs),
        input(inputs, "timeSavedMinutes"),
        hourly_rate,
    )
}

/// `changes × (avgPctFailed/100) × (pctReduction/100) × (minsSaved/60) × hourlyRate`
pub fn change_management(inputs: &ComponentInputs, hourly_rate: f64) -> f64 {
    let failed_changes_avoided = input(inputs, "numberOfChanges")
        * percent_to_decimal(input(inputs, "avgPercentFailedChanges"))
        * percent_to_decimal(input(inputs, "percentReductionInFailedChanges"));
    failed_changes_avoided * minutes_to_hours(input(inputs, "timeSavedMinutes")) * hourly_rate
}

/// `(weeklyHours × 52) × (pctTimeSaved/100) × hourlyRate`
pub fn time_based(inputs: &ComponentInputs, hourly_rate: f64) -> f64 {
    let annual_hours = input(inputs, "timeSpentTodayHours") * WEEKS_PER_YEAR;
    annual_hours * percent_to_decimal(input(inputs, "percentTimeSaved")) * hourly_rate
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(pairs: &[(&str, f64)]) -> ComponentInputs {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_change_management_catalog_defaults() {
        let data = inputs(&[
            ("numberOfChanges", 500.0),
            ("avgPercentFailedChanges", 15.0),
            ("percentReductionInFailedChanges", 20.0),
            ("timeSavedMinutes", 45.0),
        ]);
        // 500 × 0.15 × 0.2 = 15 changes, × 0.75 h = 11.25 h
        assert!((change_management(&data, 40.0) - 450.0).abs() < 1e-9);
    }

    #[test]
    fn test_time_based_annualizes_weekly_hours() {
        let data = inputs(&[("timeSpentTodayHours", 20.0), ("percentTimeSaved", 15.0)]);
        // 1040 h × 0.15 = 156 h
        assert!((time_based(&data, 50.0) - 7800.0).abs() < 1e-9);
    }

    #[test]
    fn test_standard_reads_named_volume_field() {
        let data = inputs(&[("requestsRemaining", 600.0), ("timeSavedMinutes", 10.0)]);
        assert!((standard(&data, "requestsRemaining", 30.0) - 3000.0).abs() < 1e-9);
        assert_eq!(standard(&data, "ticketsRemaining", 30.0), 0.0);
    }

    #[test]
    fn test_esm_remaining_sum() {
        let data = inputs(&[
            ("hrTicketsRemaining", 4000.0),
            ("facilitiesTicketsRemaining", 2500.0),
            ("legalTicketsRemaining", 800.0),
            ("financeTicketsRemaining", 1600.0),
            ("timeSavedMinutes", 6.0),
        ]);
        assert_eq!(esm_tickets_remaining(&data), 8900.0);
        assert!((esm_agent_productivity(&data, 10.0) - 8900.0).abs() < 1e-9);
    }
}
