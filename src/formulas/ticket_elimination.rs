use super::{input, minutes_to_hours, percent_to_decimal, ComponentInputs};

/// `tickets × (pctEliminated/100) × (minsSaved/60) × hourlyRate`
pub fn ticket_elimination(
    number_of_tickets: f64,
    percent_eliminated: f64,
    time_saved_minutes: f64,
    hourly_rate: f64,
) -> f64 {
    let tickets_eliminated = number_of_tickets * percent_to_decimal(percent_eliminated);
    let hours_freed = tickets_eliminated * minutes_to_hours(time_saved_minutes);
    hours_freed * hourly_rate
}

/// Knowledge base, service request automation, AI agent and proactive
/// problem management all read the same three fields.
pub fn single_pool(inputs: &ComponentInputs, hourly_rate: f64) -> f64 {
    ticket_elimination(
        input(inputs, "numberOfTickets"),
        input(inputs, "percentEliminated"),
        input(inputs, "timeSavedMinutes"),
        hourly_rate,
    )
}

pub fn esm_total_tickets(inputs: &ComponentInputs) -> f64 {
    input(inputs, "hrTickets")
        + input(inputs, "facilitiesTickets")
        + input(inputs, "legalTickets")
        + input(inputs, "financeTickets")
}

pub fn esm_ticket_elimination(inputs: &ComponentInputs, hourly_rate: f64) -> f64 {
    ticket_elimination(
        esm_total_tickets(inputs),
        input(inputs, "percentEliminated"),
        input(inputs, "timeSavedMinutes"),
        hourly_rate,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(pairs: &[(&str, f64)]) -> ComponentInputs {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_knowledge_base_reference_value() {
        let benefit = single_pool(
            &inputs(&[
                ("numberOfTickets", 100_000.0),
                ("percentEliminated", 7.5),
                ("timeSavedMinutes", 5.0),
            ]),
            28.85,
        );
        // 7,500 tickets × 5/60 h × 28.85
        assert!((benefit - 18_031.25).abs() < 1e-6);
    }

    #[test]
    fn test_esm_sums_all_four_departments() {
        let data = inputs(&[
            ("hrTickets", 5000.0),
            ("facilitiesTickets", 3000.0),
            ("legalTickets", 1000.0),
            ("financeTickets", 2000.0),
            ("percentEliminated", 10.0),
            ("timeSavedMinutes", 60.0),
        ]);
        assert_eq!(esm_total_tickets(&data), 11_000.0);
        assert!((esm_ticket_elimination(&data, 20.0) - 22_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_department_counts_as_zero() {
        let data = inputs(&[
            ("hrTickets", 1200.0),
            ("percentEliminated", 50.0),
            ("timeSavedMinutes", 60.0),
        ]);
        assert!((esm_ticket_elimination(&data, 10.0) - 6000.0).abs() < 1e-9);
    }
}
