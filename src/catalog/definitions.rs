//! Static component table.
//!
//! Declaration order is significant: visibility queries and result lists
//! preserve it.

use super::types::{
    ComponentCategory, ComponentDefinition, ComponentId, FieldKind, InputField, MaturityDefaults,
    ParameterSet, Plan, ValueRange,
};
use once_cell::sync::Lazy;

const ALL_PLANS: &[Plan] = &[
    Plan::Growth,
    Plan::Pro,
    Plan::Enterprise,
    Plan::GrowthToPro,
    Plan::ProToEnterprise,
];
const PRO_AND_UP: &[Plan] = &[
    Plan::Pro,
    Plan::Enterprise,
    Plan::GrowthToPro,
    Plan::ProToEnterprise,
];
const ENTERPRISE_ONLY: &[Plan] = &[Plan::Enterprise, Plan::ProToEnterprise];

pub static COMPONENT_CATALOG: Lazy<Vec<ComponentDefinition>> = Lazy::new(build_catalog);

fn field(
    id: &'static str,
    label: &'static str,
    kind: FieldKind,
    default_value: Option<f64>,
    tooltip: &'static str,
) -> InputField {
    let max = match kind {
        FieldKind::Percent => Some(100.0),
        _ => None,
    };
    InputField {
        id,
        label,
        kind,
        required: true,
        min: Some(0.0),
        max,
        default_value,
        tooltip: Some(tooltip),
    }
}

fn params(entries: &[(&'static str, f64)]) -> ParameterSet {
    entries.iter().copied().collect()
}

fn maturity(
    low: &[(&'static str, f64)],
    medium: &[(&'static str, f64)],
    high: &[(&'static str, f64)],
) -> Option<MaturityDefaults> {
    Some(MaturityDefaults {
        low: params(low),
        medium: params(medium),
        high: params(high),
    })
}

/// Fields shared by the single-pool ticket elimination components.
fn ticket_elimination_fields(
    tickets_label: &'static str,
    tickets_tooltip: &'static str,
    percent_label: &'static str,
    percent_tooltip: &'static str,
    time_label: &'static str,
    default_minutes: f64,
    time_tooltip: &'static str,
) -> Vec<InputField> {
    vec![
        field("numberOfTickets", tickets_label, FieldKind::Number, None, tickets_tooltip),
        field("percentEliminated", percent_label, FieldKind::Percent, None, percent_tooltip),
        field(
            "timeSavedMinutes",
            time_label,
            FieldKind::Number,
            Some(default_minutes),
            time_tooltip,
        ),
    ]
}

fn time_based_fields(
    hours_label: &'static str,
    default_hours: f64,
    hours_tooltip: &'static str,
    default_percent: f64,
    percent_tooltip: &'static str,
) -> Vec<InputField> {
    vec![
        field(
            "timeSpentTodayHours",
            hours_label,
            FieldKind::Hours,
            Some(default_hours),
            hours_tooltip,
        ),
        field(
            "percentTimeSaved",
            "% Time Saved",
            FieldKind::Percent,
            Some(default_percent),
            percent_tooltip,
        ),
    ]
}

fn build_catalog() -> Vec<ComponentDefinition> {
    use ComponentCategory::*;

    vec![
        // Ticket elimination
        ComponentDefinition {
            id: ComponentId::KnowledgeBase,
            name: "Knowledge Base (ITSM)",
            description: "Self-service knowledge base articles that deflect tickets before they reach agents",
            tooltip: "Proportion of tickets deflected via KB articles and self-service portal.",
            category: TicketElimination,
            visible_for_plans: ALL_PLANS,
            requires_esm: false,
            requires_freddy: false,
            supports_maturity: true,
            maturity_defaults: maturity(
                &[("percentEliminated", 7.5), ("timeSavedMinutes", 5.0)],
                &[("percentEliminated", 5.0), ("timeSavedMinutes", 5.0)],
                &[("percentEliminated", 0.0), ("timeSavedMinutes", 5.0)],
            ),
            other_range: Some(ValueRange::new(0.0, 20.0)),
            custom_parameter: Some("percentEliminated"),
            input_fields: ticket_elimination_fields(
                "Total Annual Tickets",
                "Total incidents + service requests annually",
                "% Tickets Eliminated",
                "Percentage of tickets deflected by knowledge base",
                "Time Saved per Ticket (minutes)",
                5.0,
                "Average resolution time per ticket",
            ),
        },
        ComponentDefinition {
            id: ComponentId::AutomationServiceRequests,
            name: "Automation of Service Requests (ITSM)",
            description: "Workflow automation that handles service requests without human intervention",
            tooltip: "Automated fulfillment of routine service requests eliminating manual work.",
            category: TicketElimination,
            visible_for_plans: PRO_AND_UP,
            requires_esm: false,
            requires_freddy: false,
            supports_maturity: true,
            maturity_defaults: maturity(
                &[("percentEliminated", 15.0), ("timeSavedMinutes", 10.0)],
                &[("percentEliminated", 10.0), ("timeSavedMinutes", 10.0)],
                &[("percentEliminated", 5.0), ("timeSavedMinutes", 10.0)],
            ),
            other_range: Some(ValueRange::new(0.0, 30.0)),
            custom_parameter: Some("percentEliminated"),
            input_fields: ticket_elimination_fields(
                "Total Annual Service Requests",
                "Total service requests handled annually",
                "% Requests Automated",
                "Percentage of service requests fully automated",
                "Time Saved per Request (minutes)",
                10.0,
                "Average time to manually fulfill a service request",
            ),
        },
        ComponentDefinition {
            id: ComponentId::FreddyAiAgent,
            name: "Freddy AI Agent",
            description: "AI-powered virtual agent resolves tickets autonomously",
            tooltip: "Freddy AI Agent resolves common inquiries without human agent involvement.",
            category: TicketElimination,
            visible_for_plans: ALL_PLANS,
            requires_esm: false,
            requires_freddy: true,
            supports_maturity: true,
            maturity_defaults: maturity(
                &[("percentEliminated", 12.0), ("timeSavedMinutes", 12.0)],
                &[("percentEliminated", 8.0), ("timeSavedMinutes", 12.0)],
                &[("percentEliminated", 4.0), ("timeSavedMinutes", 12.0)],
            ),
            other_range: Some(ValueRange::new(0.0, 25.0)),
            custom_parameter: Some("percentEliminated"),
            input_fields: ticket_elimination_fields(
                "Total Annual Tickets",
                "Total tickets eligible for AI handling",
                "% Resolved by AI",
                "Percentage resolved by Freddy AI without escalation",
                "Time Saved per Ticket (minutes)",
                12.0,
                "Average agent time saved per AI-resolved ticket",
            ),
        },
        ComponentDefinition {
            id: ComponentId::ProactiveProblemManagement,
            name: "Proactive Problem Management",
            description: "Root cause analysis eliminates recurring incidents",
            tooltip: "Fixing root causes prevents future incidents, reducing ticket volume.",
            category: TicketElimination,
            visible_for_plans: PRO_AND_UP,
            requires_esm: false,
            requires_freddy: false,
            supports_maturity: true,
            maturity_defaults: maturity(
                &[("percentEliminated", 10.0), ("timeSavedMinutes", 30.0)],
                &[("percentEliminated", 7.0), ("timeSavedMinutes", 30.0)],
                &[("percentEliminated", 3.0), ("timeSavedMinutes", 30.0)],
            ),
            other_range: Some(ValueRange::new(0.0, 20.0)),
            custom_parameter: Some("percentEliminated"),
            input_fields: ticket_elimination_fields(
                "Total Annual Incidents",
                "Total incidents that could be prevented",
                "% Incidents Prevented",
                "Percentage prevented through problem management",
                "Time Saved per Incident (minutes)",
                30.0,
                "Average time to resolve recurring incidents",
            ),
        },
        ComponentDefinition {
            id: ComponentId::EsmTicketElimination,
            name: "ESM Ticket Elimination",
            description: "Self-service portals for HR, Facilities, Legal, and Finance reduce ticket volumes",
            tooltip: "Non-IT departments deflect their tickets through self-service.",
            category: TicketElimination,
            visible_for_plans: ALL_PLANS,
            requires_esm: true,
            requires_freddy: false,
            supports_maturity: true,
            maturity_defaults: maturity(
                &[("percentEliminated", 15.0), ("timeSavedMinutes", 8.0)],
                &[("percentEliminated", 10.0), ("timeSavedMinutes", 8.0)],
                &[("percentEliminated", 5.0), ("timeSavedMinutes", 8.0)],
            ),
            other_range: Some(ValueRange::new(0.0, 30.0)),
            custom_parameter: Some("percentEliminated"),
            input_fields: vec![
                field("hrTickets", "Annual HR Tickets", FieldKind::Number, None, "HR service requests annually"),
                field("facilitiesTickets", "Annual Facilities Tickets", FieldKind::Number, None, "Facilities/workspace requests annually"),
                field("legalTickets", "Annual Legal Tickets", FieldKind::Number, None, "Legal department requests annually"),
                field("financeTickets", "Annual Finance Tickets", FieldKind::Number, None, "Finance department requests annually"),
                field("percentEliminated", "% Tickets Deflected", FieldKind::Percent, None, "Percentage deflected via ESM self-service"),
                field("timeSavedMinutes", "Time Saved per Ticket (minutes)", FieldKind::Number, Some(8.0), "Average handling time per ESM ticket"),
            ],
        },
        // Agent productivity
        ComponentDefinition {
            id: ComponentId::IncidentManagement,
            name: "Incident Management",
            description: "Streamlined incident handling for remaining tickets after elimination",
            tooltip: "Time saved per ticket through better workflows for remaining incidents.",
            category: AgentProductivity,
            visible_for_plans: ALL_PLANS,
            requires_esm: false,
            requires_freddy: false,
            supports_maturity: true,
            maturity_defaults: maturity(
                &[("timeSavedMinutes", 10.0)],
                &[("timeSavedMinutes", 7.0)],
                &[("timeSavedMinutes", 3.0)],
            ),
            other_range: Some(ValueRange::new(0.0, 20.0)),
            custom_parameter: Some("timeSavedMinutes"),
            input_fields: vec![
                field("ticketsRemaining", "Tickets Remaining (after elimination)", FieldKind::Number, None, "Tickets still handled by agents after ticket elimination"),
                field("timeSavedMinutes", "Time Saved per Ticket (minutes)", FieldKind::Number, Some(7.0), "Time saved per incident through improved tools/workflows"),
            ],
        },
        ComponentDefinition {
            id: ComponentId::ServiceRequestManagement,
            name: "Service Request Management",
            description: "Faster service request fulfillment for non-automated requests",
            tooltip: "Time saved per request still requiring manual fulfillment after automation.",
            category: AgentProductivity,
            visible_for_plans: ALL_PLANS,
            requires_esm: false,
            requires_freddy: false,
            supports_maturity: true,
            maturity_defaults: maturity(
                &[("timeSavedMinutes", 12.0)],
                &[("timeSavedMinutes", 8.0)],
                &[("timeSavedMinutes", 4.0)],
            ),
            other_range: Some(ValueRange::new(0.0, 25.0)),
            custom_parameter: Some("timeSavedMinutes"),
            input_fields: vec![
                field("requestsRemaining", "Requests Remaining (after automation)", FieldKind::Number, None, "Service requests still manually fulfilled"),
                field("timeSavedMinutes", "Time Saved per Request (minutes)", FieldKind::Number, Some(8.0), "Time saved per manual service request"),
            ],
        },
        ComponentDefinition {
            id: ComponentId::ProblemManagement,
            name: "Problem Management",
            description: "Efficient root cause analysis and problem resolution",
            tooltip: "Time saved conducting problem investigations and implementing fixes.",
            category: AgentProductivity,
            visible_for_plans: PRO_AND_UP,
            requires_esm: false,
            requires_freddy: false,
            supports_maturity: true,
            maturity_defaults: maturity(
                &[("timeSavedMinutes", 30.0)],
                &[("timeSavedMinutes", 20.0)],
                &[("timeSavedMinutes", 10.0)],
            ),
            other_range: Some(ValueRange::new(0.0, 60.0)),
            custom_parameter: Some("timeSavedMinutes"),
            input_fields: vec![
                field("numberOfProblems", "Annual Problems Investigated", FieldKind::Number, Some(50.0), "Number of formal problem investigations per year"),
                field("timeSavedMinutes", "Time Saved per Problem (minutes)", FieldKind::Number, Some(20.0), "Time saved per problem investigation/resolution"),
            ],
        },
        ComponentDefinition {
            id: ComponentId::ChangeManagement,
            name: "Change Management",
            description: "Reduce failed changes and time spent on change processes",
            tooltip: "Better change workflows reduce failed changes and time spent managing changes.",
            category: AgentProductivity,
            visible_for_plans: PRO_AND_UP,
            requires_esm: false,
            requires_freddy: false,
            supports_maturity: true,
            maturity_defaults: maturity(
                &[
                    ("avgPercentFailedChanges", 15.0),
                    ("percentReductionInFailedChanges", 30.0),
                    ("timeSavedMinutes", 45.0),
                ],
                &[
                    ("avgPercentFailedChanges", 15.0),
                    ("percentReductionInFailedChanges", 20.0),
                    ("timeSavedMinutes", 45.0),
                ],
                &[
                    ("avgPercentFailedChanges", 15.0),
                    ("percentReductionInFailedChanges", 10.0),
                    ("timeSavedMinutes", 45.0),
                ],
            ),
            other_range: Some(ValueRange::new(0.0, 50.0)),
            custom_parameter: Some("percentReductionInFailedChanges"),
            input_fields: vec![
                field("numberOfChanges", "Annual Changes", FieldKind::Number, Some(500.0), "Total changes implemented annually"),
                field("avgPercentFailedChanges", "Average % Failed Changes", FieldKind::Percent, Some(15.0), "Current percentage of changes that fail"),
                field("percentReductionInFailedChanges", "% Reduction in Failed Changes", FieldKind::Percent, Some(20.0), "Improvement in change success rate"),
                field("timeSavedMinutes", "Time per Failed Change (minutes)", FieldKind::Number, Some(45.0), "Time to remediate a failed change"),
            ],
        },
        ComponentDefinition {
            id: ComponentId::ProjectManagement,
            name: "Project Management",
            description: "Time saved managing projects with better tools and workflows",
            tooltip: "Improved project tracking, collaboration, and reporting saves PM time.",
            category: AgentProductivity,
            visible_for_plans: ENTERPRISE_ONLY,
            requires_esm: false,
            requires_freddy: false,
            supports_maturity: true,
            maturity_defaults: maturity(
                &[("percentTimeSaved", 25.0)],
                &[("percentTimeSaved", 15.0)],
                &[("percentTimeSaved", 8.0)],
            ),
            other_range: Some(ValueRange::new(0.0, 40.0)),
            custom_parameter: Some("percentTimeSaved"),
            input_fields: time_based_fields(
                "Current Weekly PM Hours",
                20.0,
                "Hours per week spent on project management tasks",
                15.0,
                "Percentage of PM time saved through better tools",
            ),
        },
        ComponentDefinition {
            id: ComponentId::AssetManagement,
            name: "Asset Management",
            description: "Streamlined asset tracking and lifecycle management",
            tooltip: "Automated asset discovery, tracking, and lifecycle management reduces manual effort.",
            category: AgentProductivity,
            visible_for_plans: ENTERPRISE_ONLY,
            requires_esm: false,
            requires_freddy: false,
            supports_maturity: true,
            maturity_defaults: maturity(
                &[("percentTimeSaved", 30.0)],
                &[("percentTimeSaved", 20.0)],
                &[("percentTimeSaved", 10.0)],
            ),
            other_range: Some(ValueRange::new(0.0, 50.0)),
            custom_parameter: Some("percentTimeSaved"),
            input_fields: time_based_fields(
                "Current Weekly Asset Mgmt Hours",
                15.0,
                "Hours per week on asset management",
                20.0,
                "Time saved through automated asset management",
            ),
        },
        ComponentDefinition {
            id: ComponentId::Cmdb,
            name: "CMDB (Configuration Management Database)",
            description: "Automated CMDB population and maintenance",
            tooltip: "Automated discovery and CMDB updates eliminate manual configuration tracking.",
            category: AgentProductivity,
            visible_for_plans: PRO_AND_UP,
            requires_esm: false,
            requires_freddy: false,
            supports_maturity: true,
            maturity_defaults: maturity(
                &[("percentTimeSaved", 40.0)],
                &[("percentTimeSaved", 30.0)],
                &[("percentTimeSaved", 15.0)],
            ),
            other_range: Some(ValueRange::new(0.0, 60.0)),
            custom_parameter: Some("percentTimeSaved"),
            input_fields: time_based_fields(
                "Current Weekly CMDB Hours",
                10.0,
                "Hours per week maintaining CMDB",
                30.0,
                "Time saved through automated CMDB",
            ),
        },
        ComponentDefinition {
            id: ComponentId::ServiceCatalogExpansion,
            name: "Service Catalog Expansion",
            description: "Self-service catalog enables users to request services without tickets",
            tooltip: "More self-requested services reduce manual handling.",
            category: AgentProductivity,
            visible_for_plans: PRO_AND_UP,
            requires_esm: false,
            requires_freddy: false,
            supports_maturity: true,
            maturity_defaults: maturity(
                &[("timeSavedMinutes", 15.0)],
                &[("timeSavedMinutes", 10.0)],
                &[("timeSavedMinutes", 5.0)],
            ),
            other_range: Some(ValueRange::new(0.0, 30.0)),
            custom_parameter: Some("timeSavedMinutes"),
            input_fields: vec![
                field("additionalCatalogRequests", "Additional Annual Catalog Requests", FieldKind::Number, Some(5000.0), "New requests handled via expanded catalog"),
                field("timeSavedMinutes", "Time Saved per Request (minutes)", FieldKind::Number, Some(10.0), "Time saved vs traditional ticket handling"),
            ],
        },
        ComponentDefinition {
            id: ComponentId::EsmAgentProductivity,
            name: "ESM Agent Productivity",
            description: "Time saved handling ESM tickets (HR, Facilities, Legal, Finance) with better tools",
            tooltip: "Non-IT departments handle remaining tickets faster with improved workflows.",
            category: AgentProductivity,
            visible_for_plans: ALL_PLANS,
            requires_esm: true,
            requires_freddy: false,
            supports_maturity: true,
            maturity_defaults: maturity(
                &[("timeSavedMinutes", 10.0)],
                &[("timeSavedMinutes", 7.0)],
                &[("timeSavedMinutes", 3.0)],
            ),
            other_range: Some(ValueRange::new(0.0, 20.0)),
            custom_parameter: Some("timeSavedMinutes"),
            input_fields: vec![
                field("hrTicketsRemaining", "HR Tickets Remaining", FieldKind::Number, None, "HR tickets after ESM elimination"),
                field("facilitiesTicketsRemaining", "Facilities Tickets Remaining", FieldKind::Number, None, "Facilities tickets after ESM elimination"),
                field("legalTicketsRemaining", "Legal Tickets Remaining", FieldKind::Number, None, "Legal tickets after ESM elimination"),
                field("financeTicketsRemaining", "Finance Tickets Remaining", FieldKind::Number, None, "Finance tickets after ESM elimination"),
                field("timeSavedMinutes", "Time Saved per Ticket (minutes)", FieldKind::Number, Some(7.0), "Time saved per ESM ticket through better tools"),
            ],
        },
        // Cost savings
        ComponentDefinition {
            id: ComponentId::LicenseConsolidation,
            name: "License Consolidation",
            description: "Eliminate redundant tools and consolidate licenses",
            tooltip: "Replacing point solutions eliminates tool licensing costs.",
            category: CostSavings,
            visible_for_plans: ALL_PLANS,
            requires_esm: false,
            requires_freddy: false,
            supports_maturity: false,
            maturity_defaults: None,
            other_range: None,
            custom_parameter: None,
            input_fields: vec![
                field("numberOfToolsEliminated", "Number of Tools Eliminated", FieldKind::Number, Some(3.0), "Tools/licenses replaced"),
                field("costPerToolEliminated", "Average Annual Cost per Tool", FieldKind::Currency, Some(10000.0), "Average annual license cost per eliminated tool"),
            ],
        },
        ComponentDefinition {
            id: ComponentId::InfrastructureSavings,
            name: "Infrastructure Savings",
            description: "Reduce on-premises infrastructure costs with SaaS",
            tooltip: "Moving to a cloud service reduces server, storage, and data center costs.",
            category: CostSavings,
            visible_for_plans: ALL_PLANS,
            requires_esm: false,
            requires_freddy: false,
            supports_maturity: false,
            maturity_defaults: None,
            other_range: None,
            custom_parameter: None,
            input_fields: vec![
                field("annualInfraCostBefore", "Current Annual Infrastructure Cost", FieldKind::Currency, Some(50000.0), "Current on-prem infrastructure costs"),
                field("annualInfraCostAfter", "Infrastructure Cost After Migration", FieldKind::Currency, Some(10000.0), "Remaining infrastructure costs after SaaS migration"),
            ],
        },
        ComponentDefinition {
            id: ComponentId::VendorSpendReduction,
            name: "Vendor Spend Reduction",
            description: "Consolidate vendor relationships and reduce spend",
            tooltip: "Consolidating vendors simplifies contracts and often yields volume discounts.",
            category: CostSavings,
            visible_for_plans: PRO_AND_UP,
            requires_esm: false,
            requires_freddy: false,
            supports_maturity: false,
            maturity_defaults: None,
            other_range: None,
            custom_parameter: None,
            input_fields: vec![
                field("currentVendorSpend", "Current Annual Vendor Spend", FieldKind::Currency, Some(200000.0), "Total annual spend across ITSM vendors"),
                field("percentReduction", "% Reduction in Vendor Spend", FieldKind::Percent, Some(20.0), "Expected reduction through consolidation"),
            ],
        },
        ComponentDefinition {
            id: ComponentId::EsmSharedServices,
            name: "ESM Shared Services Savings",
            description: "Centralize HR, Facilities, Legal, and Finance services for efficiency",
            tooltip: "Shared service model for ESM departments reduces duplication and overhead.",
            category: CostSavings,
            visible_for_plans: PRO_AND_UP,
            requires_esm: true,
            requires_freddy: false,
            supports_maturity: false,
            maturity_defaults: None,
            other_range: None,
            custom_parameter: None,
            input_fields: vec![
                field("hrBudget", "Annual HR Operations Budget", FieldKind::Currency, Some(500000.0), "HR operations budget"),
                field("facilitiesBudget", "Annual Facilities Operations Budget", FieldKind::Currency, Some(300000.0), "Facilities operations budget"),
                field("legalBudget", "Annual Legal Operations Budget", FieldKind::Currency, Some(200000.0), "Legal operations budget"),
                field("financeBudget", "Annual Finance Operations Budget", FieldKind::Currency, Some(400000.0), "Finance operations budget"),
                field("percentSaved", "% Saved Through Shared Services", FieldKind::Percent, Some(15.0), "Efficiency gain from shared service model"),
            ],
        },
        ComponentDefinition {
            id: ComponentId::FreddyCopilotSavings,
            name: "Freddy Copilot Direct Savings",
            description: "Agent assist tool saves time on every interaction",
            tooltip: "Freddy Copilot provides real-time suggestions, reducing average handle time.",
            category: CostSavings,
            visible_for_plans: ALL_PLANS,
            requires_esm: false,
            requires_freddy: true,
            supports_maturity: true,
            maturity_defaults: maturity(
                &[("percentHandledByAI", 30.0), ("timeSavedMinutes", 3.0)],
                &[("percentHandledByAI", 20.0), ("timeSavedMinutes", 3.0)],
                &[("percentHandledByAI", 10.0), ("timeSavedMinutes", 3.0)],
            ),
            other_range: Some(ValueRange::new(0.0, 50.0)),
            custom_parameter: Some("percentHandledByAI"),
            input_fields: vec![
                field("numberOfInteractions", "Annual Agent Interactions", FieldKind::Number, None, "Total tickets/interactions handled by agents"),
                field("percentHandledByAI", "% Assisted by Copilot", FieldKind::Percent, Some(20.0), "Percentage of interactions where Copilot provides assistance"),
                field("timeSavedMinutes", "Time Saved per Interaction (minutes)", FieldKind::Number, Some(3.0), "Time saved when Copilot assists"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_one_entry_per_component_id() {
        let ids: HashSet<_> = COMPONENT_CATALOG.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), ComponentId::ALL.len());
        assert_eq!(COMPONENT_CATALOG.len(), ComponentId::ALL.len());
    }

    #[test]
    fn test_declaration_order_matches_component_id_order() {
        let declared: Vec<_> = COMPONENT_CATALOG.iter().map(|c| c.id).collect();
        assert_eq!(declared, ComponentId::ALL.to_vec());
    }

    #[test]
    fn test_maturity_support_is_consistent() {
        for def in COMPONENT_CATALOG.iter() {
            assert_eq!(
                def.supports_maturity,
                def.maturity_defaults.is_some(),
                "{} maturity flag disagrees with defaults",
                def.id
            );
            if let Some(param) = def.custom_parameter {
                assert!(def.field(param).is_some(), "{} custom parameter {param}", def.id);
            }
        }
    }

    #[test]
    fn test_maturity_parameters_name_real_fields() {
        for def in COMPONENT_CATALOG.iter() {
            let Some(defaults) = &def.maturity_defaults else {
                continue;
            };
            for set in [&defaults.low, &defaults.medium, &defaults.high] {
                for key in set.keys() {
                    assert!(def.field(key).is_some(), "{}: {key}", def.id);
                }
            }
        }
    }

    #[test]
    fn test_category_counts() {
        let count = |cat| COMPONENT_CATALOG.iter().filter(|c| c.category == cat).count();
        assert_eq!(count(ComponentCategory::TicketElimination), 5);
        assert_eq!(count(ComponentCategory::AgentProductivity), 9);
        assert_eq!(count(ComponentCategory::CostSavings), 5);
    }
}
