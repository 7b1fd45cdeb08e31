use pretty_assertions::assert_eq;
use roimap::catalog::{all_components, ComponentCategory};
use roimap::{get_component_by_id, get_components_by_category, get_visible_components, ComponentId, Plan};

fn ids(plan: Plan, esm: bool, freddy: bool) -> Vec<ComponentId> {
    get_visible_components(plan, esm, freddy)
        .iter()
        .map(|def| def.id)
        .collect()
}

#[test]
fn test_growth_without_flags() {
    assert_eq!(
        ids(Plan::Growth, false, false),
        vec![
            ComponentId::KnowledgeBase,
            ComponentId::IncidentManagement,
            ComponentId::ServiceRequestManagement,
            ComponentId::LicenseConsolidation,
            ComponentId::InfrastructureSavings,
        ]
    );
}

#[test]
fn test_growth_excludes_flagged_and_pro_components() {
    for def in get_visible_components(Plan::Growth, false, false) {
        assert!(!def.requires_esm, "{} requires ESM", def.id);
        assert!(!def.requires_freddy, "{} requires Freddy", def.id);
    }
    assert!(!ids(Plan::Growth, true, true).contains(&ComponentId::AutomationServiceRequests));
    assert!(ids(Plan::Pro, false, false).contains(&ComponentId::AutomationServiceRequests));
}

#[test]
fn test_enterprise_with_all_flags_sees_everything() {
    assert_eq!(ids(Plan::Enterprise, true, true).len(), 19);
    assert_eq!(ids(Plan::Enterprise, false, false).len(), 14);
    assert_eq!(ids(Plan::ProToEnterprise, true, true).len(), 19);
}

#[test]
fn test_upgrade_plans_follow_their_target() {
    assert_eq!(ids(Plan::GrowthToPro, true, true), ids(Plan::Pro, true, true));
}

#[test]
fn test_visibility_preserves_declaration_order() {
    let declared: Vec<ComponentId> = all_components().iter().map(|def| def.id).collect();
    let visible = ids(Plan::Pro, true, false);
    let positions: Vec<usize> = visible
        .iter()
        .map(|id| declared.iter().position(|d| d == id).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_lookup_by_id() {
    let def = get_component_by_id("cmdb").unwrap();
    assert_eq!(def.id, ComponentId::Cmdb);
    assert!(get_component_by_id("CMDB").is_none());
    assert!(get_component_by_id("legacyWidget").is_none());
}

#[test]
fn test_categories_partition_the_catalog() {
    let total: usize = ComponentCategory::all()
        .iter()
        .map(|c| get_components_by_category(*c).len())
        .sum();
    assert_eq!(total, all_components().len());
}

#[test]
fn test_maturity_components_have_presets_and_custom_parameter() {
    for def in all_components().iter().filter(|def| def.supports_maturity) {
        assert!(def.maturity_defaults.is_some(), "{} has no presets", def.id);
        if def.other_range.is_some() {
            assert!(def.custom_parameter.is_some(), "{} has no custom parameter", def.id);
        }
    }
}
