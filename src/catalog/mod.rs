//! Benefit component catalog and visibility resolution.
//!
//! The catalog is an immutable table built once per process. Every lookup is
//! a pure filter over it, so the table can be shared freely between
//! concurrent evaluations.

mod definitions;
pub mod types;

pub use definitions::COMPONENT_CATALOG;
pub use types::{
    ComponentCategory, ComponentDefinition, ComponentId, FieldKind, InputField, MaturityDefaults,
    MaturityLevel, ParameterSet, Plan, ValueRange,
};

/// All definitions in declaration order.
pub fn all_components() -> &'static [ComponentDefinition] {
    COMPONENT_CATALOG.as_slice()
}

/// Components selectable for a plan and feature-flag combination, in
/// declaration order.
pub fn get_visible_components(
    plan: Plan,
    esm_enabled: bool,
    freddy_enabled: bool,
) -> Vec<&'static ComponentDefinition> {
    all_components()
        .iter()
        .filter(|def| def.is_visible(plan, esm_enabled, freddy_enabled))
        .collect()
}

/// Look up a definition by its string id. Unknown ids yield `None`; callers
/// skip them rather than substituting a zero result.
pub fn get_component_by_id(id: &str) -> Option<&'static ComponentDefinition> {
    all_components().iter().find(|def| def.id.as_str() == id)
}

pub fn get_component(id: ComponentId) -> &'static ComponentDefinition {
    // Every ComponentId has exactly one catalog entry (checked in tests),
    // declared in enum order.
    &all_components()[id as usize]
}

pub fn get_components_by_category(
    category: ComponentCategory,
) -> Vec<&'static ComponentDefinition> {
    all_components()
        .iter()
        .filter(|def| def.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_component_indexes_by_declaration_order() {
        for id in ComponentId::ALL {
            assert_eq!(get_component(id).id, id);
        }
    }

    #[test]
    fn test_get_component_by_id_unknown_is_none() {
        assert!(get_component_by_id("quantumTicketTeleporter").is_none());
        assert!(get_component_by_id("").is_none());
    }

    #[test]
    fn test_get_component_by_id_known() {
        let def = get_component_by_id("cmdb").unwrap();
        assert_eq!(def.id, ComponentId::Cmdb);
        assert_eq!(def.category, ComponentCategory::AgentProductivity);
    }

    #[test]
    fn test_enterprise_with_all_flags_sees_everything() {
        let visible = get_visible_components(Plan::Enterprise, true, true);
        assert_eq!(visible.len(), ComponentId::ALL.len());
    }

    #[test]
    fn test_visibility_preserves_declaration_order() {
        let visible: Vec<_> = get_visible_components(Plan::Pro, true, false)
            .iter()
            .map(|d| d.id as usize)
            .collect();
        let mut sorted = visible.clone();
        sorted.sort_unstable();
        assert_eq!(visible, sorted);
    }
}
