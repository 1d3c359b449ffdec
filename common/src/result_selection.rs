//! The module shown in the detail pane and its prerequisite modules.

use serde::{Deserialize, Serialize};

use crate::errors::{RecommenderError, Result};
use crate::module::{ModuleRef, ModuleSummary};

/// Batch lookup the detail pane needs for the selected module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrerequisiteRequest {
    pub seq: u64,
    pub module_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Prerequisites {
    #[default]
    None,
    Loading,
    /// Resolved modules in prerequisite order. Ids the lookup could not
    /// resolve appear with an empty title.
    Loaded(Vec<ModuleRef>),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultSelection {
    selected: Option<ModuleSummary>,
    prerequisites: Prerequisites,
    prerequisite_seq: u64,
    prerequisites_requested: bool,
}

impl ResultSelection {
    pub fn selected(&self) -> Option<&ModuleSummary> {
        self.selected.as_ref()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_ref().map(|m| m.id.as_str())
    }

    pub fn prerequisites(&self) -> &Prerequisites {
        &self.prerequisites
    }

    /// Replaces the selection and drops the previous module's prerequisites.
    pub fn set(&mut self, module: Option<ModuleSummary>) {
        self.selected = module;
        self.prerequisites = Prerequisites::None;
        self.prerequisites_requested = false;
        // invalidate any lookup still in flight for the old module
        self.prerequisite_seq += 1;
    }

    /// Selects `module` if it belongs to `active_list`.
    pub fn select_from(&mut self, module: &ModuleSummary, active_list: &[ModuleSummary]) -> Result<()> {
        let Some(found) = active_list.iter().find(|m| m.id == module.id) else {
            return Err(RecommenderError::ModuleNotInActiveList(module.id.clone()));
        };
        if self.selected_id() == Some(found.id.as_str()) {
            return Ok(());
        }
        self.set(Some(found.clone()));
        Ok(())
    }

    /// True while the selected module has prerequisite ids nobody asked for yet.
    pub fn needs_prerequisites(&self) -> bool {
        !self.prerequisites_requested && self.selected.as_ref().is_some_and(|m| m.has_prerequisite_modules())
    }

    /// Returns the lookup to issue for the current selection, once.
    pub fn prerequisite_request(&mut self) -> Option<PrerequisiteRequest> {
        if self.prerequisites_requested {
            return None;
        }
        let module = self.selected.as_ref()?;
        if !module.has_prerequisite_modules() {
            return None;
        }
        self.prerequisites_requested = true;
        self.prerequisite_seq += 1;
        self.prerequisites = Prerequisites::Loading;
        Some(PrerequisiteRequest { seq: self.prerequisite_seq, module_ids: module.prereq_module_ids.clone() })
    }

    /// Applies a lookup result. A failed or empty lookup falls back to the
    /// bare ids. Returns false for a stale lookup.
    pub fn complete_prerequisites(&mut self, seq: u64, result: std::result::Result<Vec<ModuleSummary>, String>) -> bool {
        if seq != self.prerequisite_seq {
            return false;
        }
        let Some(module) = self.selected.as_ref() else { return false };
        let found = result.unwrap_or_default();
        let refs = module
            .prereq_module_ids
            .iter()
            .map(|id| {
                found
                    .iter()
                    .find(|m| &m.id == id)
                    .map(|m| m.module_ref())
                    .unwrap_or_else(|| ModuleRef::new(id.clone(), ""))
            })
            .collect();
        self.prerequisites = Prerequisites::Loaded(refs);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(id: &str, prereqs: &[&str]) -> ModuleSummary {
        ModuleSummary {
            id: id.to_string(),
            title: format!("Title {id}"),
            prereq_module_ids: prereqs.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn selection_outside_active_list_is_rejected() {
        let list = vec![module("A", &[]), module("B", &[])];
        let mut selection = ResultSelection::default();
        selection.select_from(&list[1], &list).unwrap();
        assert_eq!(selection.selected_id(), Some("B"));

        let err = selection.select_from(&module("Z", &[]), &list).unwrap_err();
        assert_eq!(err, RecommenderError::ModuleNotInActiveList("Z".to_string()));
        assert_eq!(selection.selected_id(), Some("B"));
    }

    #[test]
    fn prerequisites_resolve_in_order_with_bare_id_fallback() {
        let mut selection = ResultSelection::default();
        selection.set(Some(module("IN2000", &["IN0001", "IN0002"])));
        assert!(selection.needs_prerequisites());
        let request = selection.prerequisite_request().unwrap();
        assert!(!selection.needs_prerequisites());
        assert_eq!(request.module_ids, vec!["IN0001", "IN0002"]);
        assert_eq!(selection.prerequisites(), &Prerequisites::Loading);
        assert!(selection.prerequisite_request().is_none());

        assert!(selection.complete_prerequisites(request.seq, Ok(vec![module("IN0002", &[])])));
        assert_eq!(
            selection.prerequisites(),
            &Prerequisites::Loaded(vec![ModuleRef::new("IN0001", ""), ModuleRef::new("IN0002", "Title IN0002")])
        );
    }

    #[test]
    fn failed_lookup_shows_bare_ids() {
        let mut selection = ResultSelection::default();
        selection.set(Some(module("IN2000", &["IN0001"])));
        let request = selection.prerequisite_request().unwrap();
        selection.complete_prerequisites(request.seq, Err("connection refused".to_string()));
        assert_eq!(selection.prerequisites(), &Prerequisites::Loaded(vec![ModuleRef::new("IN0001", "")]));
    }

    #[test]
    fn changing_selection_clears_and_fences_prerequisites() {
        let mut selection = ResultSelection::default();
        selection.set(Some(module("IN2000", &["IN0001"])));
        let stale = selection.prerequisite_request().unwrap();

        selection.set(Some(module("MA3000", &[])));
        assert_eq!(selection.prerequisites(), &Prerequisites::None);
        assert!(selection.prerequisite_request().is_none());
        assert!(!selection.complete_prerequisites(stale.seq, Ok(vec![module("IN0001", &[])])));
        assert_eq!(selection.prerequisites(), &Prerequisites::None);
    }
}
