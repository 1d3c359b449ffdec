//! Filter criteria edited on the recommender page.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::errors::{RecommenderError, Result};
use crate::module::{ModuleRef, StudyLevel};
use crate::organisations::{department_set_of, departments_of};
use crate::recommender_const::{DIGITAL_SCORE_MAX, DIGITAL_SCORE_MIN, ECTS_MAX, ECTS_MIN, MODULE_LANGUAGES};
use crate::service_types::ExtractedFilters;
use crate::topic_mapping::{TopicKind, TopicMapping};

/// Inclusive range with `min <= max`, kept inside fixed extremes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: u32,
    pub max: u32,
}

impl ValueRange {
    /// Clamps both ends into `[lower, upper]` and swaps them if inverted.
    pub fn clamped(a: u32, b: u32, lower: u32, upper: u32) -> Self {
        let a = a.clamp(lower, upper);
        let b = b.clamp(lower, upper);
        Self { min: a.min(b), max: a.max(b) }
    }

    pub fn ects(min: u32, max: u32) -> Self {
        Self::clamped(min, max, ECTS_MIN, ECTS_MAX)
    }

    pub fn digital_score(min: u32, max: u32) -> Self {
        Self::clamped(min, max, DIGITAL_SCORE_MIN, DIGITAL_SCORE_MAX)
    }

    pub fn full_ects() -> Self {
        Self { min: ECTS_MIN, max: ECTS_MAX }
    }

    pub fn full_digital_score() -> Self {
        Self { min: DIGITAL_SCORE_MIN, max: DIGITAL_SCORE_MAX }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub free_text: String,
    pub schools: BTreeSet<String>,
    pub departments_by_school: BTreeMap<String, BTreeSet<String>>,
    pub study_level: Option<StudyLevel>,
    pub ects_range: ValueRange,
    pub digital_score_range: ValueRange,
    pub languages: BTreeSet<String>,
    pub topics_of_interest: TopicMapping,
    pub excluded_topics: TopicMapping,
    pub previous_modules: Vec<ModuleRef>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            free_text: String::new(),
            schools: BTreeSet::new(),
            departments_by_school: BTreeMap::new(),
            study_level: None,
            ects_range: ValueRange::full_ects(),
            digital_score_range: ValueRange::full_digital_score(),
            languages: MODULE_LANGUAGES.iter().map(|l| l.to_string()).collect(),
            topics_of_interest: TopicMapping::default(),
            excluded_topics: TopicMapping::default(),
            previous_modules: Vec::new(),
        }
    }
}

impl FilterCriteria {
    pub fn has_free_text(&self) -> bool {
        !self.free_text.trim().is_empty()
    }

    /// Replaces the school selection. Newly selected schools without a
    /// department entry start with all of their catalog departments.
    /// Entries of deselected schools are kept.
    pub fn set_schools(&mut self, selected: impl IntoIterator<Item = String>) -> Result<()> {
        let selected: BTreeSet<String> = selected.into_iter().collect();
        if let Some(unknown) = selected.iter().find(|s| departments_of(s).is_none()) {
            return Err(RecommenderError::UnknownSchool(unknown.clone()));
        }
        for school in &selected {
            if !self.departments_by_school.contains_key(school) {
                self.departments_by_school.insert(school.clone(), department_set_of(school));
            }
        }
        self.schools = selected;
        Ok(())
    }

    pub fn toggle_school(&mut self, school: &str) -> Result<()> {
        let mut selected = self.schools.clone();
        if !selected.remove(school) {
            selected.insert(school.to_string());
        }
        self.set_schools(selected)
    }

    pub fn toggle_department(&mut self, school: &str, department: &str) {
        let departments = self.departments_by_school.entry(school.to_string()).or_default();
        if !departments.remove(department) {
            departments.insert(department.to_string());
        }
    }

    pub fn is_department_selected(&self, school: &str, department: &str) -> bool {
        self.departments_by_school.get(school).is_some_and(|d| d.contains(department))
    }

    /// Departments of the currently selected schools, flattened.
    pub fn selected_departments(&self) -> Vec<String> {
        self.schools
            .iter()
            .filter_map(|school| self.departments_by_school.get(school))
            .flatten()
            .cloned()
            .collect()
    }

    pub fn toggle_language(&mut self, language: &str) {
        if !self.languages.remove(language) {
            self.languages.insert(language.to_string());
        }
    }

    pub fn set_study_level(&mut self, level: Option<StudyLevel>) {
        self.study_level = level;
    }

    pub fn set_ects_range(&mut self, min: u32, max: u32) {
        self.ects_range = ValueRange::ects(min, max);
    }

    pub fn set_digital_score_range(&mut self, min: u32, max: u32) {
        self.digital_score_range = ValueRange::digital_score(min, max);
    }

    pub fn topics(&self, kind: TopicKind) -> &TopicMapping {
        match kind {
            TopicKind::Interest => &self.topics_of_interest,
            TopicKind::Excluded => &self.excluded_topics,
        }
    }

    pub fn topics_mut(&mut self, kind: TopicKind) -> &mut TopicMapping {
        match kind {
            TopicKind::Interest => &mut self.topics_of_interest,
            TopicKind::Excluded => &mut self.excluded_topics,
        }
    }

    /// Resets every filter to its default. The free text is kept.
    pub fn clear_all_filters(&mut self) {
        let free_text = std::mem::take(&mut self.free_text);
        *self = Self { free_text, ..Self::default() };
    }

    /// Bulk-replaces the filters with the ones suggested by the extraction
    /// endpoint. Missing fields fall back to their empty defaults. The
    /// digital-score range and the free text are not part of the suggestion.
    pub fn apply_extracted_filters(&mut self, filters: ExtractedFilters) {
        self.study_level = filters.study_level.as_deref().and_then(StudyLevel::parse);
        self.schools = filters.schools.unwrap_or_default().into_iter().collect();
        self.departments_by_school = filters
            .departments
            .unwrap_or_default()
            .into_iter()
            .map(|(school, departments)| (school, departments.into_iter().collect()))
            .collect();
        self.ects_range = ValueRange::ects(filters.ects_min.unwrap_or(ECTS_MIN), filters.ects_max.unwrap_or(ECTS_MAX));
        self.topics_of_interest = filters.topics_of_interest.unwrap_or_default();
        self.excluded_topics = filters.topics_to_exclude.unwrap_or_default();
        self.previous_modules = Vec::new();
        for module in filters.previous_modules.unwrap_or_default() {
            if !self.previous_modules.iter().any(|m| m.id == module.id) {
                self.previous_modules.push(module);
            }
        }
        self.languages = filters.languages.unwrap_or_default().into_iter().collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CIT: &str = "Computation, Information and Technology";

    #[test]
    fn extraction_falls_back_to_defaults() {
        let mut criteria = FilterCriteria::default();
        criteria.set_schools([CIT.to_string()]).unwrap();
        criteria.apply_extracted_filters(ExtractedFilters {
            study_level: Some("Master".to_string()),
            ects_min: Some(5),
            ects_max: Some(15),
            ..Default::default()
        });
        assert_eq!(criteria.ects_range, ValueRange { min: 5, max: 15 });
        assert_eq!(criteria.study_level, Some(StudyLevel::Master));
        assert!(criteria.schools.is_empty());
        assert!(criteria.departments_by_school.is_empty());
        assert!(criteria.languages.is_empty());

        criteria.apply_extracted_filters(ExtractedFilters::default());
        assert_eq!(criteria.ects_range, ValueRange { min: 1, max: 30 });
        assert_eq!(criteria.study_level, None);
    }

    #[test]
    fn extraction_clamps_ects_and_dedups_previous_modules() {
        let mut criteria = FilterCriteria::default();
        criteria.apply_extracted_filters(ExtractedFilters {
            ects_min: Some(0),
            ects_max: Some(99),
            previous_modules: Some(vec![ModuleRef::new("IN0001", "Intro"), ModuleRef::new("IN0001", "Intro")]),
            ..Default::default()
        });
        assert_eq!(criteria.ects_range, ValueRange { min: 1, max: 30 });
        assert_eq!(criteria.previous_modules.len(), 1);
    }

    #[test]
    fn selecting_a_school_seeds_departments_and_keeps_deselected_ones() {
        let mut criteria = FilterCriteria::default();
        criteria.set_schools([CIT.to_string()]).unwrap();
        assert_eq!(criteria.departments_by_school[CIT], department_set_of(CIT));

        criteria.toggle_department(CIT, "Department Mathematics");
        assert!(!criteria.is_department_selected(CIT, "Department Mathematics"));

        criteria.set_schools(["Management".to_string()]).unwrap();
        assert!(criteria.departments_by_school.contains_key(CIT));
        assert!(!criteria.selected_departments().contains(&"Department Computer Science".to_string()));

        // re-selecting keeps the earlier edit
        criteria.set_schools([CIT.to_string()]).unwrap();
        assert!(!criteria.is_department_selected(CIT, "Department Mathematics"));
        assert!(criteria.is_department_selected(CIT, "Department Computer Science"));
    }

    #[test]
    fn unknown_school_is_rejected() {
        let mut criteria = FilterCriteria::default();
        let err = criteria.set_schools(["Hogwarts".to_string()]).unwrap_err();
        assert_eq!(err, RecommenderError::UnknownSchool("Hogwarts".to_string()));
        assert!(criteria.schools.is_empty());
    }

    #[test]
    fn toggle_department_twice_restores_membership() {
        let mut criteria = FilterCriteria::default();
        criteria.toggle_department("Management", "Department Governance");
        assert!(criteria.is_department_selected("Management", "Department Governance"));
        criteria.toggle_department("Management", "Department Governance");
        assert!(!criteria.is_department_selected("Management", "Department Governance"));
    }

    #[test]
    fn ranges_are_clamped_and_ordered() {
        let mut criteria = FilterCriteria::default();
        criteria.set_ects_range(20, 3);
        assert_eq!(criteria.ects_range, ValueRange { min: 3, max: 20 });
        criteria.set_digital_score_range(1, 9);
        assert_eq!(criteria.digital_score_range, ValueRange { min: 1, max: 3 });
    }

    #[test]
    fn clear_all_filters_is_idempotent_and_keeps_text() {
        let mut criteria = FilterCriteria::default();
        criteria.free_text = "I like robots".to_string();
        criteria.set_schools([CIT.to_string()]).unwrap();
        criteria.toggle_language("German");
        criteria.set_ects_range(5, 10);
        criteria.topics_of_interest.insert("robots", vec!["Robotics".to_string()]);
        criteria.previous_modules.push(ModuleRef::new("IN0001", "Intro"));

        criteria.clear_all_filters();
        let once = criteria.clone();
        criteria.clear_all_filters();
        assert_eq!(criteria, once);
        assert_eq!(criteria, FilterCriteria { free_text: "I like robots".to_string(), ..FilterCriteria::default() });
    }
}
