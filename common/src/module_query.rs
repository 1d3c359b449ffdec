//! Flattened listing request built from the filter criteria.

use serde::{Deserialize, Serialize};

use crate::filter_criteria::{FilterCriteria, ValueRange};

/// Which listing endpoint a query goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingKind {
    Primary,
    Ranked,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleListQuery {
    pub schools: Vec<String>,
    pub departments: Vec<String>,
    pub study_level: Option<String>,
    pub ects_range: ValueRange,
    pub digital_score_range: Option<ValueRange>,
    pub languages: Vec<String>,
    pub topics_of_interest: Vec<String>,
    pub excluded_topics: Vec<String>,
    pub previous_modules: Vec<String>,
    pub student_text: String,
    pub page: u32,
    pub size: u32,
}

impl ModuleListQuery {
    pub fn from_criteria(criteria: &FilterCriteria, page: u32, size: u32, with_digital_score: bool) -> Self {
        Self {
            schools: criteria.schools.iter().cloned().collect(),
            departments: criteria.selected_departments(),
            study_level: criteria.study_level.map(|level| level.as_str().to_string()),
            ects_range: criteria.ects_range,
            digital_score_range: with_digital_score.then_some(criteria.digital_score_range),
            languages: criteria.languages.iter().cloned().collect(),
            topics_of_interest: criteria.topics_of_interest.flatten(),
            excluded_topics: criteria.excluded_topics.flatten(),
            previous_modules: criteria.previous_modules.iter().map(|m| m.id.clone()).collect(),
            student_text: criteria.free_text.trim().to_string(),
            page,
            size,
        }
    }

    /// Query-string pairs in the bracketed list form the service parses.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let lists: [(&'static str, &Vec<String>); 6] = [
            ("schools[]", &self.schools),
            ("departments[]", &self.departments),
            ("languages[]", &self.languages),
            ("topicsOfInterest[]", &self.topics_of_interest),
            ("topicsToExclude[]", &self.excluded_topics),
            ("previousModules[]", &self.previous_modules),
        ];
        for (key, values) in lists {
            pairs.extend(values.iter().map(|v| (key, v.clone())));
        }
        if let Some(level) = &self.study_level {
            pairs.push(("studyLevel", level.clone()));
        }
        pairs.push(("ectsRange[]", self.ects_range.min.to_string()));
        pairs.push(("ectsRange[]", self.ects_range.max.to_string()));
        if let Some(range) = self.digital_score_range {
            pairs.push(("digitalScoreRange[]", range.min.to_string()));
            pairs.push(("digitalScoreRange[]", range.max.to_string()));
        }
        pairs.push(("studentText", self.student_text.clone()));
        pairs.push(("page", self.page.to_string()));
        pairs.push(("size", self.size.to_string()));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::{ModuleRef, StudyLevel};

    fn values<'a>(pairs: &'a [(&'static str, String)], key: &str) -> Vec<&'a str> {
        pairs.iter().filter(|(k, _)| *k == key).map(|(_, v)| v.as_str()).collect()
    }

    #[test]
    fn topic_maps_and_previous_modules_are_flattened() {
        let mut criteria = FilterCriteria::default();
        criteria.topics_of_interest.insert("ml", vec!["Machine Learning".into(), "Statistics".into()]);
        criteria.topics_of_interest.insert("ai", vec!["Artificial Intelligence".into()]);
        criteria.excluded_topics.insert("law", vec!["Law".into()]);
        criteria.previous_modules = vec![ModuleRef::new("IN0001", "Intro"), ModuleRef::new("MA0001", "Analysis")];
        criteria.study_level = Some(StudyLevel::Bachelor);

        let query = ModuleListQuery::from_criteria(&criteria, 2, 10, false);
        assert_eq!(query.topics_of_interest, vec!["Artificial Intelligence", "Machine Learning", "Statistics"]);
        assert_eq!(query.excluded_topics, vec!["Law"]);
        assert_eq!(query.previous_modules, vec!["IN0001", "MA0001"]);

        let pairs = query.to_query_pairs();
        assert_eq!(values(&pairs, "previousModules[]"), vec!["IN0001", "MA0001"]);
        assert_eq!(values(&pairs, "ectsRange[]"), vec!["1", "30"]);
        assert_eq!(values(&pairs, "studyLevel"), vec!["Bachelor"]);
        assert_eq!(values(&pairs, "page"), vec!["2"]);
        assert_eq!(values(&pairs, "size"), vec!["10"]);
        assert!(values(&pairs, "digitalScoreRange[]").is_empty());
    }

    #[test]
    fn digital_score_is_sent_when_enabled() {
        let mut criteria = FilterCriteria::default();
        criteria.set_digital_score_range(1, 2);
        let pairs = ModuleListQuery::from_criteria(&criteria, 1, 10, true).to_query_pairs();
        assert_eq!(values(&pairs, "digitalScoreRange[]"), vec!["1", "2"]);
        assert!(values(&pairs, "studyLevel").is_empty());
    }
}
