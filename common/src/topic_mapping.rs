//! Raw topic labels and the concept ids they map to.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{RecommenderError, Result};
use crate::recommender_const::TOPIC_CHIP_MAX_LEN;

/// What a topic lookup did to the mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingOutcome {
    Added,
    NoMatch,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TopicKind {
    Interest,
    Excluded,
}

impl TopicKind {
    pub fn input_label(&self) -> &'static str {
        match self {
            TopicKind::Interest => "Add Topic of Interest",
            TopicKind::Excluded => "Add Excluded Topic",
        }
    }
}

/// Label -> concept ids. A label never maps to an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Vec<String>>", into = "BTreeMap<String, Vec<String>>")]
pub struct TopicMapping {
    topics: BTreeMap<String, Vec<String>>,
}

impl From<BTreeMap<String, Vec<String>>> for TopicMapping {
    fn from(raw: BTreeMap<String, Vec<String>>) -> Self {
        let mut mapping = TopicMapping::default();
        for (label, concepts) in raw {
            mapping.insert(label, concepts);
        }
        mapping
    }
}

impl From<TopicMapping> for BTreeMap<String, Vec<String>> {
    fn from(mapping: TopicMapping) -> Self {
        mapping.topics
    }
}

/// Trims the label and rejects it if nothing is left.
pub fn normalize_label(raw_label: &str) -> Result<String> {
    let label = raw_label.trim();
    if label.is_empty() {
        return Err(RecommenderError::EmptyTopicLabel);
    }
    Ok(label.to_string())
}

impl TopicMapping {
    /// Sets the concepts for `label`. An empty `concepts` stores nothing and
    /// leaves any existing entry for `label` alone.
    pub fn insert(&mut self, label: impl Into<String>, concepts: Vec<String>) -> bool {
        let label = label.into();
        let mut deduped: Vec<String> = Vec::with_capacity(concepts.len());
        for concept in concepts {
            if !deduped.contains(&concept) {
                deduped.push(concept);
            }
        }
        if deduped.is_empty() {
            return false;
        }
        self.topics.insert(label, deduped);
        true
    }

    /// Applies the answer of a topic lookup. Only a non-empty successful
    /// answer changes the mapping.
    pub fn apply_mapping_result(&mut self, label: impl Into<String>, result: std::result::Result<Vec<String>, String>) -> MappingOutcome {
        match result {
            Ok(concepts) => {
                if self.insert(label, concepts) {
                    MappingOutcome::Added
                } else {
                    MappingOutcome::NoMatch
                }
            }
            Err(e) => MappingOutcome::Failed(e),
        }
    }

    /// Removes one concept from `label`, dropping the label once it is empty.
    pub fn remove_mapping(&mut self, label: &str, concept_id: &str) {
        let Some(concepts) = self.topics.get_mut(label) else { return };
        concepts.retain(|c| c != concept_id);
        if concepts.is_empty() {
            self.topics.remove(label);
        }
    }

    pub fn remove_label(&mut self, label: &str) {
        self.topics.remove(label);
    }

    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.topics.get(label).map(|v| v.as_slice())
    }

    pub fn contains_label(&self, label: &str) -> bool {
        self.topics.contains_key(label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.topics.iter()
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// All concept ids in label order.
    pub fn flatten(&self) -> Vec<String> {
        self.topics.values().flatten().cloned().collect()
    }

    pub fn contains_concept(&self, concept_id: &str) -> bool {
        self.topics.values().any(|concepts| concepts.iter().any(|c| c == concept_id))
    }
}

/// Shortens long topic labels for chips: `abbreviate("...", 20)`.
pub fn abbreviate(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        text.to_string()
    }
}

pub fn abbreviate_topic(text: &str) -> String {
    abbreviate(text, TOPIC_CHIP_MAX_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concepts(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn removing_last_concept_drops_the_label() {
        let mut topics = TopicMapping::default();
        topics.insert("ml", concepts(&["Machine Learning", "Deep Learning"]));
        topics.insert("robots", concepts(&["Robotics"]));

        topics.remove_mapping("ml", "Deep Learning");
        assert_eq!(topics.get("ml"), Some(&concepts(&["Machine Learning"])[..]));

        topics.remove_mapping("ml", "Machine Learning");
        assert!(!topics.contains_label("ml"));
        assert!(topics.iter().all(|(_, v)| !v.is_empty()));
        assert_eq!(topics.len(), 1);
    }

    #[test]
    fn removing_unknown_label_or_concept_is_a_no_op() {
        let mut topics = TopicMapping::default();
        topics.insert("ml", concepts(&["Machine Learning"]));
        topics.remove_mapping("missing", "Machine Learning");
        topics.remove_mapping("ml", "Statistics");
        assert_eq!(topics.flatten(), concepts(&["Machine Learning"]));
    }

    #[test]
    fn empty_mapping_is_never_stored() {
        let mut topics = TopicMapping::default();
        assert!(!topics.insert("nonsense", vec![]));
        assert!(topics.is_empty());
    }

    #[test]
    fn empty_or_failed_remap_keeps_existing_label() {
        let mut topics = TopicMapping::default();
        assert!(topics.insert("ml", concepts(&["Machine Learning"])));

        assert!(!topics.insert("ml", vec![]));
        assert_eq!(topics.get("ml"), Some(concepts(&["Machine Learning"]).as_slice()));

        let outcome = topics.apply_mapping_result("ml", Err("connection refused".to_string()));
        assert_eq!(outcome, MappingOutcome::Failed("connection refused".to_string()));
        assert_eq!(topics.get("ml"), Some(concepts(&["Machine Learning"]).as_slice()));

        assert_eq!(topics.apply_mapping_result("ml", Ok(vec![])), MappingOutcome::NoMatch);
        assert_eq!(topics.len(), 1);
    }

    #[test]
    fn successful_remap_replaces_concepts() {
        let mut topics = TopicMapping::default();
        topics.insert("ml", concepts(&["Machine Learning"]));
        let outcome = topics.apply_mapping_result("ml", Ok(concepts(&["Deep Learning", "Deep Learning"])));
        assert_eq!(outcome, MappingOutcome::Added);
        assert_eq!(topics.get("ml"), Some(concepts(&["Deep Learning"]).as_slice()));
    }

    #[test]
    fn deserializing_drops_empty_entries() {
        let topics: TopicMapping = serde_json::from_str(r#"{"ai":["Artificial Intelligence"],"xyz":[]}"#).unwrap();
        assert_eq!(topics.len(), 1);
        assert!(topics.contains_concept("Artificial Intelligence"));
    }

    #[test]
    fn flatten_follows_label_order() {
        let mut topics = TopicMapping::default();
        topics.insert("b", concepts(&["B1", "B2"]));
        topics.insert("a", concepts(&["A1"]));
        assert_eq!(topics.flatten(), concepts(&["A1", "B1", "B2"]));
    }

    #[test]
    fn label_normalization() {
        assert_eq!(normalize_label("  graph theory "), Ok("graph theory".to_string()));
        assert_eq!(normalize_label("   "), Err(RecommenderError::EmptyTopicLabel));
    }

    #[test]
    fn abbreviate_long_topics() {
        assert_eq!(abbreviate_topic("Robotics"), "Robotics");
        assert_eq!(abbreviate_topic("Natural Language Processing"), "Natural Language ...");
    }
}
