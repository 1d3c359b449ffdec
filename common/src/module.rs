//! Module records returned by the course service.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Decodes JSON `null` as the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModuleRef {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
}

impl ModuleRef {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into() }
    }
}

impl fmt::Display for ModuleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.title.is_empty() {
            write!(f, "{}", self.id)
        } else {
            write!(f, "{} - {}", self.id, self.title)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StudyLevel {
    Bachelor,
    Master,
    Other,
}

impl StudyLevel {
    pub const ALL: [StudyLevel; 3] = [StudyLevel::Bachelor, StudyLevel::Master, StudyLevel::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            StudyLevel::Bachelor => "Bachelor",
            StudyLevel::Master => "Master",
            StudyLevel::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for StudyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full module record. Ranked listings also carry `reasoning`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModuleSummary {
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub chair: String,
    #[serde(deserialize_with = "null_as_default")]
    pub department: String,
    #[serde(deserialize_with = "null_as_default")]
    pub school: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ects: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub study_level: String,
    #[serde(deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(deserialize_with = "null_as_default")]
    pub topics: Vec<String>,
    pub prereq: Option<String>,
    #[serde(rename = "prereqModules", alias = "prereqModuleIds", deserialize_with = "null_as_default")]
    pub prereq_module_ids: Vec<String>,
    pub digital_score: Option<f64>,
    pub reasoning: Option<String>,
}

impl ModuleSummary {
    pub fn module_ref(&self) -> ModuleRef {
        ModuleRef::new(self.id.clone(), self.title.clone())
    }

    pub fn has_prerequisite_modules(&self) -> bool {
        !self.prereq_module_ids.is_empty()
    }
}

/// One fetched page of modules. Replaces the previous page wholesale.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageResult {
    pub items: Vec<ModuleSummary>,
    pub total_pages: u32,
    pub total_modules: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_summary_tolerates_nulls_and_missing_fields() {
        let json = r#"{
            "id": "IN0001",
            "title": null,
            "ects": 6,
            "topics": null,
            "prereq": null,
            "prereqModules": ["IN0002", "IN0003"],
            "OrgId": "51897"
        }"#;
        let module: ModuleSummary = serde_json::from_str(json).unwrap();
        assert_eq!(module.id, "IN0001");
        assert_eq!(module.title, "");
        assert_eq!(module.ects, 6.0);
        assert!(module.topics.is_empty());
        assert_eq!(module.prereq, None);
        assert_eq!(module.prereq_module_ids, vec!["IN0002".to_string(), "IN0003".to_string()]);
        assert!(module.reasoning.is_none());
    }

    #[test]
    fn prereq_module_ids_accepts_alias() {
        let module: ModuleSummary = serde_json::from_str(r#"{"id":"MA9712","prereqModuleIds":["MA0001"]}"#).unwrap();
        assert_eq!(module.prereq_module_ids, vec!["MA0001".to_string()]);
    }

    #[test]
    fn study_level_parse_is_case_insensitive() {
        assert_eq!(StudyLevel::parse("master"), Some(StudyLevel::Master));
        assert_eq!(StudyLevel::parse(" Bachelor "), Some(StudyLevel::Bachelor));
        assert_eq!(StudyLevel::parse(""), None);
    }

    #[test]
    fn module_ref_display_falls_back_to_id() {
        assert_eq!(ModuleRef::new("CS101", "Intro").to_string(), "CS101 - Intro");
        assert_eq!(ModuleRef::new("CS101", "").to_string(), "CS101");
    }
}
