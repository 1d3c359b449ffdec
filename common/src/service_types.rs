//! Request and response bodies of the remote course service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::module::{ModuleRef, ModuleSummary, null_as_default};
use crate::topic_mapping::TopicMapping;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionRequest {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionResponse {
    pub success: bool,
    pub filters: Option<ExtractedFilters>,
    pub message: Option<String>,
}

/// Filters suggested by the extraction endpoint. Every field is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractedFilters {
    pub study_level: Option<String>,
    pub schools: Option<Vec<String>>,
    pub departments: Option<BTreeMap<String, Vec<String>>>,
    pub ects_min: Option<u32>,
    pub ects_max: Option<u32>,
    pub topics_of_interest: Option<TopicMapping>,
    pub topics_to_exclude: Option<TopicMapping>,
    pub previous_modules: Option<Vec<ModuleRef>>,
    pub languages: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopicMappingResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub topic_mappings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModuleListResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub modules: Vec<ModuleSummary>,
    pub total_pages: u32,
    pub total_modules: Option<u64>,
    pub current_page: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RankedModuleListResponse {
    #[serde(rename = "modulesRankedByLLM", deserialize_with = "null_as_default")]
    pub modules_ranked_by_llm: Vec<ModuleSummary>,
    pub total_pages: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleSearchResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub modules: Vec<ModuleRef>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModulesByIdResponse {
    pub success: Option<bool>,
    #[serde(deserialize_with = "null_as_default")]
    pub modules: Vec<ModuleSummary>,
}
