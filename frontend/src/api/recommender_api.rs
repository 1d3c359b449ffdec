//! Client API calls for the course service. Each call runs on the server and
//! forwards to the remote service through the backend client.

use common::{
    module::{ModuleRef, ModuleSummary, PageResult},
    module_query::ModuleListQuery,
    service_types::ExtractedFilters,
};
use dioxus::prelude::*;

#[cfg(feature = "server")]
fn server_error(e: anyhow::Error) -> ServerFnError {
    ServerFnError::ServerError { message: format!("{e:#}"), code: 500, details: None }
}

#[cfg(feature = "server")]
fn service_client() -> Result<&'static backend::service_utils::course_service_client::CourseServiceClient, ServerFnError> {
    backend::service_utils::course_service_client::get_course_service_client().map_err(server_error)
}

#[server]
pub async fn extract_filters(text: String) -> Result<ExtractedFilters, ServerFnError> {
    let x = backend::api::extraction::start_extraction(service_client()?, text).await;
    x.map_err(server_error)
}

#[server]
pub async fn map_topic(topic: String) -> Result<Vec<String>, ServerFnError> {
    let options = backend::api::topics::TopicMappingOptions::default();
    let x = backend::api::topics::map_topic(service_client()?, &topic, options).await;
    x.map_err(server_error)
}

#[server]
pub async fn list_modules(query: ModuleListQuery) -> Result<PageResult, ServerFnError> {
    let x = backend::api::modules::list_modules(service_client()?, &query).await;
    x.map_err(server_error)
}

#[server]
pub async fn list_ranked_modules(query: ModuleListQuery) -> Result<PageResult, ServerFnError> {
    let x = backend::api::modules::list_ranked_modules(service_client()?, &query).await;
    x.map_err(server_error)
}

#[server]
pub async fn search_modules(query: String) -> Result<Vec<ModuleRef>, ServerFnError> {
    let x = backend::api::modules::search_modules(service_client()?, &query, None).await;
    x.map_err(server_error)
}

#[server]
pub async fn modules_by_id(module_ids: Vec<String>) -> Result<Vec<ModuleSummary>, ServerFnError> {
    let x = backend::api::modules::modules_by_id(service_client()?, &module_ids).await;
    x.map_err(server_error)
}
