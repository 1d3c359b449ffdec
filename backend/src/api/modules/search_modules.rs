use common::{module::ModuleRef, service_types::ModuleSearchResponse};

use crate::service_utils::course_service_client::CourseServiceClient;

/// Matches `query` against module ids and titles.
pub async fn search_modules(client: &CourseServiceClient, query: &str, limit: Option<u32>) -> anyhow::Result<Vec<ModuleRef>> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(Vec::new());
    }
    let mut params = vec![("query", query.to_string())];
    if let Some(limit) = limit {
        params.push(("limit", limit.to_string()));
    }
    let response: ModuleSearchResponse = client.get_json("/search-modules", &params).await?;
    Ok(response.modules)
}
