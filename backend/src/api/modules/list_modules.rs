use common::{module::PageResult, module_query::ModuleListQuery, service_types::ModuleListResponse};
use tracing::debug;

use crate::service_utils::course_service_client::CourseServiceClient;

pub async fn list_modules(client: &CourseServiceClient, query: &ModuleListQuery) -> anyhow::Result<PageResult> {
    let response: ModuleListResponse = client.get_json("/modules", &query.to_query_pairs()).await?;
    debug!(
        "page {} of modules: {} items, {} pages",
        query.page,
        response.modules.len(),
        response.total_pages
    );
    Ok(PageResult {
        items: response.modules,
        total_pages: response.total_pages,
        total_modules: response.total_modules,
    })
}
