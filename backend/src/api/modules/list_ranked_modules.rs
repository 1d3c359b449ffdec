use common::{module::PageResult, module_query::ModuleListQuery, service_types::RankedModuleListResponse};
use tracing::debug;

use crate::service_utils::course_service_client::CourseServiceClient;

/// Model-ranked listing for the same filters and page as the plain one.
pub async fn list_ranked_modules(client: &CourseServiceClient, query: &ModuleListQuery) -> anyhow::Result<PageResult> {
    if query.student_text.is_empty() {
        anyhow::bail!("ranked listing needs student text");
    }
    let response: RankedModuleListResponse = client.get_json("/modules-ranked", &query.to_query_pairs()).await?;
    debug!("page {} of ranked modules: {} items", query.page, response.modules_ranked_by_llm.len());
    Ok(PageResult {
        items: response.modules_ranked_by_llm,
        total_pages: response.total_pages,
        total_modules: None,
    })
}
