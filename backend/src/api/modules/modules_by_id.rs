use common::{module::ModuleSummary, service_types::ModulesByIdResponse};

use crate::service_utils::course_service_client::CourseServiceClient;

pub async fn modules_by_id(client: &CourseServiceClient, module_ids: &[String]) -> anyhow::Result<Vec<ModuleSummary>> {
    if module_ids.is_empty() {
        return Ok(Vec::new());
    }
    let params = module_ids.iter().map(|id| ("moduleIds[]", id.clone())).collect::<Vec<_>>();
    let response: ModulesByIdResponse = client.get_json("/modules-by-id", &params).await?;
    if response.success == Some(false) {
        anyhow::bail!("module lookup failed for {:?}", module_ids);
    }
    Ok(response.modules)
}
