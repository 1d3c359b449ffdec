use common::{service_types::TopicMappingResponse, topic_mapping::normalize_label};
use tracing::debug;

use crate::service_utils::course_service_client::CourseServiceClient;

/// Optional tuning knobs of `/map-topic`. `None` keeps the service defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TopicMappingOptions {
    pub threshold: Option<f32>,
    pub max_mappings: Option<u32>,
}

pub async fn map_topic(client: &CourseServiceClient, topic: &str, options: TopicMappingOptions) -> anyhow::Result<Vec<String>> {
    let topic = normalize_label(topic)?;
    let mut params = vec![("topic", topic.clone())];
    if let Some(threshold) = options.threshold {
        params.push(("threshold", threshold.to_string()));
    }
    if let Some(max_mappings) = options.max_mappings {
        params.push(("maxMappings", max_mappings.to_string()));
    }
    let response: TopicMappingResponse = client.get_json("/map-topic", &params).await?;
    debug!("topic {topic:?} mapped to {} concepts", response.topic_mappings.len());
    Ok(response.topic_mappings)
}
