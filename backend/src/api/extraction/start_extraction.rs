use common::service_types::{ExtractedFilters, ExtractionRequest, ExtractionResponse};
use tracing::{info, warn};

use crate::service_utils::course_service_client::CourseServiceClient;

/// Asks the service to turn the student's text into suggested filters.
/// A `success: false` answer is an error carrying the service's message.
pub async fn start_extraction(client: &CourseServiceClient, text: String) -> anyhow::Result<ExtractedFilters> {
    let text = text.trim().to_string();
    if text.is_empty() {
        anyhow::bail!("Invalid input: text is empty");
    }
    info!("extracting filters from {} chars of text", text.len());
    let response: ExtractionResponse = client.post_json("/start-extraction", &ExtractionRequest { text }).await?;
    if !response.success {
        let message = response.message.unwrap_or("extraction failed".to_string());
        warn!("extraction rejected: {message}");
        anyhow::bail!("Extraction failed: {}", message);
    }
    Ok(response.filters.unwrap_or_default())
}
