//! API Client

use distill_core::{
    Aggressiveness, CompressError, CompressionOutcome, CompressionRequest, CompressionResponse,
    DemoConfig, Result,
};

/// Demo settings, fixed when the WASM bundle is built
pub fn demo_config() -> DemoConfig {
    DemoConfig::from_lookup(|key| {
        match key {
            "DISTILL_API_URL" => option_env!("DISTILL_API_URL"),
            "DISTILL_DEBOUNCE_MS" => option_env!("DISTILL_DEBOUNCE_MS"),
            "DISTILL_TIMEOUT_SECS" => option_env!("DISTILL_TIMEOUT_SECS"),
            "DISTILL_DEMO_MODE" => option_env!("DISTILL_DEMO_MODE"),
            _ => None,
        }
        .map(str::to_string)
    })
}

/// Send a prompt to the compression service
pub async fn compress(
    endpoint: &str,
    text: &str,
    aggressiveness: Aggressiveness,
) -> Result<CompressionOutcome> {
    let client = reqwest::Client::new();

    let response = client
        .post(endpoint)
        .json(&CompressionRequest::new(text, aggressiveness))
        .send()
        .await
        .map_err(|e| CompressError::Connection(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(CompressError::Status(status.as_u16()));
    }

    let body: CompressionResponse = response.json().await.unwrap_or_default();
    Ok(body.reconcile(text))
}
