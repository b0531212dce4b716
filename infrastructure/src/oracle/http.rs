//! HTTP summarization oracle adapter
//!
//! Talks to a text-generation inference endpoint: the ordered texts are
//! joined with the separator token and POSTed as a generation request, and
//! the endpoint's generated text becomes the candidate output. The beam
//! width is forwarded opaquely in the request parameters.

use async_trait::async_trait;
use crowdsum_application::ports::oracle::{OracleError, SummarizationOracle};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default separator between workers' texts in the model input
pub const DEFAULT_SEPARATOR: &str = " | ";

/// Default beam-search width forwarded to the endpoint
pub const DEFAULT_NUM_BEAMS: u16 = 16;

/// Settings for the HTTP oracle adapter (`[oracle]` config section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpOracleConfig {
    /// Generation endpoint URL
    pub endpoint: String,
    /// Token inserted between concatenated texts
    pub separator: String,
    /// Beam-search width; 1 means no beam search
    pub num_beams: u16,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for HttpOracleConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8080/generate".to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            num_beams: DEFAULT_NUM_BEAMS,
            timeout_secs: 120,
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    inputs: &'a str,
    parameters: GenerateParameters,
}

#[derive(Serialize)]
struct GenerateParameters {
    num_beams: u16,
}

#[derive(Deserialize)]
struct GenerateResponse {
    generated_text: String,
}

/// Summarization oracle backed by a text-generation HTTP endpoint
pub struct HttpSummarizationOracle {
    client: reqwest::Client,
    config: HttpOracleConfig,
}

impl HttpSummarizationOracle {
    /// Build the adapter, applying the configured request timeout
    pub fn new(config: HttpOracleConfig) -> Result<Self, OracleError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OracleError::Connection(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// The adapter settings in use
    pub fn config(&self) -> &HttpOracleConfig {
        &self.config
    }

    fn model_input(&self, ordered_texts: &[String]) -> String {
        ordered_texts.join(&self.config.separator)
    }
}

#[async_trait]
impl SummarizationOracle for HttpSummarizationOracle {
    async fn generate(&self, ordered_texts: &[String]) -> Result<String, OracleError> {
        let inputs = self.model_input(ordered_texts);
        debug!(
            "Requesting summary for {} texts ({} bytes)",
            ordered_texts.len(),
            inputs.len()
        );

        let request = GenerateRequest {
            inputs: &inputs,
            parameters: GenerateParameters {
                num_beams: self.config.num_beams,
            },
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    OracleError::Timeout
                } else if e.is_connect() {
                    OracleError::Connection(e.to_string())
                } else {
                    OracleError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OracleError::RequestFailed(format!(
                "HTTP {}: {}",
                status.as_u16(),
                body.trim()
            )));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| OracleError::InvalidResponse(e.to_string()))?;

        Ok(body.generated_text)
    }
}
