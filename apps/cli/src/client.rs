//! Optimisation client — the single point of entry for all calls to the
//! remote text-optimisation endpoint.
//!
//! ARCHITECTURAL RULE: no other module may talk to the endpoint directly.
//! The client is stateless: every call builds its own request, performs one
//! POST, and resolves exactly once. Retry is the caller's decision, expressed
//! as a brand-new call.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};

use crate::errors::OptimiseError;

/// One optimisation call's payload. Built fresh per call, never persisted.
///
/// `tone: None` is serialized as an explicit JSON `null`, which the endpoint
/// treats differently from an empty string. Do not add
/// `skip_serializing_if` here.
#[derive(Debug, Clone, Serialize)]
pub struct OptimisationRequest {
    pub text: String,
    pub language: String,
    pub audience: String,
    pub tone: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OptimiseResponse {
    #[serde(rename = "optimisedText")]
    optimised_text: String,
}

/// Seam for the caller layer: anything that can turn an
/// [`OptimisationRequest`] into optimised text. Lets orchestration code be
/// exercised against a stub instead of a live endpoint.
#[async_trait]
pub trait TextOptimiser: Send + Sync {
    async fn optimise(&self, request: &OptimisationRequest) -> Result<String, OptimiseError>;
}

/// HTTP client for the optimisation endpoint.
///
/// The endpoint URL is validated at construction, so a malformed endpoint is
/// a startup failure rather than a per-call branch.
#[derive(Clone)]
pub struct OptimisationClient {
    http: Client,
    endpoint: Url,
}

impl OptimisationClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            // Transport defaults on purpose: one attempt, no timeout override.
            http: Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl TextOptimiser for OptimisationClient {
    async fn optimise(&self, request: &OptimisationRequest) -> Result<String, OptimiseError> {
        // Serialization failure short-circuits before any network I/O.
        let body = serde_json::to_vec(request)?;

        let response = self
            .http
            .post(self.endpoint.clone())
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(OptimiseError::InvalidResponse {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        let parsed: OptimiseResponse = serde_json::from_slice(&bytes)
            .map_err(|_| OptimiseError::InvalidResponse {
                status: status.as_u16(),
            })?;

        Ok(parsed.optimised_text)
    }
}
