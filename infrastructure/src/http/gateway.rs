//! HTTP adapter for the specialist gateway port
//!
//! Speaks the agent services' request/response contract: `POST /ask`
//! with a JSON question, answered with a JSON body carrying the agent's
//! opinion text.

use async_trait::async_trait;
use consilium_application::ports::specialist_gateway::{SpecialistCallError, SpecialistGateway};
use consilium_domain::{ConsultationRequest, Specialist};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outbound `/ask` request body
#[derive(Debug, Serialize)]
struct AskRequestBody<'a> {
    question: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
}

/// Inbound `/ask` response body
///
/// The agents echo their own name alongside the answer; only the answer
/// is consumed here.
#[derive(Debug, Deserialize)]
struct AskResponseBody {
    #[serde(default)]
    #[allow(dead_code)]
    agent: Option<String>,
    answer: String,
}

/// Join an agent endpoint with a route, tolerating trailing slashes.
pub(crate) fn agent_url(endpoint: &str, route: &str) -> String {
    format!("{}/{}", endpoint.trim_end_matches('/'), route)
}

/// Classify a reqwest transport error into the port's taxonomy.
fn classify(e: reqwest::Error) -> SpecialistCallError {
    if e.is_timeout() {
        SpecialistCallError::Timeout
    } else if e.is_connect() {
        SpecialistCallError::Connection(e.to_string())
    } else if e.is_decode() {
        SpecialistCallError::Protocol(format!("Malformed answer payload: {}", e))
    } else {
        SpecialistCallError::Unexpected(e.to_string())
    }
}

/// HTTP implementation of [`SpecialistGateway`]
///
/// Holds one shared `reqwest::Client`; stateless and safe across
/// concurrent consultations. The per-specialist timeout is applied to
/// each request, covering connect, write, and read.
pub struct HttpSpecialistGateway {
    pub(crate) client: reqwest::Client,
}

impl HttpSpecialistGateway {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Build from an existing client (connection pool reuse, test hooks)
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpSpecialistGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpecialistGateway for HttpSpecialistGateway {
    async fn ask(
        &self,
        specialist: &Specialist,
        request: &ConsultationRequest,
    ) -> Result<String, SpecialistCallError> {
        let url = agent_url(specialist.endpoint(), "ask");
        debug!("Asking specialist {} at {}", specialist, url);

        let body = AskRequestBody {
            question: request.question().content(),
            language: request.language(),
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .timeout(specialist.timeout())
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SpecialistCallError::Protocol(format!(
                "HTTP {} from {}",
                status.as_u16(),
                specialist.name()
            )));
        }

        let body: AskResponseBody = response.json().await.map_err(classify)?;
        Ok(body.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_url_joins_route() {
        assert_eq!(
            agent_url("http://localhost:8001", "ask"),
            "http://localhost:8001/ask"
        );
        assert_eq!(
            agent_url("http://localhost:8001/", "health"),
            "http://localhost:8001/health"
        );
    }

    #[test]
    fn test_ask_request_body_shape() {
        let body = AskRequestBody {
            question: "Is PSA screening useful?",
            language: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["question"], "Is PSA screening useful?");
        assert!(json.get("language").is_none());

        let body = AskRequestBody {
            question: "Q",
            language: Some("ko"),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["language"], "ko");
    }

    #[test]
    fn test_ask_response_body_tolerates_missing_agent() {
        let body: AskResponseBody =
            serde_json::from_str(r#"{"answer": "BCG therapy causes local irritation"}"#).unwrap();
        assert_eq!(body.answer, "BCG therapy causes local irritation");

        let body: AskResponseBody =
            serde_json::from_str(r#"{"agent": "DR_BLADDER", "answer": "ok"}"#).unwrap();
        assert_eq!(body.answer, "ok");
    }
}
