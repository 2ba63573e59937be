//! Composio API client
//!
//! Thin client for session creation and tool lookup on the Composio backend.

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::composio::types::{Session, SessionRequest, ToolHandle, ToolList};
use crate::config::composio::API_KEY_HEADER;
use crate::config::{ApiKey, Config};
use crate::error::{ComposioError, Result, SkillError};

/// Composio API client
pub struct ComposioClient {
    /// HTTP client
    http_client: reqwest::Client,

    /// API key sent with every request
    api_key: ApiKey,

    /// Backend base URL
    base_url: String,
}

impl ComposioClient {
    /// Create a new Composio client
    pub fn new(config: &Config) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http_client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        })
    }

    fn session_url(&self) -> String {
        format!("{}/api/v3/tool_router/session", self.base_url)
    }

    fn tools_url(&self) -> String {
        format!("{}/api/v3/tools", self.base_url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(API_KEY_HEADER, self.api_key.expose())
    }

    /// Create a tool-router session
    pub async fn create_session(&self, request: &SessionRequest) -> Result<Session> {
        tracing::debug!("Creating Composio session for user {}", request.user_id);

        let response = self
            .authorized(self.http_client.post(self.session_url()))
            .json(request)
            .send()
            .await?;

        parse_response(response, "create session").await
    }

    /// Fetch the tools exposed by a session
    pub async fn session_tools(&self, session: &Session) -> Result<Vec<ToolHandle>> {
        if session.tool_router_tools.is_empty() {
            return Ok(Vec::new());
        }

        let slugs = session.tool_router_tools.join(",");
        let limit = session.tool_router_tools.len().to_string();

        let response = self
            .authorized(self.http_client.get(self.tools_url()))
            .query(&[("tool_slugs", slugs.as_str()), ("limit", limit.as_str())])
            .send()
            .await?;

        let list: ToolList = parse_response(response, "list tools").await?;
        Ok(list.items)
    }
}

/// Decode a successful response or map the failure status
async fn parse_response<T: DeserializeOwned>(response: Response, action: &str) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        return Ok(response.json().await?);
    }

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(SkillError::Composio(ComposioError::Unauthorized {
            status: status.as_u16(),
        }));
    }

    let text = response.text().await.unwrap_or_default();
    Err(SkillError::Composio(ComposioError::RequestFailed {
        message: format!("Failed to {} ({}): {}", action, status, text),
    }))
}
