//! Session and tool provisioning
//!
//! Ties configuration, the least-privilege policy, and the Composio client together.

use crate::composio::types::{Session, SessionRequest, ToolHandle, ToolkitSelection};
use crate::composio::ComposioClient;
use crate::config::{Config, Environment};
use crate::error::Result;
use crate::gmail::policy::{ensure_least_privilege, least_privilege_tools, GMAIL_TOOLKIT};

/// User ID used when the caller does not supply one
pub const DEFAULT_USER_ID: &str = "openclaw_user";

/// Build the session request for a user. `None` means [`DEFAULT_USER_ID`].
pub fn session_request(user_id: Option<&str>) -> SessionRequest {
    SessionRequest {
        user_id: user_id.unwrap_or(DEFAULT_USER_ID).to_string(),
        toolkits: ToolkitSelection {
            enable: vec![GMAIL_TOOLKIT.to_string()],
        },
        tools: least_privilege_tools(),
    }
}

/// Validate configuration and build a Composio client
pub fn composio_client(env: &Environment) -> Result<ComposioClient> {
    let config = Config::from_environment(env)?;
    ComposioClient::new(&config)
}

/// Least-privilege Gmail skill
pub struct GmailSkill {
    client: ComposioClient,
}

impl GmailSkill {
    /// Create a skill from a resolved environment
    pub fn new(env: &Environment) -> Result<Self> {
        Ok(Self {
            client: composio_client(env)?,
        })
    }

    /// Create a Composio session with the least-privilege Gmail tools only
    pub async fn create_session(&self, user_id: Option<&str>) -> Result<Session> {
        let request = session_request(user_id);
        ensure_least_privilege(request.tool_slugs())?;

        let session = self.client.create_session(&request).await?;
        ensure_least_privilege(session.tool_router_tools.iter().map(String::as_str))?;

        tracing::info!(
            "Created Composio session {} for user {}",
            session.session_id,
            request.user_id
        );
        Ok(session)
    }

    /// Return the scoped Gmail tools for an agent (read + draft only)
    pub async fn gmail_tools(&self, user_id: Option<&str>) -> Result<Vec<ToolHandle>> {
        let session = self.create_session(user_id).await?;
        let tools = self.client.session_tools(&session).await?;
        ensure_least_privilege(tools.iter().map(|t| t.slug.as_str()))?;

        tracing::info!("Session {} exposes {} tools", session.session_id, tools.len());
        Ok(tools)
    }
}
