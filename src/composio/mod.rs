//! Composio API module
//!
//! Contains wire types and the HTTP client for Composio's hosted tool-router sessions.

pub mod client;
pub mod types;

pub use client::ComposioClient;
pub use types::{Session, SessionRequest, ToolHandle};
