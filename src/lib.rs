//! Secure Gmail Skill Library
//!
//! Provisions a least-privilege Gmail tool session through Composio managed auth.
//! Emails can be read and drafted; send and delete are never requested, and no
//! raw OAuth tokens ever touch local disk.

pub mod composio;
pub mod config;
pub mod error;
pub mod gmail;
pub mod skill;

pub use config::{Config, Environment};
pub use error::{Result, SkillError};
pub use skill::{GmailSkill, DEFAULT_USER_ID};
