//! Least-privilege Gmail tool policy
//!
//! The session may read, fetch, draft, and look up the profile. Sending and
//! deleting are never requested, and anything resembling them is rejected.

use std::collections::BTreeMap;

use crate::composio::types::ToolSelection;
use crate::error::{PolicyError, Result};

/// Gmail toolkit slug
pub const GMAIL_TOOLKIT: &str = "gmail";

pub const GMAIL_FETCH_EMAILS: &str = "GMAIL_FETCH_EMAILS";
pub const GMAIL_FETCH_MESSAGE_BY_MESSAGE_ID: &str = "GMAIL_FETCH_MESSAGE_BY_MESSAGE_ID";
pub const GMAIL_CREATE_EMAIL_DRAFT: &str = "GMAIL_CREATE_EMAIL_DRAFT";
pub const GMAIL_GET_PROFILE: &str = "GMAIL_GET_PROFILE";

/// The only Gmail tools this skill enables
pub const ENABLED_TOOLS: [&str; 4] = [
    GMAIL_FETCH_EMAILS,
    GMAIL_FETCH_MESSAGE_BY_MESSAGE_ID,
    GMAIL_CREATE_EMAIL_DRAFT,
    GMAIL_GET_PROFILE,
];

/// Known irreversible Gmail tools. Each is caught by the segment rule in [`is_forbidden`].
pub const FORBIDDEN_TOOLS: &[&str] = &[
    "GMAIL_SEND_EMAIL",
    "GMAIL_SEND_DRAFT",
    "GMAIL_REPLY_TO_THREAD",
    "GMAIL_FORWARD_MESSAGE",
    "GMAIL_DELETE_MESSAGE",
    "GMAIL_DELETE_DRAFT",
    "GMAIL_BATCH_DELETE_MESSAGES",
    "GMAIL_MOVE_TO_TRASH",
];

/// Slug segments that mark a tool as sending or destroying mail
const FORBIDDEN_SEGMENTS: &[&str] = &["SEND", "DELETE", "TRASH", "REPLY", "FORWARD"];

/// Whether a tool slug must never be part of this skill's session.
///
/// A slug is forbidden when any `_`-separated segment is one of the send or
/// destroy verbs, so unlisted variants are refused too.
pub fn is_forbidden(slug: &str) -> bool {
    slug.trim()
        .to_ascii_uppercase()
        .split('_')
        .any(|segment| FORBIDDEN_SEGMENTS.contains(&segment))
}

/// The `tools` payload for a session: Gmail, four tools, nothing else
pub fn least_privilege_tools() -> BTreeMap<String, ToolSelection> {
    let mut tools = BTreeMap::new();
    tools.insert(
        GMAIL_TOOLKIT.to_string(),
        ToolSelection {
            enable: ENABLED_TOOLS.iter().map(|s| s.to_string()).collect(),
        },
    );
    tools
}

/// Reject any forbidden slug
pub fn ensure_least_privilege<'a, I>(slugs: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    for slug in slugs {
        if is_forbidden(slug) {
            tracing::warn!("Refusing forbidden Gmail tool {}", slug);
            return Err(PolicyError::ForbiddenTool {
                slug: slug.to_string(),
            }
            .into());
        }
    }
    Ok(())
}
