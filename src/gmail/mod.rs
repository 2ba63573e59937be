//! Gmail module
//!
//! Gmail-specific policy for the tools a session may expose.

pub mod policy;
