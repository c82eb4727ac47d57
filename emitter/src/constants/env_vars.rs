//! Environment variable name constants
//!
//! Centralized names of the variables the emitter reads, so the check order is
//! defined in exactly one place.

// Azure AD application credentials
pub const AZURE_AAD_ID: &str = "AZURE_AAD_ID";
pub const AAD_CLIENT_SECRET: &str = "AAD_CLIENT_SECRET";

/// Required variables, in the order they are checked.
pub const REQUIRED_VARS: [&str; 2] = [AZURE_AAD_ID, AAD_CLIENT_SECRET];
