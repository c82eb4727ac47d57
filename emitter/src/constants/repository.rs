//! Fixed settings for the repository service the client registers with.
//!
//! These values are opaque to the emitter: they are copied into the record as-is
//! and interpreted only by the downstream repository client.

pub const AAD_RESOURCE: &str =
    "https://microsoft.onmicrosoft.com/945999e9-da09-4b5b-878f-b66c414602c0";
pub const AAD_TENANT: &str = "72f988bf-86f1-41af-91ab-2d7cd011db47";
pub const AAD_AUTHORITY_URL: &str = "https://login.microsoftonline.com";
pub const SERVER: &str = "azure-apt-cat.cloudapp.net";
// Emitted as a string; the client parses it.
pub const PORT: &str = "443";
