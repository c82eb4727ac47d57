use crate::constants::repository;
use crate::utils::json;
use serde::Serialize;
use std::fmt;
use zeroize::{ZeroizeOnDrop, Zeroizing};

const REDACTED: &str = "<redacted>";
// Covers the fixed fields, keys and separators with room to spare.
const FIXED_JSON_CAPACITY: usize = 512;
// Longest escape (`\u00XX`) per input byte.
const MAX_ESCAPED_BYTES_PER_BYTE: usize = 6;

/// Azure AD application credentials read from the environment.
///
/// The secret is wiped from memory when the value is dropped and never appears
/// in `Debug` output.
#[derive(Clone, ZeroizeOnDrop)]
pub struct ClientCredentials {
    client_id: String,
    client_secret: String,
}

impl ClientCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &REDACTED)
            .finish()
    }
}

/// The record written to `config.json` for the repository client.
///
/// Five fields are fixed repository settings, two carry the client credentials,
/// and `repositoryId` is left empty for the client to fill in when it registers.
/// Fields serialize in declaration order.
#[derive(Clone, Serialize, ZeroizeOnDrop)]
pub struct RepoClientConfig {
    #[serde(rename = "AADResource")]
    #[zeroize(skip)]
    aad_resource: &'static str,
    #[serde(rename = "AADTenant")]
    #[zeroize(skip)]
    aad_tenant: &'static str,
    #[serde(rename = "AADAuthorityUrl")]
    #[zeroize(skip)]
    aad_authority_url: &'static str,
    #[serde(rename = "server")]
    #[zeroize(skip)]
    server: &'static str,
    #[serde(rename = "port")]
    #[zeroize(skip)]
    port: &'static str,
    #[serde(rename = "AADClientId")]
    aad_client_id: String,
    #[serde(rename = "AADClientSecret")]
    aad_client_secret: String,
    #[serde(rename = "repositoryId")]
    repository_id: String,
}

impl RepoClientConfig {
    /// Every key of the serialized record, in output order.
    pub const KEYS: [&'static str; 8] = [
        "AADResource",
        "AADTenant",
        "AADAuthorityUrl",
        "server",
        "port",
        "AADClientId",
        "AADClientSecret",
        "repositoryId",
    ];

    pub fn new(credentials: &ClientCredentials) -> Self {
        Self {
            aad_resource: repository::AAD_RESOURCE,
            aad_tenant: repository::AAD_TENANT,
            aad_authority_url: repository::AAD_AUTHORITY_URL,
            server: repository::SERVER,
            port: repository::PORT,
            aad_client_id: credentials.client_id().to_string(),
            aad_client_secret: credentials.client_secret().to_string(),
            repository_id: String::new(),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.aad_client_id
    }

    /// JSON encoding of the record, one line with `", "` and `": "` separators.
    ///
    /// The buffer holds the client secret, so it is sized up front to avoid
    /// reallocation and is wiped when dropped.
    pub fn to_json(&self) -> Result<Zeroizing<Vec<u8>>, serde_json::Error> {
        let variable_len = self.aad_client_id.len() + self.aad_client_secret.len();
        let mut buffer = Zeroizing::new(Vec::with_capacity(
            FIXED_JSON_CAPACITY + variable_len * MAX_ESCAPED_BYTES_PER_BYTE,
        ));
        json::write_spaced(&mut buffer, self)?;
        Ok(buffer)
    }
}

impl fmt::Debug for RepoClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepoClientConfig")
            .field("aad_resource", &self.aad_resource)
            .field("aad_tenant", &self.aad_tenant)
            .field("aad_authority_url", &self.aad_authority_url)
            .field("server", &self.server)
            .field("port", &self.port)
            .field("aad_client_id", &self.aad_client_id)
            .field("aad_client_secret", &REDACTED)
            .field("repository_id", &self.repository_id)
            .finish()
    }
}
