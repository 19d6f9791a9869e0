use serde::Deserialize;

/// Connection settings of the cluster under test and the credentials of its administrator.
#[derive(Debug, Clone, Deserialize)]
pub struct ClusterSettings {
    pub url: String,

    #[serde(default)]
    pub accept_invalid_certs: bool,

    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
    pub admin_token: Option<String>,
}
