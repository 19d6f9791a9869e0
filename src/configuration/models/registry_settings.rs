use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct RegistrySettings {
    pub secret_name: String,
    pub server: String,
    pub username: String,
    pub password: String,
    pub email: Option<String>,
}
