use serde::Deserialize;

/// Credentials used for the temporary contexts and the namespace shared by the test run.
#[derive(Debug, Clone, Deserialize)]
pub struct MasterSettings {
    /// Namespace used when a handler is created without an explicit one.
    /// A blank value makes every such handler work in a temporary namespace.
    #[serde(default)]
    pub namespace: Option<String>,
    pub username: String,
    pub password: String,
}
