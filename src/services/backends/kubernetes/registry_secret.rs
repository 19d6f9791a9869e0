
use crate::configuration::models::registry_settings::RegistrySettings;
use k8s_openapi::api::core::v1::{LocalObjectReference, Secret};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use maplit::btreemap;
use serde_json::{Map, json};

pub const DOCKER_CONFIG_SECRET_TYPE: &str = "kubernetes.io/dockerconfigjson";
pub const DOCKER_CONFIG_KEY: &str = ".dockerconfigjson";
pub const MANAGED_BY_LABEL: &str = "app.kubernetes.io/managed-by";
pub const MANAGED_BY_VALUE: &str = "harness-core";

/// The image pull secret for the configured registry
pub fn registry_secret(settings: &RegistrySettings, namespace: &str) -> Secret {
    let mut credentials = json!({
        "username": settings.username,
        "password": settings.password,
    });
    if let Some(email) = &settings.email {
        credentials["email"] = json!(email);
    }
    let mut auths = Map::new();
    auths.insert(settings.server.clone(), credentials);
    let docker_config = json!({ "auths": auths });

    Secret {
        metadata: ObjectMeta {
            name: Some(settings.secret_name.clone()),
            namespace: Some(namespace.to_string()),
            labels: Some(btreemap! {
                MANAGED_BY_LABEL.to_string() => MANAGED_BY_VALUE.to_string(),
            }),
            ..Default::default()
        },
        type_: Some(DOCKER_CONFIG_SECRET_TYPE.to_string()),
        string_data: Some(btreemap! {
            DOCKER_CONFIG_KEY.to_string() => docker_config.to_string(),
        }),
        ..Default::default()
    }
}

/// Appends the secret to the pull secrets of a service account.
/// Returns `None` when the secret is already referenced.
pub fn with_pull_secret(
    references: Option<Vec<LocalObjectReference>>,
    secret_name: &str,
) -> Option<Vec<LocalObjectReference>> {
    let mut references = references.unwrap_or_default();
    if references.iter().any(|reference| reference.name == secret_name) {
        return None;
    }
    references.push(LocalObjectReference {
        name: secret_name.to_string(),
    });
    Some(references)
}
