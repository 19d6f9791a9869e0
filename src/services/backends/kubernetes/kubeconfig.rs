
use crate::services::base::context_store::{ClusterContext, Credentials};
use kube::Config;
use kube::config::{KubeConfigOptions, Kubeconfig};
use log::debug;
use serde_json::json;

/// Builds the client configuration for a context from a single-context kubeconfig document.
pub async fn to_kube_config(context: &ClusterContext) -> anyhow::Result<Config> {
    let user = match &context.credentials {
        Credentials::Basic { username, password } => json!({
            "username": username,
            "password": password,
        }),
        Credentials::Token(token) => json!({ "token": token }),
    };

    let kubeconfig_definition = json!({
        "apiVersion": "v1",
        "kind": "Config",
        "clusters": [{
            "name": context.name,
            "cluster": {
                "server": context.cluster_url,
                "insecure-skip-tls-verify": context.accept_invalid_certs,
            }
        }],
        "users": [{
            "name": context.name,
            "user": user,
        }],
        "contexts": [{
            "name": context.name,
            "context": {
                "cluster": context.name,
                "user": context.name,
                "namespace": context.namespace,
            }
        }],
        "current-context": context.name,
    });

    debug!("Building client configuration for context {}", context.name);
    let kubeconfig: Kubeconfig = serde_json::from_value(kubeconfig_definition)?;
    let config = Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default()).await?;
    Ok(config)
}
