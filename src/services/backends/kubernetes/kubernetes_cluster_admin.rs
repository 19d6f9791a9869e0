
use crate::configuration::models::registry_settings::RegistrySettings;
use crate::services::backends::kubernetes::kubeconfig::to_kube_config;
use crate::services::backends::kubernetes::registry_secret::{
    MANAGED_BY_LABEL, MANAGED_BY_VALUE, registry_secret, with_pull_secret,
};
use crate::services::base::cluster_admin::ClusterAdmin;
use crate::services::base::context_store::ClusterContext;
use crate::services::base::status::ClusterStatus;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::{Namespace, Secret, ServiceAccount};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::api::{DeleteParams, Patch, PatchParams, PostParams};
use kube::{Api, Client};
use log::{debug, info, warn};
use maplit::btreemap;
use serde_json::json;
use std::time::Duration;
use tokio::time::Instant;

const DEFAULT_SERVICE_ACCOUNT: &str = "default";
const ACTIVE_PHASE: &str = "Active";
const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Namespace management through the Kubernetes API
pub struct KubernetesClusterAdmin {
    operation_timeout: Duration,
    registry: Option<RegistrySettings>,
}

impl KubernetesClusterAdmin {
    pub fn new(operation_timeout: Duration, registry: Option<RegistrySettings>) -> Self {
        KubernetesClusterAdmin {
            operation_timeout,
            registry,
        }
    }

    async fn client(&self, context: &ClusterContext) -> Result<Client, ClusterStatus> {
        let config = to_kube_config(context).await?;
        Ok(Client::try_from(config)?)
    }

    async fn try_delay(&self, start_time: Instant, name: &str, operation: &str) -> Result<(), ClusterStatus> {
        if start_time.elapsed() > self.operation_timeout {
            let message = format!(
                "Timed out after {:?} waiting for {} of namespace {}",
                self.operation_timeout, operation, name
            );
            return Err(ClusterStatus::Timeout(message));
        }
        tokio::time::sleep(POLL_INTERVAL).await;
        Ok(())
    }
}

pub fn namespace_definition(name: &str) -> Namespace {
    Namespace {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            labels: Some(btreemap! {
                MANAGED_BY_LABEL.to_string() => MANAGED_BY_VALUE.to_string(),
            }),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn is_active(namespace: &Namespace) -> bool {
    namespace
        .status
        .as_ref()
        .and_then(|status| status.phase.as_deref())
        .is_some_and(|phase| phase == ACTIVE_PHASE)
}

/// Whether a failed delete still means the namespace is gone or on its way out.
/// A namespace that is already terminating answers a delete with a conflict.
pub fn is_namespace_going(status: &ClusterStatus) -> bool {
    matches!(status, ClusterStatus::NotFound(_) | ClusterStatus::Conflict)
}

#[async_trait]
impl ClusterAdmin for KubernetesClusterAdmin {
    async fn recreate_namespace(&self, context: &ClusterContext, name: &str) -> Result<(), ClusterStatus> {
        let namespaces: Api<Namespace> = Api::all(self.client(context).await?);
        let start_time = Instant::now();

        if namespaces.get_opt(name).await?.is_some() {
            info!("Deleting existing namespace {}", name);
            if let Err(e) = namespaces.delete(name, &DeleteParams::default()).await {
                let status = ClusterStatus::from(e);
                if !is_namespace_going(&status) {
                    return Err(status);
                }
                debug!("Namespace {} is already being removed: {}", name, status);
            }
            while namespaces.get_opt(name).await?.is_some() {
                debug!("Waiting for namespace {} to be removed", name);
                self.try_delay(start_time, name, "deletion").await?;
            }
        }

        namespaces
            .create(&PostParams::default(), &namespace_definition(name))
            .await?;
        loop {
            let namespace = namespaces.get_opt(name).await?;
            if namespace.as_ref().is_some_and(is_active) {
                debug!("Namespace {} is active", name);
                return Ok(());
            }
            self.try_delay(start_time, name, "activation").await?;
        }
    }

    async fn create_registry_secret(&self, context: &ClusterContext) -> Result<(), ClusterStatus> {
        let Some(registry) = &self.registry else {
            debug!("No image registry configured, skipping pull secret for {}", context.namespace);
            return Ok(());
        };

        let client = self.client(context).await?;
        let namespace = context.namespace.as_str();

        let secrets: Api<Secret> = Api::namespaced(client.clone(), namespace);
        let secret = registry_secret(registry, namespace);
        secrets
            .patch(
                &registry.secret_name,
                &PatchParams::apply(MANAGED_BY_VALUE).force(),
                &Patch::Apply(&secret),
            )
            .await?;
        debug!("Pull secret {} applied in {}", registry.secret_name, namespace);

        let accounts: Api<ServiceAccount> = Api::namespaced(client, namespace);
        match accounts.get_opt(DEFAULT_SERVICE_ACCOUNT).await? {
            None => warn!(
                "Service account {} not found in {}, pull secret {} is not linked",
                DEFAULT_SERVICE_ACCOUNT, namespace, registry.secret_name
            ),
            Some(account) => {
                if let Some(references) = with_pull_secret(account.image_pull_secrets, &registry.secret_name) {
                    let patch = json!({ "imagePullSecrets": references });
                    accounts
                        .patch(DEFAULT_SERVICE_ACCOUNT, &PatchParams::default(), &Patch::Merge(&patch))
                        .await?;
                }
            }
        }
        Ok(())
    }

    async fn delete_namespace(&self, context: &ClusterContext, name: &str) -> Result<(), ClusterStatus> {
        let namespaces: Api<Namespace> = Api::all(self.client(context).await?);
        match namespaces.delete(name, &DeleteParams::default()).await {
            Ok(_) => Ok(()),
            Err(e) => match ClusterStatus::from(e) {
                ClusterStatus::NotFound(_) => {
                    debug!("Namespace {} does not exist, nothing to delete", name);
                    Ok(())
                }
                other => Err(other),
            },
        }
    }
}
