use crate::services::base::context_store::ClusterContext;
use crate::services::base::status::ClusterStatus;
use async_trait::async_trait;

#[async_trait]
/// Privileged namespace management on the cluster under test.
/// Every call runs under the context it is given.
pub trait ClusterAdmin: Send + Sync {
    /// Creates the namespace, destroying a pre-existing one with the same name first.
    /// Fails with `ClusterStatus::Timeout` if the namespace does not settle in time.
    async fn recreate_namespace(&self, context: &ClusterContext, name: &str) -> Result<(), ClusterStatus>;

    /// Creates the image registry pull secret in the namespace of the context
    async fn create_registry_secret(&self, context: &ClusterContext) -> Result<(), ClusterStatus>;

    /// Deletes the namespace. Deleting a namespace that does not exist succeeds.
    async fn delete_namespace(&self, context: &ClusterContext, name: &str) -> Result<(), ClusterStatus>;
}
