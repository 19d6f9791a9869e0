pub mod handler_error;


use crate::configuration::models::harness_settings::HarnessSettings;
use crate::services::backends::Backend;
use crate::services::base::cluster_admin::ClusterAdmin;
use crate::services::base::cluster_client::ClusterClient;
use crate::services::base::context_store::{ClusterContext, ContextScope, ContextStore};
use crate::services::base::status::ClusterStatus;
use crate::services::project_handler::handler_error::HandlerError;
use crate::services::service_provider::ServiceProvider;
use log::{error, info, warn};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;

/// Suffix of the namespaces created for handlers without an explicit namespace
pub const TEMP_NAMESPACE_SUFFIX: &str = "-automated";

/// Name of the file the namespace events are recorded to
pub const EVENTS_LOG_FILE: &str = "events.log";

/// Prepares the namespace a test runs in and tears it down afterward.
///
/// A handler created without a namespace works in a temporary namespace derived from the
/// project name. Preparing such a handler switches the current context to a temporary one
/// scoped to that namespace, and the cleanup restores the caller's context and deletes the
/// namespace. A handler with an explicit namespace only (re)creates it.
///
/// A handler can be prepared only once. The cleanup is expected to run even if the preparation
/// failed halfway.
pub struct ProjectHandler {
    project: String,
    namespace: String,
    temporary_namespace: bool,
    original_context: Option<ClusterContext>,
    used: bool,

    contexts: Arc<dyn ContextStore>,
    admin: Arc<dyn ClusterAdmin>,
    client: Arc<dyn ClusterClient>,
    settings: Arc<HarnessSettings>,
}

impl ProjectHandler {
    /// Creates a handler for the default namespace of the harness settings.
    pub fn new<B>(project: &str, backend: &B) -> Result<Self, HandlerError>
    where
        B: Backend + ?Sized,
    {
        let settings = <B as ServiceProvider<Arc<HarnessSettings>>>::get(backend);
        let namespace = settings.default_namespace().map(str::to_string);
        Self::with_namespace(project, namespace.as_deref(), backend)
    }

    /// Creates a handler for the given namespace. A missing or blank namespace selects
    /// a temporary namespace that is removed in the cleanup.
    pub fn with_namespace<B>(project: &str, namespace: Option<&str>, backend: &B) -> Result<Self, HandlerError>
    where
        B: Backend + ?Sized,
    {
        if project.trim().is_empty() {
            return Err(HandlerError::InvalidArgument("project cannot be blank".to_string()));
        }

        let (namespace, temporary_namespace) = match namespace {
            Some(namespace) if !namespace.trim().is_empty() => (namespace.to_string(), false),
            _ => (format!("{}{}", project, TEMP_NAMESPACE_SUFFIX), true),
        };

        Ok(ProjectHandler {
            project: project.to_string(),
            namespace,
            temporary_namespace,
            original_context: None,
            used: false,
            contexts: <B as ServiceProvider<Arc<dyn ContextStore>>>::get(backend),
            admin: <B as ServiceProvider<Arc<dyn ClusterAdmin>>>::get(backend),
            client: <B as ServiceProvider<Arc<dyn ClusterClient>>>::get(backend),
            settings: <B as ServiceProvider<Arc<HarnessSettings>>>::get(backend),
        })
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn is_temporary(&self) -> bool {
        self.temporary_namespace
    }

    /// Prepares the temporary context if needed and (re)creates the namespace.
    pub async fn prepare(&mut self) -> Result<(), HandlerError> {
        if self.used {
            return Err(HandlerError::IllegalReuse);
        }
        self.used = true;

        if self.temporary_namespace {
            self.original_context = Some(self.contexts.current_context());
            info!(action = "create-temp-context", status = "START", project = self.project.as_str(), namespace = self.namespace.as_str();
                "Creating temporary context {} for namespace {}", self.project, self.namespace);

            let master = &self.settings.master;
            let context =
                self.contexts
                    .new_temporary_context(&self.project, &master.username, &master.password, &self.namespace)?;
            self.contexts.set_context(context);

            info!(action = "create-temp-context", status = "FINISH", project = self.project.as_str(), namespace = self.namespace.as_str();
                "Temporary context {} is active", self.project);
        }

        self.create_project().await
    }

    async fn create_project(&self) -> Result<(), HandlerError> {
        info!(action = "create-project", status = "START", project = self.namespace.as_str(), recreate = true;
            "Creating project {}", self.namespace);

        {
            let admin_scope = ContextScope::enter(self.contexts.as_ref(), self.contexts.admin_context());
            match self.admin.recreate_namespace(admin_scope.context(), &self.namespace).await {
                Ok(()) => {}
                Err(ClusterStatus::Timeout(message)) => {
                    warn!("Failed to create {} project ({}). Assuming it already exists.", self.namespace, message);
                }
                Err(other) => return Err(other.into()),
            }
        }

        let context = self.contexts.current_context();
        self.admin.create_registry_secret(&context).await?;

        info!(action = "create-project", status = "FINISH", project = self.namespace.as_str(), recreate = true;
            "Project {} is ready", self.namespace);
        Ok(())
    }

    /// Records the events of the namespace to `events.log` in the logs directory.
    /// Failures are logged and never reach the caller.
    pub async fn capture_event_log(&self) {
        if let Err(e) = self.record_events().await {
            error!(action = "record-events", status = "ERROR", namespace = self.namespace.as_str();
                "Failed to record events of namespace {}: {:#}", self.namespace, e);
        }
    }

    async fn record_events(&self) -> anyhow::Result<PathBuf> {
        let logs_dir = &self.settings.logs_dir;
        tokio::fs::create_dir_all(logs_dir).await?;

        info!(action = "record-events", status = "START", namespace = self.namespace.as_str();
            "Recording events of namespace {}", self.namespace);

        // Truncated before the command runs so a failed capture never leaves events of a previous run
        let path = logs_dir.join(EVENTS_LOG_FILE);
        let mut file = tokio::fs::File::create(&path).await?;

        let error_message = format!("Error executing 'get events -n {}'", self.namespace);
        let events = self
            .client
            .execute(&error_message, &["get", "events", "-n", self.namespace.as_str()])
            .await?;

        file.write_all(events.as_bytes()).await?;
        file.flush().await?;
        info!(action = "record-events", status = "FINISH", namespace = self.namespace.as_str();
            "Events of namespace {} recorded to {}", self.namespace, path.display());
        Ok(path)
    }

    /// Restores the caller's context and removes the namespace if it is temporary.
    pub async fn cleanup(&mut self) -> Result<(), HandlerError> {
        self.used = true;
        if !self.temporary_namespace {
            return Ok(());
        }

        self.restore_context();
        self.delete_namespace().await
    }

    fn restore_context(&mut self) {
        match self.original_context.take() {
            Some(context) => self.contexts.set_context(context),
            None => warn!(
                "No context was saved for project {}, the current context is left unchanged",
                self.project
            ),
        }
    }

    async fn delete_namespace(&self) -> Result<(), HandlerError> {
        info!(action = "remove-temp-namespace", status = "START", namespace = self.namespace.as_str();
            "Removing temporary namespace {}", self.namespace);

        let admin_scope = ContextScope::enter(self.contexts.as_ref(), self.contexts.admin_context());
        if let Err(e) = self.admin.delete_namespace(admin_scope.context(), &self.namespace).await {
            error!(action = "remove-temp-namespace", status = "ERROR", namespace = self.namespace.as_str();
                "Failed to remove temporary namespace {}: {}", self.namespace, e);
            return Err(e.into());
        }

        info!(action = "remove-temp-namespace", status = "FINISH", namespace = self.namespace.as_str();
            "Temporary namespace {} removed", self.namespace);
        Ok(())
    }
}
