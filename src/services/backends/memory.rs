
use crate::configuration::models::harness_settings::HarnessSettings;
use crate::services::base::context_store::{ADMIN_CONTEXT_NAME, ClusterContext, ContextStore, Credentials};
use anyhow::bail;
use log::debug;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Name of the context the registry starts with.
pub const MASTER_CONTEXT_NAME: &str = "master";

const DEFAULT_NAMESPACE: &str = "default";

/// In-memory registry of named contexts with a single current-context slot
pub struct ContextRegistry {
    admin: ClusterContext,
    contexts: RwLock<HashMap<String, ClusterContext>>,
    current: RwLock<ClusterContext>,
}

impl ContextRegistry {
    pub fn new(admin: ClusterContext, initial: ClusterContext) -> Self {
        let mut contexts = HashMap::new();
        contexts.insert(admin.name.clone(), admin.clone());
        contexts.insert(initial.name.clone(), initial.clone());
        ContextRegistry {
            admin,
            contexts: RwLock::new(contexts),
            current: RwLock::new(initial),
        }
    }

    /// Builds the registry with the admin context and the master context, the latter being current.
    pub fn from_settings(settings: &HarnessSettings) -> anyhow::Result<Self> {
        let cluster = &settings.cluster;
        let admin_credentials = match (&cluster.admin_token, &cluster.admin_username, &cluster.admin_password) {
            (Some(token), _, _) => Credentials::Token(token.clone()),
            (None, Some(username), Some(password)) => Credentials::Basic {
                username: username.clone(),
                password: password.clone(),
            },
            _ => bail!("Cluster settings must define either admin_token or admin_username and admin_password"),
        };

        let admin = ClusterContext {
            name: ADMIN_CONTEXT_NAME.to_string(),
            cluster_url: cluster.url.clone(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            credentials: admin_credentials,
            accept_invalid_certs: cluster.accept_invalid_certs,
        };

        let master_namespace = settings
            .default_namespace()
            .filter(|namespace| !namespace.trim().is_empty())
            .unwrap_or(DEFAULT_NAMESPACE);
        let master = ClusterContext {
            name: MASTER_CONTEXT_NAME.to_string(),
            cluster_url: cluster.url.clone(),
            namespace: master_namespace.to_string(),
            credentials: Credentials::Basic {
                username: settings.master.username.clone(),
                password: settings.master.password.clone(),
            },
            accept_invalid_certs: cluster.accept_invalid_certs,
        };

        Ok(ContextRegistry::new(admin, master))
    }

    /// Looks up a registered context by name
    pub fn context(&self, name: &str) -> Option<ClusterContext> {
        let read_guard = self.contexts.read().unwrap_or_else(PoisonError::into_inner);
        (*read_guard).get(name).cloned()
    }
}

impl ContextStore for ContextRegistry {
    fn current_context(&self) -> ClusterContext {
        self.current.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set_context(&self, context: ClusterContext) {
        debug!("Switching to context {} (namespace {})", context.name, context.namespace);
        let mut write_guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *write_guard = context;
    }

    fn admin_context(&self) -> ClusterContext {
        self.admin.clone()
    }

    fn new_temporary_context(
        &self,
        name: &str,
        username: &str,
        password: &str,
        namespace: &str,
    ) -> anyhow::Result<ClusterContext> {
        if name.trim().is_empty() {
            bail!("Context name cannot be blank");
        }
        if name == ADMIN_CONTEXT_NAME {
            bail!("Context name '{}' is reserved", ADMIN_CONTEXT_NAME);
        }

        let context = ClusterContext {
            name: name.to_string(),
            cluster_url: self.admin.cluster_url.clone(),
            namespace: namespace.to_string(),
            credentials: Credentials::Basic {
                username: username.to_string(),
                password: password.to_string(),
            },
            accept_invalid_certs: self.admin.accept_invalid_certs,
        };

        let mut write_guard = self.contexts.write().unwrap_or_else(PoisonError::into_inner);
        (*write_guard).insert(context.name.clone(), context.clone());
        Ok(context)
    }
}
