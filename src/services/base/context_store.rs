
use std::fmt::{Debug, Formatter};

/// Name of the elevated context used for namespace creation and deletion.
pub const ADMIN_CONTEXT_NAME: &str = "admin";

/// Credentials presented to the cluster by a context
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    Basic { username: String, password: String },
    Token(String),
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Credentials::Token(_) => f.debug_tuple("Token").field(&"<redacted>").finish(),
        }
    }
}

/// A cluster endpoint together with the credentials and the namespace used to scope calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterContext {
    pub name: String,
    pub cluster_url: String,
    pub namespace: String,
    pub credentials: Credentials,
    pub accept_invalid_certs: bool,
}

/// Holds the context every cluster call is currently made under.
pub trait ContextStore: Send + Sync {
    /// Returns the context that is currently active
    fn current_context(&self) -> ClusterContext;

    /// Makes the given context the active one
    fn set_context(&self, context: ClusterContext);

    /// Returns the elevated context required for namespace management
    fn admin_context(&self) -> ClusterContext;

    /// Registers a new context with the given credentials scoped to `namespace`
    fn new_temporary_context(
        &self,
        name: &str,
        username: &str,
        password: &str,
        namespace: &str,
    ) -> anyhow::Result<ClusterContext>;
}

/// Switches the active context for the lifetime of the scope.
///
/// The context that was active when the scope was entered is restored on drop,
/// so early returns and errors inside the scope cannot leave a foreign context behind.
pub struct ContextScope<'a> {
    store: &'a dyn ContextStore,
    active: ClusterContext,
    prior: Option<ClusterContext>,
}

impl<'a> ContextScope<'a> {
    pub fn enter(store: &'a dyn ContextStore, context: ClusterContext) -> Self {
        let prior = store.current_context();
        store.set_context(context.clone());
        ContextScope {
            store,
            active: context,
            prior: Some(prior),
        }
    }

    /// The context made active by this scope
    pub fn context(&self) -> &ClusterContext {
        &self.active
    }
}

impl Drop for ContextScope<'_> {
    fn drop(&mut self) {
        if let Some(prior) = self.prior.take() {
            self.store.set_context(prior);
        }
    }
}
