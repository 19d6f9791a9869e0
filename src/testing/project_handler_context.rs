use crate::services::base::context_store::{ClusterContext, ContextStore};
use crate::services::project_handler::ProjectHandler;
use crate::testing::fake_backend::FakeBackend;
use test_context::AsyncTestContext;
use uuid::Uuid;

/// A prepared handler for a uniquely named project, cleaned up when the test ends
pub struct ProjectHandlerContext {
    pub backend: FakeBackend,
    pub handler: ProjectHandler,
    pub caller_context: ClusterContext,
}

impl AsyncTestContext for ProjectHandlerContext {
    async fn setup() -> Self {
        let backend = FakeBackend::default();
        let caller_context = backend.contexts.current_context();
        let project = format!("it-{}", &Uuid::new_v4().simple().to_string()[..8]);
        let mut handler = ProjectHandler::new(&project, &backend).expect("Failed to create project handler");
        handler.prepare().await.expect("Failed to prepare project");
        ProjectHandlerContext {
            backend,
            handler,
            caller_context,
        }
    }

    async fn teardown(mut self) {
        self.handler.cleanup().await.expect("Failed to clean up project");
        assert_eq!(self.backend.contexts.current_context(), self.caller_context);
    }
}
