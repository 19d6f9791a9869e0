pub mod backends;
pub mod base;
pub mod project_handler;
pub mod service_provider;
