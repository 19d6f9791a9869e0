pub mod cluster_admin;
pub mod cluster_client;
pub mod context_store;
pub mod status;
