pub mod cluster_settings;
pub mod harness_settings;
pub mod master_settings;
pub mod registry_settings;
