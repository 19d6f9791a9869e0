#![cfg_attr(coverage, feature(coverage_attribute))]

pub mod configuration;
pub mod services;

// COVERAGE: disabled since the module is only compiled for testing purposes
#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
pub mod testing;
