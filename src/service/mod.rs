pub mod provisioning;
pub mod scoring;
