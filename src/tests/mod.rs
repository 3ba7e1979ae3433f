mod provisioning;
mod scoring;
