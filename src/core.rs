pub mod backup;
pub mod cleanup;
pub mod deployment;
pub mod project_service;
