pub mod deploy;
pub mod error;
pub mod paths;
