pub mod file;
pub mod json;
pub mod logging;
pub mod path;
pub mod process;
pub mod time;
