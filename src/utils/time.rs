use chrono::Local;

/// Local timestamp usable as a directory name, e.g. `2024-05-01_14-03-59`.
pub fn folder_timestamp() -> String {
    Local::now().format("%Y-%m-%d_%H-%M-%S").to_string()
}
