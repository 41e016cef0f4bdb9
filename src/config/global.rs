// src/config/global.rs
use crate::models::error::AppError;
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// Persisted application state. Empty strings mean "unset" on disk.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    #[serde(rename = "wamp_path")]
    pub server_path: String,
    pub projects: Vec<String>,
    pub active_project: String,
}

fn non_empty(s: &str) -> Option<&Utf8Path> {
    (!s.is_empty()).then(|| Utf8Path::new(s))
}

impl AppConfig {
    pub fn server_path(&self) -> Option<&Utf8Path> {
        non_empty(&self.server_path)
    }

    pub fn active_project(&self) -> Option<&Utf8Path> {
        non_empty(&self.active_project)
    }

    pub fn set_server_path(&mut self, path: &Utf8Path) {
        self.server_path = path.to_string();
    }

    pub fn contains_project(&self, path: &Utf8Path) -> bool {
        self.projects.iter().any(|p| p == path.as_str())
    }

    pub fn is_active(&self, path: &Utf8Path) -> bool {
        self.active_project() == Some(path)
    }

    /// Appends a project. Returns false and leaves the list untouched if it is already registered.
    pub fn add_project(&mut self, path: &Utf8Path) -> bool {
        if self.contains_project(path) {
            return false;
        }
        self.projects.push(path.to_string());
        true
    }

    /// Removes a project, clearing the active project when it was the one removed.
    pub fn remove_project(&mut self, path: &Utf8Path) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| p != path.as_str());
        if self.projects.len() == before {
            return false;
        }
        if self.is_active(path) {
            self.clear_active_project();
        }
        true
    }

    pub fn set_active_project(&mut self, path: &Utf8Path) -> Result<(), AppError> {
        if !self.contains_project(path) {
            return Err(AppError::UnknownProject(path.to_owned()));
        }
        self.active_project = path.to_string();
        Ok(())
    }

    pub fn clear_active_project(&mut self) {
        self.active_project.clear();
    }

    pub fn project_paths(&self) -> impl Iterator<Item = Utf8PathBuf> + '_ {
        self.projects.iter().map(Utf8PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_projects(paths: &[&str]) -> AppConfig {
        let mut config = AppConfig::default();
        for p in paths {
            config.add_project(Utf8Path::new(p));
        }
        config
    }

    #[test]
    fn duplicate_add_keeps_list_unchanged() {
        let mut config = with_projects(&["/p/blog", "/p/shop"]);
        assert!(!config.add_project(Utf8Path::new("/p/blog")));
        assert_eq!(config.projects, vec!["/p/blog", "/p/shop"]);
    }

    #[test]
    fn removing_active_project_clears_it() {
        let mut config = with_projects(&["/p/blog", "/p/shop"]);
        config.set_active_project(Utf8Path::new("/p/shop")).unwrap();

        assert!(config.remove_project(Utf8Path::new("/p/shop")));
        assert_eq!(config.active_project, "");
        assert_eq!(config.active_project(), None);
    }

    #[test]
    fn removing_other_project_keeps_active() {
        let mut config = with_projects(&["/p/blog", "/p/shop"]);
        config.set_active_project(Utf8Path::new("/p/shop")).unwrap();

        assert!(config.remove_project(Utf8Path::new("/p/blog")));
        assert_eq!(config.active_project, "/p/shop");
    }

    #[test]
    fn removing_unknown_project_is_a_no_op() {
        let mut config = with_projects(&["/p/blog"]);
        assert!(!config.remove_project(Utf8Path::new("/p/nope")));
        assert_eq!(config.projects.len(), 1);
    }

    #[test]
    fn active_project_must_be_registered() {
        let mut config = with_projects(&["/p/blog"]);
        let err = config.set_active_project(Utf8Path::new("/p/nope")).unwrap_err();
        assert!(matches!(err, AppError::UnknownProject(_)));
        assert_eq!(config.active_project, "");
    }

    #[test]
    fn serializes_with_original_keys() {
        let mut config = with_projects(&["/p/blog"]);
        config.set_server_path(Utf8Path::new("/srv/htdocs"));
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["wamp_path"], "/srv/htdocs");
        assert_eq!(json["projects"][0], "/p/blog");
        assert_eq!(json["active_project"], "");
    }

    #[test]
    fn missing_keys_default() {
        let config: AppConfig = serde_json::from_str(r#"{"wamp_path": "C:/xampp/htdocs"}"#).unwrap();
        assert_eq!(config.server_path, "C:/xampp/htdocs");
        assert!(config.projects.is_empty());
        assert_eq!(config.active_project(), None);
    }
}
