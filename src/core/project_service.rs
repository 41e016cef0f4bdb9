use crate::config::global::AppConfig;
use crate::config::ConfigStore;
use crate::core::{backup, deployment};
use crate::models::deploy::{BackupRecord, DeployReport};
use crate::models::error::{AppError, Phase};
use crate::utils::path::existing_dir;
use crate::utils::process::EditorLauncher;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{info, instrument};

/// Owns the in-memory config and persists it after every mutation.
pub struct ProjectService {
    store: ConfigStore,
    config: AppConfig,
    backup_root: Utf8PathBuf,
}

impl ProjectService {
    /// Ensures the config directory exists and loads the stored state.
    pub fn open(store: ConfigStore, backup_root: Utf8PathBuf) -> Result<Self, AppError> {
        store.ensure_dir()?;
        let config = store.load()?;
        Ok(Self {
            store,
            config,
            backup_root,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn backup_root(&self) -> &Utf8Path {
        &self.backup_root
    }

    fn persist(&self) -> Result<(), AppError> {
        self.store.save(&self.config)
    }

    #[instrument(skip(self))]
    pub fn select_server_path(&mut self, path: &Utf8Path) -> Result<Utf8PathBuf, AppError> {
        let path = existing_dir(path)?;
        self.config.set_server_path(&path);
        self.persist()?;
        info!("Server root set to {path}");
        Ok(path)
    }

    /// Registers a project directory. Returns false when it was already registered.
    #[instrument(skip(self))]
    pub fn add_project(&mut self, path: &Utf8Path) -> Result<bool, AppError> {
        let path = existing_dir(path)?;
        if !self.config.add_project(&path) {
            info!("Project already registered: {path}");
            return Ok(false);
        }
        self.persist()?;
        info!("Project added: {path}");
        Ok(true)
    }

    /// Unregisters a project. Matches the stored path first, then its normalized form.
    #[instrument(skip(self))]
    pub fn remove_project(&mut self, path: &Utf8Path) -> Result<bool, AppError> {
        let path = self.resolve_registered(path);
        if !self.config.remove_project(&path) {
            return Ok(false);
        }
        self.persist()?;
        info!("Project removed: {path}");
        Ok(true)
    }

    #[instrument(skip(self))]
    pub fn set_active_project(&mut self, path: &Utf8Path) -> Result<(), AppError> {
        let path = self.resolve_registered(path);
        self.config.set_active_project(&path)?;
        self.persist()?;
        info!("Active project: {path}");
        Ok(())
    }

    /// Removed project folders can't be canonicalized, so the literal path is tried first.
    fn resolve_registered(&self, path: &Utf8Path) -> Utf8PathBuf {
        if self.config.contains_project(path) {
            return path.to_owned();
        }
        existing_dir(path).unwrap_or_else(|_| path.to_owned())
    }

    /// Opens a registered project in `editor`.
    #[instrument(skip(self))]
    pub fn open_project(&self, path: &Utf8Path, editor: &str) -> Result<Utf8PathBuf, AppError> {
        let path = self.resolve_registered(path);
        if !self.config.contains_project(&path) {
            return Err(AppError::UnknownProject(path));
        }
        let dir = existing_dir(&path)?;
        EditorLauncher::open(editor, &dir).map_err(|e| AppError::io(Phase::Launch, editor, e))?;
        info!("Opened {dir} in {editor}");
        Ok(dir)
    }

    /// Runs every deploy precondition without touching the filesystem.
    pub fn check_deploy(&self) -> Result<(Utf8PathBuf, Utf8PathBuf), AppError> {
        let server = self.config.server_path().ok_or(AppError::MissingServerPath)?;
        let project = self
            .config
            .active_project()
            .ok_or(AppError::MissingActiveProject)?;
        deployment::validate(project, server)
    }

    /// Mirrors the active project into the server root.
    #[instrument(skip(self))]
    pub fn deploy(&self) -> Result<DeployReport, AppError> {
        let (project, server) = self.check_deploy()?;
        deployment::deploy(&project, &server)
    }

    /// Snapshots the server root, then deploys. Nothing is written when validation fails.
    #[instrument(skip(self))]
    pub fn deploy_with_backup(&self) -> Result<(BackupRecord, DeployReport), AppError> {
        let (project, server) = self.check_deploy()?;
        let record = backup::create_backup(&server, &self.backup_root)?;
        let report = deployment::deploy(&project, &server)?;
        Ok((record, report))
    }

    #[instrument(skip(self))]
    pub fn backup_server(&self) -> Result<BackupRecord, AppError> {
        let server = self.config.server_path().ok_or(AppError::MissingServerPath)?;
        backup::create_backup(server, &self.backup_root)
    }

    pub fn list_backups(&self) -> Result<Vec<BackupRecord>, AppError> {
        backup::list_backups(&self.backup_root)
    }

    #[instrument(skip(self))]
    pub fn restore_backup(&self, name: &str) -> Result<DeployReport, AppError> {
        let server = self.config.server_path().ok_or(AppError::MissingServerPath)?;
        backup::restore_backup(&self.backup_root, name, server)
    }

    pub fn reset_config(&mut self) -> Result<(), AppError> {
        self.config = self.store.reset()?;
        Ok(())
    }
}
