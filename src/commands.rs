pub mod deploy;
pub mod project;

use crate::config::ConfigStore;
use crate::core::backup::default_backup_root;
use crate::core::project_service::ProjectService;
use crate::models::error::AppError;
use crate::utils::process::DEFAULT_EDITOR;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

/// Keeps a WAMP/XAMPP server root in sync with the active project.
#[derive(Parser, Debug)]
#[command(name = "htdocs-keeper", version, about)]
pub struct Cli {
    /// Use this directory instead of the per-user config directory.
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<Utf8PathBuf>,

    /// Store and look up server-root backups here instead of Documents/XAMPP_Backups.
    #[arg(long, global = true, value_name = "DIR")]
    pub backup_dir: Option<Utf8PathBuf>,

    /// Log debug output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the server root and registered projects.
    Show,
    /// Select the server root deployments are written to.
    Server { dir: Utf8PathBuf },
    /// Register a project directory.
    Add { dir: Utf8PathBuf },
    /// Unregister a project directory.
    Remove { dir: Utf8PathBuf },
    /// Mark a registered project as the one to deploy.
    Activate { dir: Utf8PathBuf },
    /// Open a registered project in an editor.
    Open {
        dir: Utf8PathBuf,
        /// Editor command to launch.
        #[arg(long, default_value = DEFAULT_EDITOR)]
        editor: String,
    },
    /// Wipe the server root and copy the active project into it.
    Deploy {
        /// Snapshot the server root first.
        #[arg(long)]
        backup: bool,
    },
    /// Snapshot the server root.
    Backup,
    /// List server-root snapshots, newest first.
    Backups,
    /// Mirror a snapshot back into the server root.
    Restore { name: String },
    /// Overwrite the config file with defaults.
    ResetConfig,
}

impl Cli {
    pub fn store(&self) -> Result<ConfigStore, AppError> {
        match &self.config_dir {
            Some(dir) => Ok(ConfigStore::at(dir.clone())),
            None => ConfigStore::platform(),
        }
    }

    fn backup_root(&self) -> Result<Utf8PathBuf, AppError> {
        match &self.backup_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_backup_root(),
        }
    }
}

/// Runs one command and returns the message shown to the user on success.
pub fn execute(cli: &Cli, store: ConfigStore) -> Result<String, AppError> {
    // Reset must work even when the stored file can't be parsed.
    if let Command::ResetConfig = cli.command {
        store.reset()?;
        return Ok(format!("Config reset: {}", store.config_file()));
    }

    let mut service = ProjectService::open(store, cli.backup_root()?)?;

    match &cli.command {
        Command::Show => Ok(project::show(&service)),
        Command::Server { dir } => project::select_server(&mut service, dir),
        Command::Add { dir } => project::add(&mut service, dir),
        Command::Remove { dir } => project::remove(&mut service, dir),
        Command::Activate { dir } => project::activate(&mut service, dir),
        Command::Open { dir, editor } => project::open(&service, dir, editor),
        Command::Deploy { backup } => deploy::deploy(&service, *backup),
        Command::Backup => deploy::backup(&service),
        Command::Backups => deploy::list_backups(&service),
        Command::Restore { name } => deploy::restore(&service, name),
        Command::ResetConfig => {
            service.reset_config()?;
            Ok(format!("Config reset: {}", service.store().config_file()))
        }
    }
}
