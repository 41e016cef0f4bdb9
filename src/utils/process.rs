use camino::Utf8Path;
use std::process::{Command, Stdio};

pub const DEFAULT_EDITOR: &str = "code";

pub struct EditorLauncher;

impl EditorLauncher {
    /// Starts `editor <dir>` detached from our stdio and does not wait for it.
    pub fn open(editor: &str, dir: &Utf8Path) -> std::io::Result<()> {
        Self::command(editor, dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
    }

    // `code` ships as a .cmd shim on Windows, which only the shell resolves.
    #[cfg(windows)]
    fn command(editor: &str, dir: &Utf8Path) -> Command {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(editor).arg(dir);
        cmd
    }

    #[cfg(not(windows))]
    fn command(editor: &str, dir: &Utf8Path) -> Command {
        let mut cmd = Command::new(editor);
        cmd.arg(dir);
        cmd
    }
}
