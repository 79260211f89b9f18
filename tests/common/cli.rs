use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;
use std::process::ExitStatus;

use assert_cmd::Command;
use tempfile::TempDir;

/// Scratch directory the `td` binary runs in.
pub struct TdWorkspace {
    _temp: TempDir,
    pub root: PathBuf,
}

impl TdWorkspace {
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("create temp dir");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    /// Default todo file inside the workspace.
    pub fn todo_path(&self) -> PathBuf {
        self.root.join("todo.json")
    }

    pub fn write_todo(&self, contents: &str) {
        fs::write(self.todo_path(), contents).expect("write todo file");
    }

    pub fn read_todo(&self) -> String {
        fs::read_to_string(self.todo_path()).expect("read todo file")
    }

    /// A `td` command rooted in the workspace with a clean environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("td").expect("td binary");
        cmd.current_dir(&self.root)
            .env_remove("TD_FILE")
            .env_remove("TD_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }
}

pub struct TdOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl TdOutput {
    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }
}

/// Run `td` with `args` in the workspace. `label` names the step in failures.
pub fn run_td<I, S>(workspace: &TdWorkspace, args: I, label: &str) -> TdOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = workspace
        .command()
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("{label}: failed to run td: {e}"));

    TdOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
