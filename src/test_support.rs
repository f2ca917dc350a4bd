use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::LazyLock;
use tempfile::TempDir;

static DIFF_AVAILABLE: LazyLock<bool> = LazyLock::new(|| {
    Command::new("diff")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|status| status.success())
});

/// Whether a `diff` program is installed; tests that need one return early otherwise.
pub(crate) fn diff_available() -> bool {
    *DIFF_AVAILABLE
}

/// Write two comparison inputs into a fresh temporary directory.
pub(crate) fn write_pair(a: &str, b: &str) -> (TempDir, PathBuf, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path_a = temp_dir.path().join("a.txt");
    let path_b = temp_dir.path().join("b.txt");

    std::fs::write(&path_a, a).unwrap();
    std::fs::write(&path_b, b).unwrap();

    (temp_dir, path_a, path_b)
}
