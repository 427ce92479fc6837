//! Shared testing utilities for quicksvc CLI tests.

use assert_cmd::Command;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FAKE_MAKEPKG: &str = r#"#!/bin/sh
pwd > "$QUICKSVC_TEST_CAPTURE/cwd"
echo "$@" > "$QUICKSVC_TEST_CAPTURE/args"
cp ./* "$QUICKSVC_TEST_CAPTURE/"
if read -r line; then
    echo "$line" > "$QUICKSVC_TEST_CAPTURE/stdin"
fi
echo "fake makepkg output"
exit "${FAKE_MAKEPKG_EXIT:-0}"
"#;

/// Testing harness with a fake `makepkg` on `PATH` and a private temp location.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    bin_dir: PathBuf,
    tmp_dir: PathBuf,
    capture_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        let bin_dir = root.path().join("bin");
        let tmp_dir = root.path().join("tmp");
        let capture_dir = root.path().join("capture");
        for dir in [&work_dir, &bin_dir, &tmp_dir, &capture_dir] {
            fs::create_dir_all(dir).expect("Failed to create test directory");
        }

        let makepkg = bin_dir.join("makepkg");
        fs::write(&makepkg, FAKE_MAKEPKG).expect("Failed to write fake makepkg");
        fs::set_permissions(&makepkg, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark fake makepkg executable");

        Self { root, work_dir, bin_dir, tmp_dir, capture_dir }
    }

    /// Path to the directory CLI invocations run in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `quicksvc` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("quicksvc").expect("Failed to locate quicksvc binary");
        cmd.current_dir(&self.work_dir)
            .env("PATH", self.path_with_fake_builder())
            .env("TMPDIR", &self.tmp_dir)
            .env("QUICKSVC_TEST_CAPTURE", &self.capture_dir);
        cmd
    }

    /// Build a command whose fake `makepkg` exits with `code`.
    pub fn cli_with_builder_exit(&self, code: i32) -> Command {
        let mut cmd = self.cli();
        cmd.env("FAKE_MAKEPKG_EXIT", code.to_string());
        cmd
    }

    /// Build a command with no `makepkg` reachable on `PATH`.
    pub fn cli_without_builder(&self) -> Command {
        let mut cmd = self.cli();
        cmd.env("PATH", self.root.path().join("empty-path"));
        cmd
    }

    fn path_with_fake_builder(&self) -> OsString {
        let mut paths = vec![self.bin_dir.clone()];
        if let Some(existing) = env::var_os("PATH") {
            paths.extend(env::split_paths(&existing));
        }
        env::join_paths(paths).expect("Failed to build PATH")
    }

    /// Read a file the fake `makepkg` captured from its working directory.
    pub fn captured(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.capture_dir.join(name)).ok()
    }

    /// Whether the fake `makepkg` ran at all.
    pub fn builder_ran(&self) -> bool {
        self.capture_dir.join("cwd").exists()
    }

    /// Assert that every scratch directory was removed from the private temp location.
    pub fn assert_scratch_removed(&self) {
        let leftovers: Vec<_> = fs::read_dir(&self.tmp_dir)
            .expect("Failed to read temp directory")
            .map(|e| e.expect("Failed to read entry").file_name())
            .collect();
        assert!(leftovers.is_empty(), "scratch directories left behind: {:?}", leftovers);
    }
}
