use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::PackageBuilder;

/// Records each build directory and the files it held when the build ran.
#[derive(Default)]
pub struct FakeBuilder {
    pub build_dirs: Mutex<Vec<PathBuf>>,
    pub seen_files: Mutex<BTreeMap<String, String>>,
    pub fail_with: Mutex<Option<String>>,
}

impl FakeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(details: &str) -> Self {
        let builder = Self::new();
        *builder.fail_with.lock().unwrap() = Some(details.to_string());
        builder
    }

    pub fn calls(&self) -> usize {
        self.build_dirs.lock().unwrap().len()
    }

    pub fn last_build_dir(&self) -> Option<PathBuf> {
        self.build_dirs.lock().unwrap().last().cloned()
    }

    pub fn seen_file(&self, name: &str) -> Option<String> {
        self.seen_files.lock().unwrap().get(name).cloned()
    }
}

impl PackageBuilder for FakeBuilder {
    fn build_and_install(&self, build_dir: &Path) -> Result<(), AppError> {
        self.build_dirs.lock().unwrap().push(build_dir.to_path_buf());

        let mut seen = self.seen_files.lock().unwrap();
        for entry in fs::read_dir(build_dir).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            seen.insert(name, fs::read_to_string(&path).unwrap());
        }

        match self.fail_with.lock().unwrap().clone() {
            Some(details) => Err(AppError::BuildFailed { command: self.command_line(), details }),
            None => Ok(()),
        }
    }

    fn command_line(&self) -> String {
        "fake-builder".to_string()
    }
}
