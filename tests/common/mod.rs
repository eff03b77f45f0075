//! Shared test infrastructure for integration tests.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A fish source folder and an (initially absent) zsh destination folder.
pub struct Workspace {
    root: TempDir,
}

impl Workspace {
    pub fn create() -> Self {
        let root = TempDir::new().expect("create temp dir");
        fs::create_dir_all(root.path().join("fish")).expect("create fish dir");
        Self { root }
    }

    pub fn src_dir(&self) -> PathBuf {
        self.root.path().join("fish")
    }

    pub fn dst_dir(&self) -> PathBuf {
        self.root.path().join("zsh")
    }

    /// Copy `tests/fixtures/{name}/{name}.fish` into the source folder.
    #[allow(dead_code)]
    pub fn add_fixture(&self, name: &str) {
        let fish = fixture_dir(name).join(format!("{name}.fish"));
        fs::copy(&fish, self.src_dir().join(format!("{name}.fish")))
            .unwrap_or_else(|err| panic!("copy {}: {err}", fish.display()));
    }

    #[allow(dead_code)]
    pub fn add_source(&self, file_name: &str, content: &str) {
        fs::write(self.src_dir().join(file_name), content).expect("write fish source");
    }

    /// Run the converter between the two folders with extra arguments.
    pub fn run(&self, extra: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_zsh-manpage-completion-generator"))
            .arg("--src")
            .arg(self.src_dir())
            .arg("--dst")
            .arg(self.dst_dir())
            .args(extra)
            .env_remove("RUST_LOG")
            .output()
            .expect("run zsh-manpage-completion-generator")
    }

    #[allow(dead_code)]
    pub fn read_output(&self, command: &str) -> String {
        read(&self.dst_dir().join(format!("_{command}")))
    }
}

#[allow(dead_code)]
pub fn fixture_dir(name: &str) -> PathBuf {
    manifest_dir().join("tests/fixtures").join(name)
}

#[allow(dead_code)]
pub fn expected_output(name: &str) -> String {
    read(&fixture_dir(name).join(format!("_{name}")))
}

fn manifest_dir() -> PathBuf {
    PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".into()))
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|err| panic!("read {}: {err}", path.display()))
}
