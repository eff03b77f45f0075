use anyhow::{anyhow, Result};
use std::env;
use std::path::{Path, PathBuf};

/// XDG data directory shared by fish and zsh completions.
pub struct DataDirs {
    root: PathBuf,
}

impl DataDirs {
    /// `$XDG_DATA_HOME`, or `~/.local/share` when unset or empty.
    pub fn resolve() -> Result<Self> {
        let xdg = env::var_os("XDG_DATA_HOME").filter(|value| !value.is_empty());
        let root = match xdg {
            Some(value) => PathBuf::from(value),
            None => dirs::home_dir()
                .ok_or_else(|| anyhow!("cannot determine home directory"))?
                .join(".local")
                .join("share"),
        };
        Ok(Self { root })
    }

    #[cfg(test)]
    fn with_root(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where `fish_update_completions` writes its man page completions.
    pub fn fish_generated_completions(&self) -> PathBuf {
        self.root.join("fish").join("generated_completions")
    }

    pub fn zsh_generated_completions(&self) -> PathBuf {
        self.root.join("zsh").join("generated_man_completions")
    }
}
