//! Batch conversion of a fish generated_completions folder.
//!
//! Every `<command>.fish` file becomes `_<command>` in the zsh folder. Files
//! that cannot be converted are logged and left out; filesystem failures
//! abort the run.
use crate::cli::DEFAULT_EXCLUDED_COMMANDS;
use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use zsh_manpage_completion_generator::convert::Converter;

const FISH_SUFFIX: &str = ".fish";
const POSIX_SUFFIX: &str = ".1posix.fish";

/// Resolved inputs for one batch run.
pub struct RunConfig {
    pub src_dir: PathBuf,
    pub dst_dir: PathBuf,
    pub clean: bool,
    pub json: bool,
    pub filter: CommandFilter,
}

/// Decides which commands get a zsh completion at all.
#[derive(Debug, Clone)]
pub struct CommandFilter {
    excluded: BTreeSet<String>,
}

impl CommandFilter {
    pub fn new<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut excluded: BTreeSet<String> = DEFAULT_EXCLUDED_COMMANDS
            .iter()
            .map(|cmd| cmd.to_string())
            .collect();
        excluded.extend(extra.into_iter().map(Into::into));
        Self { excluded }
    }

    pub fn allows(&self, command: &str) -> bool {
        !self.excluded.contains(command)
    }
}

#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct RunSummary {
    pub source_dir: String,
    pub dest_dir: String,
    /// fish files handed to the converter
    pub attempted: usize,
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn completion_line(&self) -> String {
        format!(
            "Completed. converted: {}/{}, skipped: {}",
            self.converted, self.attempted, self.skipped
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileOutcome {
    NotFish,
    PosixVariant,
    Excluded,
    Failed,
    Converted,
}

pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let sources = list_source_files(&config.src_dir)?;
    prepare_dest_dir(config)?;

    announce(
        config.json,
        &format!(
            "Converting fish completions: {} -> {}",
            config.src_dir.display(),
            config.dst_dir.display()
        ),
    );

    let mut summary = RunSummary {
        source_dir: config.src_dir.display().to_string(),
        dest_dir: config.dst_dir.display().to_string(),
        skipped: sources.unreadable_names,
        ..RunSummary::default()
    };
    for file_name in sources.names {
        match convert_file(config, &file_name)? {
            FileOutcome::NotFish => {}
            FileOutcome::PosixVariant | FileOutcome::Excluded => summary.skipped += 1,
            FileOutcome::Failed => {
                summary.attempted += 1;
                summary.failed += 1;
            }
            FileOutcome::Converted => {
                summary.attempted += 1;
                summary.converted += 1;
            }
        }
    }
    Ok(summary)
}

fn announce(json: bool, message: &str) {
    if json {
        tracing::info!("{message}");
    } else {
        println!("{message}");
    }
}

struct SourceListing {
    /// regular files, sorted by name
    names: Vec<String>,
    /// regular files whose names are not UTF-8
    unreadable_names: usize,
}

fn list_source_files(src_dir: &Path) -> Result<SourceListing> {
    let entries = fs::read_dir(src_dir).with_context(|| {
        format!(
            "could not open source dir {}, is fish installed?",
            src_dir.display()
        )
    })?;
    let mut names = Vec::new();
    let mut unreadable_names = 0;
    for entry in entries {
        let entry = entry.with_context(|| format!("read {}", src_dir.display()))?;
        let file_type = entry
            .file_type()
            .with_context(|| format!("stat {}", entry.path().display()))?;
        if !file_type.is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            // command names end up in `#compdef`, so they must be text
            Err(name) => {
                tracing::debug!(file = %name.to_string_lossy(), "skipped non utf-8 file name");
                unreadable_names += 1;
            }
        }
    }
    names.sort();
    Ok(SourceListing {
        names,
        unreadable_names,
    })
}

fn prepare_dest_dir(config: &RunConfig) -> Result<()> {
    let dst_dir = &config.dst_dir;
    let exists = match fs::metadata(dst_dir) {
        Ok(meta) if !meta.is_dir() => {
            return Err(anyhow!(
                "could not open destination dir as directory: {}",
                dst_dir.display()
            ));
        }
        Ok(_) => true,
        Err(err) if err.kind() == io::ErrorKind::NotFound => false,
        Err(err) => {
            return Err(err)
                .with_context(|| format!("could not open destination dir {}", dst_dir.display()));
        }
    };

    if config.clean {
        announce(
            config.json,
            &format!("Cleaning zsh completions folder: {}", dst_dir.display()),
        );
        if exists {
            fs::remove_dir_all(dst_dir)
                .with_context(|| format!("could not remove {}", dst_dir.display()))?;
        }
        create_dest_dir(dst_dir)
    } else if !exists {
        create_dest_dir(dst_dir)
    } else {
        Ok(())
    }
}

fn create_dest_dir(dst_dir: &Path) -> Result<()> {
    fs::create_dir_all(dst_dir).with_context(|| format!("could not create {}", dst_dir.display()))
}

fn convert_file(config: &RunConfig, file_name: &str) -> Result<FileOutcome> {
    let Some(command) = file_name.strip_suffix(FISH_SUFFIX) else {
        tracing::info!(file = file_name, "skipped non fish file");
        return Ok(FileOutcome::NotFish);
    };
    // zsh has a single command for the posix and non-posix man pages
    if file_name.ends_with(POSIX_SUFFIX) {
        tracing::debug!(file = file_name, "skipped posix version");
        return Ok(FileOutcome::PosixVariant);
    }
    if !config.filter.allows(command) {
        tracing::debug!(file = file_name, "skipped unneeded command");
        return Ok(FileOutcome::Excluded);
    }

    let src_path = config.src_dir.join(file_name);
    let src_file = File::open(&src_path)
        .with_context(|| format!("could not open {}", src_path.display()))?;
    let content = match Converter::new(src_file, command).convert() {
        Ok(content) => content,
        Err(err) => {
            tracing::debug!(file = file_name, error = %err, "failed to convert");
            return Ok(FileOutcome::Failed);
        }
    };

    let dst_path = config.dst_dir.join(format!("_{command}"));
    fs::write(&dst_path, content)
        .with_context(|| format!("could not write {}", dst_path.display()))?;
    tracing::debug!(file = file_name, dest = %dst_path.display(), "converted");
    Ok(FileOutcome::Converted)
}

#[cfg(test)]
#[path = "workflow_tests.rs"]
mod tests;
