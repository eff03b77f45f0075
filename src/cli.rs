//! CLI argument parsing for the completion converter.
//!
//! The CLI only wires directories and switches into the batch run; all
//! conversion policy lives in the library.
use clap::Parser;
use std::path::PathBuf;

/// Commands never worth completing from a man page.
pub const DEFAULT_EXCLUDED_COMMANDS: &[&str] = &["[", "]", "sudo"];

#[derive(Parser, Debug)]
#[command(
    name = "zsh-manpage-completion-generator",
    version,
    about = "Convert fish man page completions into zsh completions",
    after_help = "Defaults:\n  --src  $XDG_DATA_HOME/fish/generated_completions\n  --dst  $XDG_DATA_HOME/zsh/generated_man_completions\n  ($XDG_DATA_HOME falls back to ~/.local/share)\n\nExamples:\n  zsh-manpage-completion-generator\n  zsh-manpage-completion-generator --clean --verbose\n  zsh-manpage-completion-generator --src ./fish --dst ./zsh --exclude git"
)]
pub struct Args {
    /// fish generated_completions source folder
    #[arg(long, value_name = "DIR")]
    pub src: Option<PathBuf>,

    /// zsh completions destination folder
    #[arg(long, value_name = "DIR")]
    pub dst: Option<PathBuf>,

    /// CAUTION: remove the destination folder before converting
    #[arg(long)]
    pub clean: bool,

    /// Log every skipped, converted and failed file
    #[arg(long)]
    pub verbose: bool,

    /// Additional command to skip (repeatable)
    #[arg(long = "exclude", value_name = "CMD")]
    pub excludes: Vec<String>,

    /// Emit the run summary as JSON
    #[arg(long)]
    pub json: bool,
}
