use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

mod cli;
mod paths;
mod workflow;

use cli::Args;
use paths::DataDirs;
use workflow::{CommandFilter, RunConfig};

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = resolve_config(args)?;
    let summary = workflow::run(&config)?;
    if config.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary.completion_line());
    }
    Ok(())
}

/// `RUST_LOG` wins; otherwise `--verbose` switches this crate to debug.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "info" };
        EnvFilter::new(format!("zsh_manpage_completion_generator={level}"))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn resolve_config(args: Args) -> Result<RunConfig> {
    let (src_dir, dst_dir) = match (args.src, args.dst) {
        (Some(src), Some(dst)) => (src, dst),
        (src, dst) => {
            let data_dirs = DataDirs::resolve()?;
            tracing::debug!(data_dir = %data_dirs.root().display(), "resolved default folders");
            (
                src.unwrap_or_else(|| data_dirs.fish_generated_completions()),
                dst.unwrap_or_else(|| data_dirs.zsh_generated_completions()),
            )
        }
    };
    Ok(RunConfig {
        src_dir,
        dst_dir,
        clean: args.clean,
        json: args.json,
        filter: CommandFilter::new(args.excludes),
    })
}
