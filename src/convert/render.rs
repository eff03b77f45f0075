//! Deterministic zsh `_arguments` script rendering.

use super::escape::{escape_description, escape_old, escape_short};
use super::model::CompletionOption;

/// Render a complete `#compdef` script for `command_name`.
pub(crate) fn render_completion(command_name: &str, options: &[CompletionOption]) -> String {
    let mut out = String::new();
    append_header(&mut out, command_name);
    append_option_clauses(&mut out, options);
    out
}

fn append_header(out: &mut String, command_name: &str) {
    out.push_str(&format!("#compdef {command_name}\n\n"));
    out.push_str("_arguments \\\n");
    // positions no option claims fall back to file paths
    out.push_str("         '*:file:_files' \\\n");
}

fn append_option_clauses(out: &mut String, options: &[CompletionOption]) {
    for (idx, option) in options.iter().enumerate() {
        out.push_str("\t\t");
        out.push_str(&option_clause(option));
        if idx + 1 < options.len() {
            out.push_str(" \\\n");
        }
    }
    out.push('\n');
}

/// Spellings in zsh form, ordered short, old, long.
pub(crate) fn merged_spellings(option: &CompletionOption) -> Vec<String> {
    let short = option
        .short_names
        .iter()
        .map(|name| format!("-{}", escape_short(name)));
    let old = option
        .old_names
        .iter()
        .map(|name| format!("-{}", escape_old(name)));
    let long = option.long_names.iter().map(|name| format!("--{name}"));
    short.chain(old).chain(long).collect()
}

fn option_clause(option: &CompletionOption) -> String {
    let spellings = merged_spellings(option);
    // never empty, CompletionOption::new rejects lines without spellings
    let mut clause = match spellings.as_slice() {
        [only] => format!("'{only}"),
        many => format!("{{{}}}'", many.join(",")),
    };
    if let Some(desc) = option.description().filter(|desc| !desc.is_empty()) {
        clause.push_str(&format!("[{}]", escape_description(desc)));
    }
    clause.push('\'');
    clause
}
