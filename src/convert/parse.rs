//! Extraction of option declarations from fish `complete -c` lines.
//!
//! Lines are only loosely structured (fish's man page parser also emits
//! argument lists and conditions), so each spelling form is picked up by its
//! own independent scan instead of a single grammar.

use super::model::CompletionOption;
use super::ParseError;
use regex::Regex;
use std::sync::OnceLock;

const DECLARATION_PREFIX: &str = "complete -c";

struct SpellingScan {
    regex: Regex,
    /// Drops captures that matched the character class but are not real names.
    exclude: Option<fn(&str) -> bool>,
}

impl SpellingScan {
    fn new(pattern: &str, exclude: Option<fn(&str) -> bool>) -> Self {
        let regex = Regex::new(pattern).expect("regex for option spellings");
        Self { regex, exclude }
    }

    fn collect(&self, text: &str) -> Vec<String> {
        self.regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1))
            .map(|m| m.as_str())
            .filter(|name| !self.is_excluded(name))
            .map(str::to_string)
            .collect()
    }

    fn is_excluded(&self, name: &str) -> bool {
        self.exclude.is_some_and(|exclude| exclude(name))
    }
}

struct DeclarationPatterns {
    short: SpellingScan,
    old: SpellingScan,
    long: SpellingScan,
    description: Regex,
}

impl DeclarationPatterns {
    fn compile() -> Self {
        Self {
            // `-?` and `-#` are real short options
            short: SpellingScan::new(r" -s '?([A-Za-z0-9_#?]+)'?", None),
            // `-??` style old options, and `-print+` style ones
            old: SpellingScan::new(r" -o '?([A-Za-z0-9_+?]+)'?", None),
            long: SpellingScan::new(r" -l '?([A-Za-z0-9_-]+)'?", Some(has_hyphen_run)),
            description: Regex::new(r" -d '(.*)'$").expect("regex for description clause"),
        }
    }
}

fn patterns() -> &'static DeclarationPatterns {
    static PATTERNS: OnceLock<DeclarationPatterns> = OnceLock::new();
    PATTERNS.get_or_init(DeclarationPatterns::compile)
}

/// Artifacts like `--- foo ---` in man pages get picked up as long names.
fn has_hyphen_run(name: &str) -> bool {
    name.contains("---")
}

/// Extract every declared option from a fish completion script.
pub(crate) fn parse_declarations(text: &str) -> Result<Vec<CompletionOption>, ParseError> {
    let declarations = text
        .lines()
        .filter(|line| line.starts_with(DECLARATION_PREFIX))
        .collect::<Vec<_>>();
    if declarations.is_empty() {
        return Err(ParseError::MissingDeclarations);
    }

    let patterns = patterns();
    let mut options = Vec::new();
    for line in &declarations {
        match parse_declaration(patterns, line) {
            Some(option) => options.push(option),
            None => tracing::trace!(line, "declaration without option spellings skipped"),
        }
    }
    if options.is_empty() {
        return Err(ParseError::NoOptionsExtracted);
    }

    tracing::debug!(
        declarations = declarations.len(),
        options = options.len(),
        "parsed completion declarations"
    );
    Ok(options)
}

fn parse_declaration(patterns: &DeclarationPatterns, line: &str) -> Option<CompletionOption> {
    // the description may itself contain ` -s ` and friends
    let options_only = patterns.description.replace(line, "");

    let short_names = patterns.short.collect(&options_only);
    let old_names = patterns.old.collect(&options_only);
    let long_names = patterns.long.collect(&options_only);

    let description = patterns
        .description
        .captures(line)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string());

    CompletionOption::new(short_names, old_names, long_names, description, line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(line: &str) -> CompletionOption {
        let mut options = parse_declarations(line).expect("parse declaration");
        assert_eq!(options.len(), 1);
        options.remove(0)
    }

    #[test]
    fn extracts_short_and_long_with_description() {
        let option = single("complete -c foo -s h -l help -d 'show help'");
        assert_eq!(option.short_names(), ["h"]);
        assert_eq!(option.long_names(), ["help"]);
        assert!(option.old_names().is_empty());
        assert_eq!(option.description(), Some("show help"));
    }

    #[test]
    fn extracts_quoted_and_special_names() {
        let option = single("complete -c foo -s '?' -s '#' -o '??' -l dry-run");
        assert_eq!(option.short_names(), ["?", "#"]);
        assert_eq!(option.old_names(), ["??"]);
        assert_eq!(option.long_names(), ["dry-run"]);
        assert_eq!(option.description(), None);
    }

    #[test]
    fn extracts_old_style_names() {
        let option = single("complete -c find -o print0 -o newer+ -d 'Print'");
        assert_eq!(option.old_names(), ["print0", "newer+"]);
        assert!(option.short_names().is_empty());
        assert!(option.long_names().is_empty());
    }

    #[test]
    fn ignores_flags_mentioned_inside_description() {
        let option = single("complete -c foo -l all -d 'same as -s x -l everything'");
        assert_eq!(option.long_names(), ["all"]);
        assert!(option.short_names().is_empty());
        assert_eq!(option.description(), Some("same as -s x -l everything"));
    }

    #[test]
    fn keeps_description_text_verbatim() {
        let option = single(r"complete -c kill -s s -d 'send \'HUP\'  [default]'");
        assert_eq!(option.description(), Some(r"send \'HUP\'  [default]"));
    }

    #[test]
    fn drops_long_names_with_hyphen_runs() {
        let option = single("complete -c foo -l ---- -l foo---bar -l ok--name");
        assert_eq!(option.long_names(), ["ok--name"]);
    }

    #[test]
    fn skips_declarations_without_spellings() {
        let text = "complete -c foo -a 'start stop'\ncomplete -c foo -s v\n";
        let options = parse_declarations(text).expect("parse");
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].short_names(), ["v"]);
        assert_eq!(options[0].source_line(), "complete -c foo -s v");
    }

    #[test]
    fn only_lines_starting_with_marker_count() {
        let text = "# complete -c foo -s x\n  complete -c foo -s y\ncomplete -c foo -s z\r\n";
        let options = parse_declarations(text).expect("parse");
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].short_names(), ["z"]);
    }

    #[test]
    fn preserves_declaration_order() {
        let text = "complete -c foo -l zeta\ncomplete -c foo -l alpha\n";
        let options = parse_declarations(text).expect("parse");
        let names = options
            .iter()
            .map(|option| option.long_names()[0].as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, ["zeta", "alpha"]);
    }

    #[test]
    fn fails_without_declarations() {
        let err = parse_declarations("# nothing here\nfunction __fish_foo\nend\n")
            .expect_err("no declarations");
        assert!(matches!(err, ParseError::MissingDeclarations));
        assert!(matches!(
            parse_declarations("").expect_err("empty input"),
            ParseError::MissingDeclarations
        ));
    }

    #[test]
    fn fails_when_no_declaration_yields_an_option() {
        let err = parse_declarations("complete -c foo -f\ncomplete -c foo -a '(ls)'\n")
            .expect_err("no options");
        assert!(matches!(err, ParseError::NoOptionsExtracted));
    }
}
