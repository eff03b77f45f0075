/// One completion rule extracted from a single `complete -c` line.
///
/// Spellings are kept raw; escaping for zsh happens at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionOption {
    pub(crate) short_names: Vec<String>,
    pub(crate) old_names: Vec<String>,
    pub(crate) long_names: Vec<String>,
    pub(crate) description: Option<String>,
    /// Originating line, kept for diagnostics only.
    pub(crate) source_line: String,
}

impl CompletionOption {
    /// Returns `None` when the line contributed no spelling at all.
    pub(crate) fn new(
        short_names: Vec<String>,
        old_names: Vec<String>,
        long_names: Vec<String>,
        description: Option<String>,
        source_line: &str,
    ) -> Option<Self> {
        if short_names.is_empty() && old_names.is_empty() && long_names.is_empty() {
            return None;
        }
        Some(Self {
            short_names,
            old_names,
            long_names,
            description,
            source_line: source_line.to_string(),
        })
    }

    pub fn short_names(&self) -> &[String] {
        &self.short_names
    }

    pub fn old_names(&self) -> &[String] {
        &self.old_names
    }

    pub fn long_names(&self) -> &[String] {
        &self.long_names
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn source_line(&self) -> &str {
        &self.source_line
    }
}
