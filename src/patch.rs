use similar::TextDiff;
use std::fmt;
use tracing::{debug, warn};

/// A literal search/replace rule applied to every occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Replacement {
    /// Exact text to search for
    pub from: &'static str,
    /// Text written in its place
    pub to: &'static str,
    /// Short form used in the confirmation message
    pub label: &'static str,
}

impl Replacement {
    pub const fn new(from: &'static str, to: &'static str, label: &'static str) -> Self {
        Self { from, to, label }
    }

    /// Replace all occurrences of `from` in `text`, returning the new text and the match count
    pub fn apply(&self, text: &str) -> (String, usize) {
        if self.from.is_empty() {
            return (text.to_string(), 0);
        }
        let count = text.matches(self.from).count();
        if count == 0 {
            return (text.to_string(), 0);
        }
        (text.replace(self.from, self.to), count)
    }
}

impl fmt::Display for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// Result of running a rule set over a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    /// Text after every rule ran
    pub content: String,
    /// Occurrences replaced, one entry per rule in order
    pub counts: Vec<usize>,
}

impl PatchOutcome {
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn changed(&self) -> bool {
        self.total() > 0
    }
}

/// Apply `rules` in order, each one to the output of the previous
pub fn apply_all(text: &str, rules: &[Replacement]) -> PatchOutcome {
    let mut content = text.to_string();
    let mut counts = Vec::with_capacity(rules.len());

    for (i, rule) in rules.iter().enumerate() {
        let (next, count) = rule.apply(&content);
        if count == 0 {
            warn!("Rule {} matched nothing: {}", i + 1, rule.from);
        } else {
            debug!("Rule {} replaced {} occurrence(s) of {}", i + 1, count, rule.from);
        }
        content = next;
        counts.push(count);
    }

    PatchOutcome { content, counts }
}

/// Unified diff between the original and patched text
pub fn diff_preview(old: &str, new: &str, path: &str) -> String {
    let diff = TextDiff::from_lines(old, new);
    let mut unified = diff.unified_diff();
    unified.context_radius(2).header(path, path);
    unified.to_string()
}
