use crate::core::scan::{leading_run, trailing_run};

/// Empty or whitespace-only.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Include-guard macro for a header name: `csbench.h` becomes `CSBENCH_H`.
pub fn guard_macro(header: &str) -> String {
    header
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Line predicates for the scaffolding removed from every fragment.
///
/// Scaffolding rules match any line containing the directive text, wherever
/// it sits in the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRules {
    comment_prefix: String,
    self_include: String,
    guard_open: [String; 2],
    guard_close: String,
}

impl FilterRules {
    pub fn new(header: &str, guard: &str, comment_prefix: impl Into<String>) -> Self {
        Self {
            comment_prefix: comment_prefix.into(),
            self_include: format!("#include \"{}\"", header),
            guard_open: [format!("#ifndef {}", guard), format!("#define {}", guard)],
            guard_close: format!("#endif // {}", guard),
        }
    }

    /// The prefix must sit at column zero.
    pub fn is_comment(&self, line: &str) -> bool {
        line.starts_with(&self.comment_prefix)
    }

    /// `#include "<header>"`
    pub fn is_self_include(&self, line: &str) -> bool {
        line.contains(&self.self_include)
    }

    /// `#ifndef <GUARD>` or `#define <GUARD>`
    pub fn is_guard_open(&self, line: &str) -> bool {
        self.guard_open.iter().any(|form| line.contains(form.as_str()))
    }

    /// `#endif // <GUARD>`
    pub fn is_guard_close(&self, line: &str) -> bool {
        line.contains(&self.guard_close)
    }

    fn is_scaffolding(&self, line: &str) -> bool {
        self.is_self_include(line) || self.is_guard_open(line) || self.is_guard_close(line)
    }
}

/// Reduces a fragment to its filtered core.
#[derive(Debug, Clone)]
pub struct ContentFilter {
    rules: FilterRules,
}

impl ContentFilter {
    pub fn new(rules: FilterRules) -> Self {
        Self { rules }
    }

    /// Repeats [`Self::filter_pass`] until it removes nothing, which makes the
    /// result a fixed point: filtering it again is a no-op.
    pub fn filter(&self, lines: &[String]) -> Vec<String> {
        let mut current = self.filter_pass(lines);
        loop {
            let next = self.filter_pass(&current);
            // passes only remove lines, so equal length means unchanged
            if next.len() == current.len() {
                return current;
            }
            current = next;
        }
    }

    /// One ordered sweep: banner, scaffolding, then blank edges.
    pub fn filter_pass(&self, lines: &[String]) -> Vec<String> {
        let banner = leading_run(lines, |line| self.rules.is_comment(line));
        let kept: Vec<String> = lines[banner..]
            .iter()
            .filter(|line| !self.rules.is_scaffolding(line))
            .cloned()
            .collect();
        trim_blank_edges(kept)
    }
}

/// Drops leading and trailing blank lines; empty input stays empty.
pub fn trim_blank_edges(mut lines: Vec<String>) -> Vec<String> {
    let trailing = trailing_run(&lines, is_blank);
    lines.truncate(lines.len() - trailing);
    let leading = leading_run(&lines, is_blank);
    lines.drain(..leading);
    lines
}
