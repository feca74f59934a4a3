use serde::Serialize;

/// A named input unit, held as lines without their `\n` terminators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub name: String,
    pub lines: Vec<String>,
    /// False when the source's last line has no `\n`.
    pub final_newline: bool,
}

impl Fragment {
    pub fn new(name: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            name: name.into(),
            lines,
            final_newline: true,
        }
    }

    /// Splits on `\n` only, so a trailing `\r` stays with its line.
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        let lines = text
            .split_inclusive('\n')
            .map(|line| line.strip_suffix('\n').unwrap_or(line).to_string())
            .collect();
        Self {
            final_newline: text.is_empty() || text.ends_with('\n'),
            ..Self::new(name, lines)
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Leading comment block of the header, copied verbatim to the top of the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preamble {
    pub lines: Vec<String>,
}

/// A fragment after scaffolding and blank-edge removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredBlock {
    pub name: String,
    pub lines: Vec<String>,
    /// False only when the last kept line is the source's unterminated last line.
    pub final_newline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FragmentStats {
    pub name: String,
    pub lines_read: usize,
    pub lines_kept: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AmalgamReport {
    pub preamble_lines: usize,
    pub fragments: Vec<FragmentStats>,
    pub output_lines: usize,
}

#[derive(Debug, Clone)]
pub struct AssembledOutput {
    pub lines: Vec<String>,
    pub final_newline: bool,
    pub report: AmalgamReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_keeps_blank_and_unterminated_lines() {
        let fragment = Fragment::from_text("a.c", "int a;\n\nint b;");
        assert_eq!(fragment.lines, vec!["int a;", "", "int b;"]);
        assert!(!fragment.final_newline);
    }

    #[test]
    fn test_from_text_terminated() {
        let fragment = Fragment::from_text("a.c", "int a;\n");
        assert_eq!(fragment.lines, vec!["int a;"]);
        assert!(fragment.final_newline);
    }

    #[test]
    fn test_from_text_keeps_carriage_returns() {
        let fragment = Fragment::from_text("a.c", "x;\r\ny;\r\n");
        assert_eq!(fragment.lines, vec!["x;\r", "y;\r"]);
    }

    #[test]
    fn test_from_text_empty() {
        let fragment = Fragment::from_text("a.c", "");
        assert!(fragment.is_empty());
        assert!(fragment.final_newline);
    }
}
