use crate::core::filter::FilterRules;
use crate::core::scan::leading_run;
use crate::domain::model::Preamble;

/// Splits `lines` into its leading comment-only run and the untouched rest.
///
/// `preamble.lines ++ rest == lines` always holds; a header that does not
/// start with a comment yields an empty preamble.
pub fn extract_preamble(lines: &[String], rules: &FilterRules) -> (Preamble, Vec<String>) {
    let split = leading_run(lines, |line| rules.is_comment(line));
    let preamble = Preamble {
        lines: lines[..split].to_vec(),
    };
    (preamble, lines[split..].to_vec())
}
