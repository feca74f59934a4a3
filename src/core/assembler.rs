use crate::domain::model::{FilteredBlock, Preamble};

/// Blank line placed between consecutive blocks.
pub const SEPARATOR: &str = "";

/// Preamble, then every non-empty block in order, one separator between
/// neighbours and none after the last.
pub fn assemble(preamble: &Preamble, blocks: &[FilteredBlock]) -> Vec<String> {
    let body_len: usize = blocks.iter().map(|b| b.lines.len() + 1).sum();
    let mut output = Vec::with_capacity(preamble.lines.len() + body_len);
    output.extend(preamble.lines.iter().cloned());

    let mut first = true;
    for block in blocks.iter().filter(|b| !b.lines.is_empty()) {
        if !first {
            output.push(SEPARATOR.to_string());
        }
        output.extend(block.lines.iter().cloned());
        first = false;
    }

    output
}

/// Whether the assembled text ends with `\n`: taken from the last block that
/// contributed lines, or `None` when every block is empty.
pub fn final_newline(blocks: &[FilteredBlock]) -> Option<bool> {
    blocks
        .iter()
        .rev()
        .find(|b| !b.lines.is_empty())
        .map(|b| b.final_newline)
}
