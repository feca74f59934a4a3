use crate::domain::model::AssembledOutput;
use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// Joins lines into UTF-8 text with `\n`; the last line is terminated only
/// when `final_newline` is set.
pub fn render(lines: &[String], final_newline: bool) -> String {
    let mut text = lines.join("\n");
    if final_newline && !lines.is_empty() {
        text.push('\n');
    }
    text
}

pub fn write<S: Storage>(storage: &S, output: &AssembledOutput, destination: &str) -> Result<()> {
    let text = render(&output.lines, output.final_newline);
    tracing::debug!("Writing {} bytes to {}", text.len(), destination);
    storage.write_file(destination, text.as_bytes())
}
