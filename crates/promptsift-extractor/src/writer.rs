//! Serialization of a prompt collection to the output format
//!
//! ```text
//! "<prompt_1>",\r\n"<prompt_2>",\r\n..."<prompt_N>"
//! ```
//!
//! Prompt text is written as-is between the quotes; nothing is escaped and no
//! separator follows the last entry.

use crate::error::ExtractorError;
use crate::types::PromptCollection;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Separator written after every prompt except the last
pub const SEPARATOR: &str = ",\r\n";

/// Write `prompts` to any writer
pub fn write_prompts<W: Write>(writer: &mut W, prompts: &PromptCollection) -> io::Result<()> {
    for (i, prompt) in prompts.iter().enumerate() {
        if i > 0 {
            writer.write_all(SEPARATOR.as_bytes())?;
        }
        writer.write_all(b"\"")?;
        writer.write_all(prompt.text().as_bytes())?;
        writer.write_all(b"\"")?;
    }
    Ok(())
}

/// Render `prompts` into an in-memory buffer
pub fn render_prompts(prompts: &PromptCollection) -> Vec<u8> {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_prompts(&mut buf, prompts);
    buf
}

/// Create or truncate `path` and write `prompts` to it
pub fn write_to_path(path: &Path, prompts: &PromptCollection) -> Result<(), ExtractorError> {
    let file = File::create(path).map_err(|e| ExtractorError::output(path, e))?;
    let mut writer = BufWriter::new(file);
    write_prompts(&mut writer, prompts).map_err(|e| ExtractorError::output(path, e))?;
    writer.flush().map_err(|e| ExtractorError::output(path, e))?;
    Ok(())
}
