//! Plain text output formatter

use std::io::{self, Write};

use anyhow::Result;
use wordnum_core::Output;

use super::OutputFormatter;

/// Writes the converted text unchanged
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, _source: &str, output: &Output) -> Result<()> {
        self.writer.write_all(output.text.as_bytes())?;
        if !output.text.is_empty() && !output.text.ends_with('\n') {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
