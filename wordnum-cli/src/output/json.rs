//! JSON output formatter

use std::io::Write;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use wordnum_core::Output;

use super::OutputFormatter;

/// Collects documents and writes them as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<DocumentData>,
}

/// One converted document
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// File path, or "-" for stdin
    pub source: String,
    pub language: String,
    pub text: String,
    pub replacements: Vec<ReplacementData>,
}

/// One replaced number
#[derive(Debug, Serialize, Deserialize)]
pub struct ReplacementData {
    /// Byte offset in the original text
    pub offset: usize,
    /// Character offset in the original text
    pub char_offset: usize,
    pub original: String,
    pub rendered: String,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, source: &str, output: &Output) -> Result<()> {
        let replacements = output
            .replacements
            .iter()
            .map(|r| ReplacementData {
                offset: r.offset,
                char_offset: r.char_offset,
                original: r.original.clone(),
                rendered: r.rendered.clone(),
            })
            .collect();

        self.documents.push(DocumentData {
            source: source.to_string(),
            language: output.metadata.language.clone(),
            text: output.text.clone(),
            replacements,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordnum_core::{Input, NumberProcessor};

    #[test]
    fn test_json_documents() {
        let processor = NumberProcessor::new().unwrap();
        let output = processor
            .process(Input::from_text("Было двадцать пять коров"))
            .unwrap();

        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, false);
            formatter.format_document("-", &output).unwrap();
            formatter.finish().unwrap();
        }

        let documents: Vec<DocumentData> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(documents.len(), 1);

        let document = &documents[0];
        assert_eq!(document.source, "-");
        assert_eq!(document.language, "ru");
        assert_eq!(document.text, "Было 25 коров");
        assert_eq!(document.replacements.len(), 1);

        let replacement = &document.replacements[0];
        assert_eq!(replacement.offset, "Было ".len());
        assert_eq!(replacement.char_offset, 5);
        assert_eq!(replacement.original, "двадцать пять");
        assert_eq!(replacement.rendered, "25");
    }

    #[test]
    fn test_empty_array() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, true);
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap().trim(), "[]");
    }
}
