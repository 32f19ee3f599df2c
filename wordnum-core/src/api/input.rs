//! Document sources for [`NumberProcessor::process`](crate::api::NumberProcessor::process)

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::api::Error;

/// A document to substitute numbers in
///
/// Files and streams are read lazily, when the processor takes the input.
pub enum Input {
    /// Text already in memory
    Text(String),
    /// A UTF-8 file
    File(PathBuf),
    /// Any byte stream, read to the end
    Reader(Box<dyn Read + Send>),
}

impl Input {
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    pub fn from_reader(reader: impl Read + Send + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Standard input of the current process
    pub fn stdin() -> Self {
        Self::from_reader(io::stdin())
    }

    /// Short name of the source for logs
    pub fn label(&self) -> String {
        match self {
            Input::Text(text) => format!("<{} bytes of text>", text.len()),
            Input::File(path) => path.display().to_string(),
            Input::Reader(_) => "-".to_string(),
        }
    }

    pub(crate) fn into_text(self) -> Result<String, Error> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => {
                let bytes = fs::read(&path).map_err(|e| {
                    Error::Infrastructure(format!("Failed to read {}: {e}", path.display()))
                })?;
                utf8(bytes, &path.display().to_string())
            }
            Input::Reader(mut reader) => {
                let mut bytes = Vec::new();
                reader
                    .read_to_end(&mut bytes)
                    .map_err(|e| Error::Infrastructure(format!("Failed to read stream: {e}")))?;
                utf8(bytes, "stream")
            }
        }
    }
}

fn utf8(bytes: Vec<u8>, origin: &str) -> Result<String, Error> {
    String::from_utf8(bytes)
        .map_err(|e| Error::Infrastructure(format!("{origin} is not valid UTF-8: {e}")))
}
