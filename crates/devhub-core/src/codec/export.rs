//! Export file envelope and format selection

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{CodecError, CodecResult};

/// An encoded file ready to hand to a download mechanism
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportFile {
    pub file_name: String,
    pub mime_type: String,
    pub contents: String,
}

impl ExportFile {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            contents: contents.into(),
        }
    }
}

/// Flat-file interchange formats for the tool catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    /// Comma-delimited with a header row
    Csv,
    /// Numbered records with indented property lines
    Text,
}

impl FileFormat {
    /// Fixed download name for exports in this format
    pub fn file_name(&self) -> &'static str {
        match self {
            FileFormat::Csv => "devtools_backup.csv",
            FileFormat::Text => "devtools_list.txt",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            FileFormat::Csv => "text/csv;charset=utf-8",
            FileFormat::Text => "text/plain;charset=utf-8",
        }
    }

    /// Pick a format from an uploaded file's extension
    pub fn from_file_name(name: &str) -> CodecResult<Self> {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(FileFormat::Csv),
            "txt" | "text" => Ok(FileFormat::Text),
            _ => Err(CodecError::UnsupportedFormat(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_file_name() {
        assert_eq!(FileFormat::from_file_name("backup.CSV").unwrap(), FileFormat::Csv);
        assert_eq!(FileFormat::from_file_name("/tmp/list.txt").unwrap(), FileFormat::Text);
        assert_eq!(
            FileFormat::from_file_name("tools.xlsx"),
            Err(CodecError::UnsupportedFormat("tools.xlsx".to_string()))
        );
        assert!(FileFormat::from_file_name("README").is_err());
    }

    #[test]
    fn test_fixed_names() {
        assert_eq!(FileFormat::Csv.file_name(), "devtools_backup.csv");
        assert_eq!(FileFormat::Text.file_name(), "devtools_list.txt");
        assert!(FileFormat::Csv.mime_type().starts_with("text/csv"));
    }
}
