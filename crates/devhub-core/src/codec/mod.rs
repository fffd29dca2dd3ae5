//! Flat-file interchange for the tool catalog
//!
//! Two formats are supported in both directions:
//! - CSV with a header row (`devtools_backup.csv`)
//! - A numbered plain-text list (`devtools_list.txt`), whose decoder also
//!   accepts one bare name per line
//!
//! Encoders take tools and produce an [`ExportFile`]; decoders produce
//! [`ToolDraft`](crate::types::ToolDraft)s and reject a malformed file as a
//! whole.

mod error;
mod export;
pub mod csv;
pub mod text;

pub use error::{CodecError, CodecResult};
pub use export::{ExportFile, FileFormat};
pub use csv::{decode_csv, encode_csv, export_csv};
pub use text::{decode_text, encode_text, export_text};

use crate::types::{Tool, ToolDraft};

/// Encode tools into an export file of the given format
pub fn export(tools: &[Tool], format: FileFormat) -> CodecResult<ExportFile> {
    match format {
        FileFormat::Csv => export_csv(tools),
        FileFormat::Text => export_text(tools),
    }
}

/// Decode file contents of the given format into drafts
pub fn decode(text: &str, format: FileFormat) -> CodecResult<Vec<ToolDraft>> {
    match format {
        FileFormat::Csv => decode_csv(text),
        FileFormat::Text => decode_text(text),
    }
}
