//! Structured plain-text encoding and decoding
//!
//! Export layout:
//!
//! ```text
//! DEVTOOLS HUB - LISTA DE FERRAMENTAS
//! =====================================
//!
//! 1. Docker
//!    Categoria: DevOps > Containers
//!    Link: https://docker.com
//!    Descrição: Container platform
//!    Tags: containers, devops
//!
//! ```
//!
//! Import also accepts a bare one-name-per-line list.

use crate::types::{Tool, ToolDraft};

use super::error::{CodecError, CodecResult};
use super::export::{ExportFile, FileFormat};

/// First line of an exported list
pub const BANNER: &str = "DEVTOOLS HUB - LISTA DE FERRAMENTAS";

/// Category given to records imported without one
pub const IMPORTED_CATEGORY: &str = "Importado";

const BANNER_KEYWORD: &str = "DEVTOOLS";
const RULE: &str = "=====================================";
const INDENT: &str = "   ";

const CATEGORY_PREFIX: &str = "Categoria:";
const LINK_PREFIX: &str = "Link:";
const DESCRIPTION_PREFIX: &str = "Descrição:";
const TAGS_PREFIX: &str = "Tags:";

/// Description synthesized for records imported without one
pub fn imported_description(name: &str) -> String {
    format!("Ferramenta importada: {}", name)
}

/// Encode tools into the numbered plain-text list
pub fn encode_text(tools: &[Tool]) -> String {
    let mut out = String::new();
    out.push_str(BANNER);
    out.push('\n');
    out.push_str(RULE);
    out.push_str("\n\n");

    for (index, tool) in tools.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", index + 1, tool.name));

        out.push_str(&format!("{}{} {}", INDENT, CATEGORY_PREFIX, tool.category));
        if !tool.subcategory.is_empty() {
            out.push_str(&format!(" > {}", tool.subcategory));
        }
        out.push('\n');

        out.push_str(&format!("{}{} {}\n", INDENT, LINK_PREFIX, tool.link));
        out.push_str(&format!("{}{} {}\n", INDENT, DESCRIPTION_PREFIX, tool.description));
        if !tool.tags.is_empty() {
            out.push_str(&format!("{}{} {}\n", INDENT, TAGS_PREFIX, tool.tags.join(", ")));
        }
        out.push('\n');
    }

    out
}

/// Encode tools into the plain-text list file
pub fn export_text(tools: &[Tool]) -> CodecResult<ExportFile> {
    if tools.is_empty() {
        return Err(CodecError::NothingToExport);
    }
    let format = FileFormat::Text;
    Ok(ExportFile::new(format.file_name(), format.mime_type(), encode_text(tools)))
}

/// Property keys recognized inside a numbered record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Categoria,
    Link,
    Descricao,
    Tags,
}

/// Classification of one trimmed, non-blank input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// Banner or separator rule
    Noise,
    /// `N. name`; carries the name after the ordinal prefix
    Ordinal(&'a str),
    /// `Key: value`; carries the trimmed value
    Property(Property, &'a str),
    /// Anything else, taken as a bare tool name
    Bare(&'a str),
}

impl<'a> Line<'a> {
    /// Classify a line; the input must already be trimmed
    pub fn classify(line: &'a str) -> Self {
        if line.contains("===") || line.starts_with(BANNER_KEYWORD) {
            return Line::Noise;
        }
        if let Some(name) = strip_ordinal(line) {
            return Line::Ordinal(name);
        }

        let properties = [
            (CATEGORY_PREFIX, Property::Categoria),
            (LINK_PREFIX, Property::Link),
            (DESCRIPTION_PREFIX, Property::Descricao),
            (TAGS_PREFIX, Property::Tags),
        ];
        for (prefix, property) in properties {
            if let Some(value) = line.strip_prefix(prefix) {
                return Line::Property(property, value.trim());
            }
        }

        Line::Bare(line)
    }
}

/// `^\d+\.` followed by the name
fn strip_ordinal(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix('.').map(str::trim)
}

enum State {
    Idle,
    Accumulating(ToolDraft),
}

/// Line-at-a-time decoder for the plain-text list
///
/// States are `Idle` and `Accumulating`. A numbered line starts a record;
/// property lines fill the record being accumulated. A bare line becomes a
/// minimal record of its own, but only when no named record is open: a
/// bare line between property lines of a named record is dropped.
struct TextDecoder {
    state: State,
    drafts: Vec<ToolDraft>,
}

impl TextDecoder {
    fn new() -> Self {
        Self {
            state: State::Idle,
            drafts: Vec::new(),
        }
    }

    fn feed(&mut self, line: Line<'_>) {
        match line {
            Line::Noise => {}
            Line::Ordinal(name) => {
                self.flush();
                self.state = State::Accumulating(ToolDraft {
                    name: name.to_string(),
                    category: IMPORTED_CATEGORY.to_string(),
                    ..Default::default()
                });
            }
            Line::Property(property, value) => {
                if let State::Accumulating(draft) = &mut self.state {
                    apply_property(draft, property, value);
                }
            }
            Line::Bare(name) => {
                let open_named = matches!(&self.state, State::Accumulating(d) if !d.name.is_empty());
                if !open_named {
                    self.drafts.push(ToolDraft {
                        name: name.to_string(),
                        category: IMPORTED_CATEGORY.to_string(),
                        description: imported_description(name),
                        ..Default::default()
                    });
                }
            }
        }
    }

    fn flush(&mut self) {
        if let State::Accumulating(draft) = std::mem::replace(&mut self.state, State::Idle) {
            if !draft.name.is_empty() {
                self.drafts.push(draft);
            }
        }
    }

    fn finish(mut self) -> Vec<ToolDraft> {
        self.flush();
        self.drafts
    }
}

fn apply_property(draft: &mut ToolDraft, property: Property, value: &str) {
    match property {
        Property::Categoria => {
            let mut parts = value.splitn(2, '>');
            draft.category = parts.next().unwrap_or_default().trim().to_string();
            if let Some(sub) = parts.next() {
                draft.subcategory = sub.trim().to_string();
            }
        }
        Property::Link => draft.link = value.to_string(),
        Property::Descricao => draft.description = value.to_string(),
        Property::Tags => {
            draft.tags = value
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect();
        }
    }
}

/// Decode the plain-text list (numbered or bare) into drafts
///
/// Records that end up without a category or description get the import
/// defaults. An input yielding no records is an error.
pub fn decode_text(text: &str) -> CodecResult<Vec<ToolDraft>> {
    let mut decoder = TextDecoder::new();
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        decoder.feed(Line::classify(line));
    }

    let mut drafts = decoder.finish();
    if drafts.is_empty() {
        return Err(CodecError::NoToolsFound);
    }

    for draft in &mut drafts {
        if draft.category.is_empty() {
            draft.category = IMPORTED_CATEGORY.to_string();
        }
        if draft.description.is_empty() {
            draft.description = imported_description(&draft.name);
        }
    }

    Ok(drafts)
}
