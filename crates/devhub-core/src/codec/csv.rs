//! Delimited (CSV) encoding and decoding of the tool catalog
//!
//! Columns: `name,category,subcategory,link,description,tags`. Tags are
//! flattened into one field joined by `;`.

use std::borrow::Cow;

use crate::types::{Tool, ToolDraft};

use super::error::{CodecError, CodecResult};
use super::export::{ExportFile, FileFormat};

/// Header row written on export, in column order
pub const CSV_HEADERS: [&str; 6] = ["name", "category", "subcategory", "link", "description", "tags"];

/// Columns an imported header must contain
pub const REQUIRED_COLUMNS: [&str; 4] = ["name", "category", "link", "description"];

/// Name given to imported rows with an empty name
pub const DEFAULT_NAME: &str = "Sem nome";

/// Category given to imported rows with an empty category
pub const DEFAULT_CATEGORY: &str = "Sem categoria";

const DELIMITER: char = ',';
const TAG_SEPARATOR: char = ';';

/// Quote a field when it contains the delimiter, a quote or a line break
pub fn escape_field(value: &str) -> Cow<'_, str> {
    if value.contains(|c: char| matches!(c, DELIMITER | '"' | '\n' | '\r')) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Encode tools as CSV text, header first, one `\n`-terminated row per tool
pub fn encode_csv(tools: &[Tool]) -> String {
    let mut out = CSV_HEADERS.join(",");
    out.push('\n');

    for tool in tools {
        let tags = tool.tags.join(&TAG_SEPARATOR.to_string());
        let row = [
            escape_field(&tool.name),
            escape_field(&tool.category),
            escape_field(&tool.subcategory),
            escape_field(&tool.link),
            escape_field(&tool.description),
            escape_field(&tags),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

/// Encode tools into the CSV backup file
pub fn export_csv(tools: &[Tool]) -> CodecResult<ExportFile> {
    if tools.is_empty() {
        return Err(CodecError::NothingToExport);
    }
    let format = FileFormat::Csv;
    Ok(ExportFile::new(format.file_name(), format.mime_type(), encode_csv(tools)))
}

/// Decode CSV text into drafts
///
/// Blank lines are skipped. The first remaining line is the header and
/// must name every column in [`REQUIRED_COLUMNS`]; data rows are matched to
/// it by position. Quoted fields may contain delimiters, quotes (doubled)
/// and line breaks.
pub fn decode_csv(text: &str) -> CodecResult<Vec<ToolDraft>> {
    let records = split_records(text);
    if records.len() < 2 {
        return Err(CodecError::EmptyFile);
    }

    let headers = &records[0];
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !headers.iter().any(|h| h.as_str() == **required))
        .map(|required| required.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(CodecError::MissingColumns(missing));
    }

    let drafts = records[1..]
        .iter()
        .map(|row| {
            let column = |name: &str| column_value(headers, row, name).to_string();
            ToolDraft {
                name: non_empty_or(column("name"), DEFAULT_NAME),
                category: non_empty_or(column("category"), DEFAULT_CATEGORY),
                subcategory: column("subcategory"),
                link: column("link"),
                description: column("description"),
                tags: split_tags(&column("tags")),
            }
        })
        .collect();

    Ok(drafts)
}

/// Value of a named column in a row; missing columns and short rows give ""
fn column_value<'a>(headers: &[String], row: &'a [String], name: &str) -> &'a str {
    headers
        .iter()
        .position(|h| h == name)
        .and_then(|i| row.get(i))
        .map(String::as_str)
        .unwrap_or("")
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

fn split_tags(value: &str) -> Vec<String> {
    value
        .split(TAG_SEPARATOR)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split text into records of fields, skipping blank lines
///
/// Unquoted fields are trimmed; quoted fields keep their content verbatim.
fn split_records(text: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if !quoted && field.trim().is_empty() => {
                field.clear();
                quoted = true;
                in_quotes = true;
            }
            DELIMITER => record.push(finish_field(&mut field, &mut quoted)),
            '\n' => {
                record.push(finish_field(&mut field, &mut quoted));
                push_record(&mut records, std::mem::take(&mut record));
            }
            '\r' => {}
            _ if quoted => {
                if !c.is_whitespace() {
                    field.push(c);
                }
            }
            _ => field.push(c),
        }
    }

    if quoted || !field.is_empty() || !record.is_empty() {
        record.push(finish_field(&mut field, &mut quoted));
        push_record(&mut records, record);
    }

    records
}

fn finish_field(field: &mut String, quoted: &mut bool) -> String {
    let value = std::mem::take(field);
    if std::mem::replace(quoted, false) {
        value
    } else {
        value.trim().to_string()
    }
}

fn push_record(records: &mut Vec<Vec<String>>, record: Vec<String>) {
    let blank = record.len() == 1 && record[0].is_empty();
    if !blank {
        records.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool(name: &str, category: &str) -> Tool {
        Tool {
            id: format!("tool_{}", name.to_lowercase()),
            name: name.to_string(),
            category: category.to_string(),
            subcategory: String::new(),
            link: String::new(),
            description: String::new(),
            tags: Vec::new(),
            created_by: "user_1".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            last_updated_by: "user_1".to_string(),
            last_updated_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
        assert_eq!(escape_field("a;b"), "a;b");
    }

    #[test]
    fn test_encode_csv() {
        let mut docker = tool("Docker", "DevOps");
        docker.subcategory = "Containers".to_string();
        docker.link = "https://docker.com".to_string();
        docker.description = "Build, ship, run".to_string();
        docker.tags = vec!["containers".to_string(), "devops".to_string()];

        let csv = encode_csv(&[docker]);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("name,category,subcategory,link,description,tags"));
        assert_eq!(
            lines.next(),
            Some("Docker,DevOps,Containers,https://docker.com,\"Build, ship, run\",containers;devops")
        );
        assert_eq!(lines.next(), None);
        assert!(csv.ends_with('\n'));
    }

    #[test]
    fn test_decode_single_row() {
        let drafts = decode_csv("name,category,link,description\nPostman,API Testing,https://postman.com,HTTP client\n").unwrap();
        assert_eq!(
            drafts,
            vec![ToolDraft {
                name: "Postman".to_string(),
                category: "API Testing".to_string(),
                subcategory: String::new(),
                link: "https://postman.com".to_string(),
                description: "HTTP client".to_string(),
                tags: vec![],
            }]
        );
    }

    #[test]
    fn test_decode_rejects_header_only_and_empty() {
        assert_eq!(decode_csv(""), Err(CodecError::EmptyFile));
        assert_eq!(decode_csv("\n  \n"), Err(CodecError::EmptyFile));
        assert_eq!(decode_csv("name,category,link,description\n"), Err(CodecError::EmptyFile));
    }

    #[test]
    fn test_decode_rejects_missing_columns() {
        let result = decode_csv("name,category,url\nPostman,API,https://postman.com\n");
        assert_eq!(
            result,
            Err(CodecError::MissingColumns(vec!["link".to_string(), "description".to_string()]))
        );
    }

    #[test]
    fn test_decode_skips_blank_lines_and_trims() {
        let text = "\n name , category ,link,description,tags\n\n  jq , CLI ,https://jqlang.org, JSON processor , json ; ; cli \n\n";
        let drafts = decode_csv(text).unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].name, "jq");
        assert_eq!(drafts[0].category, "CLI");
        assert_eq!(drafts[0].description, "JSON processor");
        assert_eq!(drafts[0].tags, vec!["json", "cli"]);
    }

    #[test]
    fn test_decode_column_order_follows_header() {
        let text = "description,link,category,name\nHTTP client,https://postman.com,API Testing,Postman\n";
        let drafts = decode_csv(text).unwrap();
        assert_eq!(drafts[0].name, "Postman");
        assert_eq!(drafts[0].link, "https://postman.com");
    }

    #[test]
    fn test_decode_short_row_and_defaults() {
        let text = "name,category,subcategory,link,description,tags\n,,Shells\n";
        let drafts = decode_csv(text).unwrap();
        assert_eq!(drafts[0].name, DEFAULT_NAME);
        assert_eq!(drafts[0].category, DEFAULT_CATEGORY);
        assert_eq!(drafts[0].subcategory, "Shells");
        assert!(drafts[0].link.is_empty());
        assert!(drafts[0].tags.is_empty());
    }

    #[test]
    fn test_decode_quoted_fields() {
        let text = "name,category,link,description\r\n\"Make, GNU\",Build,https://gnu.org,\"The \"\"classic\"\"\nbuild tool\"\r\n";
        let drafts = decode_csv(text).unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].name, "Make, GNU");
        assert_eq!(drafts[0].description, "The \"classic\"\nbuild tool");
    }

    #[test]
    fn test_round_trip() {
        let mut docker = tool("Docker", "DevOps");
        docker.subcategory = "Containers".to_string();
        docker.link = "https://docker.com".to_string();
        docker.description = "Package apps, with \"deps\"\ninto containers".to_string();
        docker.tags = vec!["containers".to_string(), "dev,ops".to_string()];

        let mut vscode = tool("VS Code", "Editor");
        vscode.link = "https://code.visualstudio.com".to_string();
        vscode.description = "Editor".to_string();

        let tools = vec![docker, vscode];
        let drafts = decode_csv(&encode_csv(&tools)).unwrap();
        let expected: Vec<ToolDraft> = tools.iter().map(Tool::to_draft).collect();
        assert_eq!(drafts, expected);
    }

    #[test]
    fn test_export_csv() {
        assert_eq!(export_csv(&[]), Err(CodecError::NothingToExport));

        let file = export_csv(&[tool("jq", "CLI")]).unwrap();
        assert_eq!(file.file_name, "devtools_backup.csv");
        assert!(file.contents.starts_with("name,category"));
    }
}
