//! Parse and commit stages of an import

use crate::codec::{self, CodecResult, FileFormat};
use crate::logging::Logger;
use crate::repository::ToolRepository;
use crate::{log_info, log_warn};

use super::batch::{ConfirmedBatch, ImportFailure, ImportReport, ParsedBatch};

/// Decode file contents into a batch awaiting confirmation
///
/// A malformed file is rejected as a whole; nothing reaches the repository.
pub fn parse_import(text: &str, format: FileFormat) -> CodecResult<ParsedBatch> {
    let drafts = codec::decode(text, format)?;
    crate::debug_log!("parsed {} {:?} records", drafts.len(), format);
    Ok(ParsedBatch::new(drafts))
}

/// Insert a confirmed batch, one record at a time and in order
///
/// A record the repository rejects is logged and counted; the remaining
/// records are still attempted.
pub async fn commit_import(
    repository: &dyn ToolRepository,
    batch: ConfirmedBatch,
    author: &str,
    logger: &dyn Logger,
) -> ImportReport {
    let drafts = batch.into_drafts();
    let mut report = ImportReport {
        total: drafts.len(),
        ..Default::default()
    };

    for (index, draft) in drafts.into_iter().enumerate() {
        let name = draft.name.clone();
        match repository.add_tool(draft, author).await {
            Ok(_) => report.imported += 1,
            Err(e) => {
                log_warn!(logger, "[Import] Failed to import '{}': {}", name, e);
                report.failures.push(ImportFailure {
                    index,
                    name,
                    reason: e.to_string(),
                });
            }
        }
    }

    log_info!(logger, "[Import] {}", report.summary());
    report
}
