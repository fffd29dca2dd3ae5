//! Parsed and confirmed import batches

use crate::types::ToolDraft;

/// Drafts decoded from an uploaded file, awaiting the user's decision
///
/// Nothing has been written yet. The batch can only be committed after
/// [`confirm`](Self::confirm) turns it into a [`ConfirmedBatch`];
/// [`decline`](Self::decline) discards it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBatch {
    drafts: Vec<ToolDraft>,
}

impl ParsedBatch {
    pub(crate) fn new(drafts: Vec<ToolDraft>) -> Self {
        Self { drafts }
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    /// Preview of the records to be imported
    pub fn drafts(&self) -> &[ToolDraft] {
        &self.drafts
    }

    /// Confirmation question shown before committing
    pub fn prompt(&self) -> String {
        format!("{} ferramentas encontradas. Deseja importá-las?", self.len())
    }

    pub fn confirm(self) -> ConfirmedBatch {
        ConfirmedBatch { drafts: self.drafts }
    }

    /// Discard the batch; the repository is never touched
    pub fn decline(self) {}
}

/// A batch the user agreed to import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedBatch {
    drafts: Vec<ToolDraft>,
}

impl ConfirmedBatch {
    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    pub(crate) fn into_drafts(self) -> Vec<ToolDraft> {
        self.drafts
    }
}

/// One record the repository refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportFailure {
    /// Position in the batch (0-based)
    pub index: usize,
    pub name: String,
    pub reason: String,
}

/// Outcome of committing a batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub total: usize,
    pub imported: usize,
    pub failures: Vec<ImportFailure>,
}

impl ImportReport {
    /// True when every record was inserted
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && self.imported == self.total
    }

    /// Summary notification text
    pub fn summary(&self) -> String {
        format!("{} de {} ferramentas importadas!", self.imported, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_and_confirm() {
        let batch = ParsedBatch::new(vec![ToolDraft::new("a", "x"), ToolDraft::new("b", "y")]);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.prompt(), "2 ferramentas encontradas. Deseja importá-las?");
        assert_eq!(batch.drafts()[1].name, "b");

        let confirmed = batch.confirm();
        assert_eq!(confirmed.len(), 2);
        assert_eq!(confirmed.into_drafts()[0].name, "a");
    }

    #[test]
    fn test_report_summary() {
        let report = ImportReport {
            total: 3,
            imported: 2,
            failures: vec![ImportFailure {
                index: 1,
                name: "b".to_string(),
                reason: "down".to_string(),
            }],
        };
        assert_eq!(report.summary(), "2 de 3 ferramentas importadas!");
        assert!(!report.is_complete());
    }
}
