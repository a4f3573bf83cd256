use super::{RosterStorage, StorageResult};

/// Process-local roster storage used by tests and embedded callers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    document: Option<String>,
    writes: usize,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `contents` as the already-persisted document.
    pub fn with_document(contents: impl Into<String>) -> Self {
        Self {
            document: Some(contents.into()),
            writes: 0,
        }
    }

    /// Last written (or seeded) document text.
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    /// Number of completed `write_document` calls.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl RosterStorage for InMemoryStorage {
    fn mode(&self) -> &'static str {
        "memory"
    }

    fn read_document(&self) -> StorageResult<Option<String>> {
        Ok(self.document.clone())
    }

    fn write_document(&mut self, contents: &str) -> StorageResult<()> {
        self.document = Some(contents.to_string());
        self.writes += 1;
        Ok(())
    }
}
