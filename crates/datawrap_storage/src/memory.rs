//! In-memory data source for testing.

use crate::journal::{Event, Journal};
use crate::source::DataSource;
use parking_lot::RwLock;
use std::sync::Arc;

/// Name under which [`InMemoryDataSource`] records its events.
pub const MEMORY_SOURCE_NAME: &str = "memory";

#[derive(Debug, Default)]
struct MemoryState {
    current: Option<String>,
    history: Vec<String>,
}

/// A data source that keeps what is written to it.
///
/// Unlike [`FileDataSource`](crate::FileDataSource), a read returns the
/// most recent write, which makes this the store to use when checking that
/// a chain of wrappers gives back what was put in.
///
/// Clones share the same underlying state, so a test can keep a handle
/// after boxing the source into a chain.
///
/// # Example
///
/// ```rust
/// use datawrap_storage::{DataSource, InMemoryDataSource};
///
/// let mut source = InMemoryDataSource::new();
/// source.write_data("hello");
/// assert_eq!(source.read_data(), "hello");
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataSource {
    state: Arc<RwLock<MemoryState>>,
    journal: Journal,
}

impl InMemoryDataSource {
    /// Creates an empty in-memory data source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an in-memory data source holding `data`.
    ///
    /// The preloaded value is not part of [`writes`](Self::writes).
    #[must_use]
    pub fn with_data(data: impl Into<String>) -> Self {
        let source = Self::new();
        source.state.write().current = Some(data.into());
        source
    }

    /// Records this source's events in `journal`.
    #[must_use]
    pub fn with_journal(mut self, journal: Journal) -> Self {
        self.journal = journal;
        self
    }

    /// Returns the currently stored payload, if any.
    #[must_use]
    pub fn data(&self) -> Option<String> {
        self.state.read().current.clone()
    }

    /// Returns every payload written so far, oldest first.
    #[must_use]
    pub fn writes(&self) -> Vec<String> {
        self.state.read().history.clone()
    }

    /// Clears the stored payload and the write history.
    pub fn clear(&mut self) {
        let mut state = self.state.write();
        state.current = None;
        state.history.clear();
    }
}

impl DataSource for InMemoryDataSource {
    fn write_data(&mut self, data: &str) {
        self.journal.record(Event::Writing {
            name: MEMORY_SOURCE_NAME.to_string(),
            data: data.to_string(),
        });
        let mut state = self.state.write();
        state.current = Some(data.to_string());
        state.history.push(data.to_string());
    }

    fn read_data(&self) -> String {
        self.journal.record(Event::Reading {
            name: MEMORY_SOURCE_NAME.to_string(),
        });
        self.state.read().current.clone().unwrap_or_default()
    }
}
