//! Named storage endpoint.

use crate::journal::{Event, Journal};
use crate::source::DataSource;

/// Payload every [`FileDataSource`] returns from `read_data`.
pub const PLACEHOLDER_DATA: &str = "Sample data  file";

/// A named storage endpoint that echoes instead of persisting.
///
/// Writes are recorded in the journal and dropped. Reads are recorded and
/// always return [`PLACEHOLDER_DATA`], whatever was written before. Use
/// [`InMemoryDataSource`](crate::InMemoryDataSource) when a read has to
/// reflect the previous write.
///
/// # Example
///
/// ```rust
/// use datawrap_storage::{DataSource, FileDataSource, Journal, PLACEHOLDER_DATA};
///
/// let journal = Journal::new();
/// let mut source = FileDataSource::new("notes.txt", journal.clone());
/// source.write_data("hello");
/// assert_eq!(source.read_data(), PLACEHOLDER_DATA);
/// assert_eq!(journal.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct FileDataSource {
    name: String,
    journal: Journal,
}

impl FileDataSource {
    /// Creates an endpoint with the given name.
    pub fn new(name: impl Into<String>, journal: Journal) -> Self {
        Self {
            name: name.into(),
            journal,
        }
    }

    /// Returns the endpoint's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl DataSource for FileDataSource {
    fn write_data(&mut self, data: &str) {
        self.journal.record(Event::Writing {
            name: self.name.clone(),
            data: data.to_string(),
        });
    }

    fn read_data(&self) -> String {
        self.journal.record(Event::Reading {
            name: self.name.clone(),
        });
        PLACEHOLDER_DATA.to_string()
    }
}
