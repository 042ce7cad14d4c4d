//! Ordered record of what each layer of a chain did.
//!
//! Every data source in a chain shares one [`Journal`]. Each step is
//! recorded as an [`Event`] and mirrored to `tracing` at debug level, so the
//! same transcript is available to tests and to the console.

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// A single step taken by a data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A compression layer transformed an outgoing payload.
    Compressing,
    /// An encryption layer transformed an outgoing payload.
    Encrypting,
    /// An endpoint received a payload.
    Writing {
        /// Name of the endpoint.
        name: String,
        /// Payload as it arrived at the endpoint.
        data: String,
    },
    /// An endpoint was asked for its payload.
    Reading {
        /// Name of the endpoint.
        name: String,
    },
    /// An encryption layer transformed an incoming payload.
    Decrypting,
    /// A compression layer transformed an incoming payload.
    Decompressing,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compressing => f.write_str("Compressing data..."),
            Self::Encrypting => f.write_str("Encrypting data..."),
            Self::Writing { name, data } => write!(f, "Writing data to file '{name}': {data}"),
            Self::Reading { name } => write!(f, "Reading data from file '{name}'"),
            Self::Decrypting => f.write_str("Decrypting data..."),
            Self::Decompressing => f.write_str("Decompressing data..."),
        }
    }
}

/// Shared, append-only event log.
///
/// Cloning a journal yields another handle to the same log.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    events: Arc<RwLock<Vec<Event>>>,
}

impl Journal {
    /// Creates an empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event.
    pub fn record(&self, event: Event) {
        debug!(%event, "data source event");
        self.events.write().push(event);
    }

    /// Returns a copy of every event recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<Event> {
        self.events.read().clone()
    }

    /// Returns the recorded events rendered as console lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.events.read().iter().map(ToString::to_string).collect()
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    /// Discards all recorded events.
    pub fn clear(&self) {
        self.events.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journal_new_is_empty() {
        let journal = Journal::new();
        assert!(journal.is_empty());
        assert_eq!(journal.len(), 0);
    }

    #[test]
    fn journal_preserves_order() {
        let journal = Journal::new();
        journal.record(Event::Compressing);
        journal.record(Event::Encrypting);

        assert_eq!(
            journal.events(),
            vec![Event::Compressing, Event::Encrypting]
        );
    }

    #[test]
    fn journal_clones_share_log() {
        let journal = Journal::new();
        let handle = journal.clone();
        handle.record(Event::Decrypting);

        assert_eq!(journal.len(), 1);
        assert_eq!(journal.events()[0], Event::Decrypting);
    }

    #[test]
    fn journal_clear() {
        let journal = Journal::new();
        journal.record(Event::Decompressing);
        journal.clear();
        assert!(journal.is_empty());
    }

    #[test]
    fn event_lines() {
        let journal = Journal::new();
        journal.record(Event::Writing {
            name: "notes.txt".to_string(),
            data: "hello".to_string(),
        });
        journal.record(Event::Reading {
            name: "notes.txt".to_string(),
        });

        assert_eq!(
            journal.lines(),
            vec![
                "Writing data to file 'notes.txt': hello".to_string(),
                "Reading data from file 'notes.txt'".to_string(),
            ]
        );
    }
}
