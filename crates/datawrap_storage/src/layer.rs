//! Transform wrappers.
//!
//! A [`Wrapped`] data source owns the next data source inward and applies a
//! [`Transform`] around every call it forwards:
//!
//! - `write_data` encodes the payload, then forwards it inward
//! - `read_data` reads from the inner source, then decodes the result
//!
//! Stacking wrappers gives a strictly linear chain ending in an endpoint.

use crate::journal::Journal;
use crate::source::DataSource;
use crate::transform::{Compression, Encryption, Transform};

/// A data source that wraps another one with a [`Transform`].
///
/// # Example
///
/// ```rust
/// use datawrap_storage::{
///     CompressionLayer, DataSource, EncryptionLayer, InMemoryDataSource, Journal,
/// };
///
/// let journal = Journal::new();
/// let store = InMemoryDataSource::new();
/// let encrypted = EncryptionLayer::encryption(Box::new(store.clone()), journal.clone());
/// let mut chain = CompressionLayer::compression(Box::new(encrypted), journal);
///
/// chain.write_data("hello");
/// assert_eq!(store.data().as_deref(), Some("Compressed: Encrypted: hello"));
/// assert_eq!(chain.read_data(), "hello");
/// ```
pub struct Wrapped<T: Transform> {
    inner: Box<dyn DataSource>,
    transform: T,
    journal: Journal,
}

/// A wrapper applying fake encryption.
pub type EncryptionLayer = Wrapped<Encryption>;

/// A wrapper applying fake compression.
pub type CompressionLayer = Wrapped<Compression>;

impl<T: Transform> Wrapped<T> {
    /// Wraps `inner` with `transform`.
    pub fn new(inner: Box<dyn DataSource>, transform: T, journal: Journal) -> Self {
        Self {
            inner,
            transform,
            journal,
        }
    }

    /// Returns the transform this layer applies.
    #[must_use]
    pub fn transform(&self) -> &T {
        &self.transform
    }

    /// Returns the wrapped data source.
    #[must_use]
    pub fn inner(&self) -> &dyn DataSource {
        self.inner.as_ref()
    }

    /// Unwraps this layer, returning the inner data source.
    #[must_use]
    pub fn into_inner(self) -> Box<dyn DataSource> {
        self.inner
    }
}

impl EncryptionLayer {
    /// Wraps `inner` with fake encryption.
    pub fn encryption(inner: Box<dyn DataSource>, journal: Journal) -> Self {
        Self::new(inner, Encryption, journal)
    }
}

impl CompressionLayer {
    /// Wraps `inner` with fake compression.
    pub fn compression(inner: Box<dyn DataSource>, journal: Journal) -> Self {
        Self::new(inner, Compression, journal)
    }
}

impl<T: Transform> DataSource for Wrapped<T> {
    fn write_data(&mut self, data: &str) {
        let encoded = self.transform.encode(data);
        if let Some(event) = self.transform.encode_event() {
            self.journal.record(event);
        }
        self.inner.write_data(&encoded);
    }

    fn read_data(&self) -> String {
        let data = self.inner.read_data();
        if let Some(event) = self.transform.decode_event() {
            self.journal.record(event);
        }
        self.transform.decode(&data)
    }
}

impl<T: Transform + std::fmt::Debug> std::fmt::Debug for Wrapped<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wrapped")
            .field("transform", &self.transform)
            .finish_non_exhaustive()
    }
}
