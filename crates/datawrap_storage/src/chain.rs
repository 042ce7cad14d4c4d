//! Chain assembly.

use crate::endpoint::FileDataSource;
use crate::error::{StorageError, StorageResult};
use crate::journal::Journal;
use crate::layer::{CompressionLayer, EncryptionLayer};
use crate::source::DataSource;
use tracing::debug;

/// The wrapper kinds a chain can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    /// Fake encryption, see [`EncryptionLayer`].
    Encryption,
    /// Fake compression, see [`CompressionLayer`].
    Compression,
}

impl LayerKind {
    fn wrap(self, inner: Box<dyn DataSource>, journal: Journal) -> Box<dyn DataSource> {
        match self {
            Self::Encryption => Box::new(EncryptionLayer::encryption(inner, journal)),
            Self::Compression => Box::new(CompressionLayer::compression(inner, journal)),
        }
    }
}

enum Endpoint {
    File(String),
    Custom(Box<dyn DataSource>),
}

/// Builds a linear chain of wrappers over a single endpoint.
///
/// Layers are listed innermost first: the first layer added wraps the
/// endpoint directly and the last one added is what callers talk to.
///
/// # Example
///
/// ```rust
/// use datawrap_storage::{ChainBuilder, DataSource, Journal, LayerKind};
///
/// let mut chain = ChainBuilder::new(Journal::new())
///     .file_endpoint("notes.txt")
///     .layer(LayerKind::Encryption)
///     .layer(LayerKind::Compression)
///     .build()
///     .unwrap();
/// chain.write_data("hello");
/// ```
pub struct ChainBuilder {
    journal: Journal,
    endpoint: Option<Endpoint>,
    layers: Vec<LayerKind>,
}

impl ChainBuilder {
    /// Starts a chain whose components all record into `journal`.
    #[must_use]
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            endpoint: None,
            layers: Vec::new(),
        }
    }

    /// Uses a [`FileDataSource`] with the given name as the endpoint.
    #[must_use]
    pub fn file_endpoint(mut self, name: impl Into<String>) -> Self {
        self.endpoint = Some(Endpoint::File(name.into()));
        self
    }

    /// Uses an existing data source as the endpoint.
    #[must_use]
    pub fn endpoint(mut self, source: Box<dyn DataSource>) -> Self {
        self.endpoint = Some(Endpoint::Custom(source));
        self
    }

    /// Adds one wrapper around everything added so far.
    #[must_use]
    pub fn layer(mut self, kind: LayerKind) -> Self {
        self.layers.push(kind);
        self
    }

    /// Adds several wrappers, innermost first.
    #[must_use]
    pub fn layers(mut self, kinds: impl IntoIterator<Item = LayerKind>) -> Self {
        self.layers.extend(kinds);
        self
    }

    /// Assembles the chain and returns its outermost data source.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidConfiguration`] if no endpoint was
    /// given or the endpoint name is blank.
    pub fn build(self) -> StorageResult<Box<dyn DataSource>> {
        let endpoint: Box<dyn DataSource> = match self.endpoint {
            None => return Err(StorageError::invalid_config("chain has no storage endpoint")),
            Some(Endpoint::File(name)) if name.trim().is_empty() => {
                return Err(StorageError::invalid_config("endpoint name must not be empty"));
            }
            Some(Endpoint::File(name)) => Box::new(FileDataSource::new(name, self.journal.clone())),
            Some(Endpoint::Custom(source)) => source,
        };

        debug!(layers = ?self.layers, "assembling data source chain");

        let journal = self.journal;
        Ok(self
            .layers
            .into_iter()
            .fold(endpoint, |inner, kind| kind.wrap(inner, journal.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::Event;
    use crate::{InMemoryDataSource, PLACEHOLDER_DATA};

    #[test]
    fn build_without_endpoint_fails() {
        let result = ChainBuilder::new(Journal::new())
            .layer(LayerKind::Encryption)
            .build();
        assert!(matches!(result, Err(StorageError::InvalidConfiguration(_))));
    }

    #[test]
    fn build_with_blank_name_fails() {
        let result = ChainBuilder::new(Journal::new()).file_endpoint("  ").build();
        assert!(matches!(result, Err(StorageError::InvalidConfiguration(_))));
    }

    #[test]
    fn build_endpoint_only() {
        let mut chain = ChainBuilder::new(Journal::new())
            .file_endpoint("bare.txt")
            .build()
            .unwrap();
        chain.write_data("x");
        assert_eq!(chain.read_data(), PLACEHOLDER_DATA);
    }

    #[test]
    fn layers_wrap_innermost_first() {
        let store = InMemoryDataSource::new();
        let mut chain = ChainBuilder::new(Journal::new())
            .endpoint(Box::new(store.clone()))
            .layers([LayerKind::Encryption, LayerKind::Compression])
            .build()
            .unwrap();

        chain.write_data("Write data");
        assert_eq!(
            store.data().as_deref(),
            Some("Compressed: Encrypted: Write data")
        );
        assert_eq!(chain.read_data(), "Write data");
    }

    #[test]
    fn all_components_share_journal() {
        let journal = Journal::new();
        let mut chain = ChainBuilder::new(journal.clone())
            .file_endpoint("j.txt")
            .layer(LayerKind::Compression)
            .build()
            .unwrap();
        chain.write_data("x");

        assert_eq!(
            journal.events(),
            vec![
                Event::Compressing,
                Event::Writing {
                    name: "j.txt".to_string(),
                    data: "Compressed: x".to_string(),
                },
            ]
        );
    }
}
