//! # Datawrap Storage
//!
//! Data sources that can be stacked as decorators.
//!
//! A chain is an endpoint wrapped by any number of transform layers. Every
//! component implements [`DataSource`], so callers only ever talk to the
//! outermost one. Writes travel inward and are encoded by each layer on the
//! way; reads travel outward and are decoded in reverse.
//!
//! The transforms are stand-ins: [`Encryption`] and [`Compression`] tag the
//! payload with a marker string rather than doing any real work.
//!
//! ## Available Data Sources
//!
//! - [`FileDataSource`] - Named endpoint; echoes writes, reads a placeholder
//! - [`InMemoryDataSource`] - Keeps the last write, for round-trip checks
//! - [`EncryptionLayer`] / [`CompressionLayer`] - Marker transform wrappers
//!
//! ## Example
//!
//! ```rust
//! use datawrap_storage::{ChainBuilder, DataSource, InMemoryDataSource, Journal, LayerKind};
//!
//! let store = InMemoryDataSource::new();
//! let mut chain = ChainBuilder::new(Journal::new())
//!     .endpoint(Box::new(store.clone()))
//!     .layers([LayerKind::Encryption, LayerKind::Compression])
//!     .build()
//!     .unwrap();
//!
//! chain.write_data("hello world");
//! assert_eq!(store.data().as_deref(), Some("Compressed: Encrypted: hello world"));
//! assert_eq!(chain.read_data(), "hello world");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod chain;
mod config;
pub mod demo;
mod endpoint;
mod error;
mod journal;
mod layer;
mod memory;
mod source;
mod transform;

pub use chain::{ChainBuilder, LayerKind};
pub use config::{DemoConfig, DEFAULT_ENDPOINT_NAME, DEFAULT_PAYLOAD};
pub use demo::DemoReport;
pub use endpoint::{FileDataSource, PLACEHOLDER_DATA};
pub use error::{StorageError, StorageResult};
pub use journal::{Event, Journal};
pub use layer::{CompressionLayer, EncryptionLayer, Wrapped};
pub use memory::{InMemoryDataSource, MEMORY_SOURCE_NAME};
pub use source::DataSource;
pub use transform::{Compression, Encryption, Transform, COMPRESSION_MARKER, ENCRYPTION_MARKER};
