//! Composition root for the decorator demo.
//!
//! [`run`] wires an endpoint and its wrappers together from a
//! [`DemoConfig`], writes the payload once and reads it back once.
//! [`run_with`] performs the same two calls on a chain built elsewhere.

use crate::chain::ChainBuilder;
use crate::config::DemoConfig;
use crate::error::StorageResult;
use crate::journal::{Event, Journal};
use crate::source::DataSource;
use tracing::info;

/// Outcome of a demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    /// Payload handed to the outermost data source.
    pub payload: String,
    /// Value returned by the read through the outermost data source.
    pub read_data: String,
    /// Everything the chain did, in order.
    pub events: Vec<Event>,
}

impl DemoReport {
    /// Returns the payload as it arrived at the endpoint.
    #[must_use]
    pub fn stored_payload(&self) -> Option<&str> {
        self.events.iter().find_map(|event| match event {
            Event::Writing { data, .. } => Some(data.as_str()),
            _ => None,
        })
    }

    /// Returns the console transcript, ending with the decoded value.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.events.iter().map(ToString::to_string).collect();
        lines.push(format!("Read data: {}", self.read_data));
        lines
    }
}

/// Builds the configured chain, writes the payload and reads it back.
///
/// # Errors
///
/// Returns an error if the configuration cannot produce a chain.
pub fn run(config: &DemoConfig) -> StorageResult<DemoReport> {
    let journal = Journal::new();
    let mut chain = ChainBuilder::new(journal.clone())
        .file_endpoint(config.endpoint_name.as_str())
        .layers(config.layers.iter().copied())
        .build()?;

    info!(
        endpoint = %config.endpoint_name,
        layers = config.layers.len(),
        "running decorator demo"
    );

    let read_data = run_with(chain.as_mut(), &config.payload);

    Ok(DemoReport {
        payload: config.payload.clone(),
        read_data,
        events: journal.events(),
    })
}

/// Writes `payload` through `source`, then returns what a read gives back.
pub fn run_with(source: &mut dyn DataSource, payload: &str) -> String {
    source.write_data(payload);
    source.read_data()
}
