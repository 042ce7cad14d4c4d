//! Demo configuration.

use crate::chain::LayerKind;

/// Endpoint name used by the default demo.
pub const DEFAULT_ENDPOINT_NAME: &str = "TurqayMammadov.txt";
/// Payload written by the default demo.
pub const DEFAULT_PAYLOAD: &str = "Write data";

/// Configuration for a demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Name of the storage endpoint.
    pub endpoint_name: String,

    /// Payload written through the chain.
    pub payload: String,

    /// Wrappers around the endpoint, innermost first.
    pub layers: Vec<LayerKind>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            endpoint_name: DEFAULT_ENDPOINT_NAME.to_string(),
            payload: DEFAULT_PAYLOAD.to_string(),
            layers: vec![LayerKind::Encryption, LayerKind::Compression],
        }
    }
}

impl DemoConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the endpoint name.
    #[must_use]
    pub fn endpoint_name(mut self, name: impl Into<String>) -> Self {
        self.endpoint_name = name.into();
        self
    }

    /// Sets the payload.
    #[must_use]
    pub fn payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = payload.into();
        self
    }

    /// Replaces the wrapper stack.
    #[must_use]
    pub fn layers(mut self, layers: Vec<LayerKind>) -> Self {
        self.layers = layers;
        self
    }
}
