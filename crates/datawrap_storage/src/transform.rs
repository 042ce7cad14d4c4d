//! Reversible marker transforms.
//!
//! A transform stands in for a real encoding step. Instead of encrypting or
//! compressing, it tags the payload with a marker string that the matching
//! decode step removes again.
//!
//! ## Marker header
//!
//! A payload on its way to storage has the form `<header><body>`, where the
//! header is the run of leading known markers. Encoding inserts a marker at
//! the end of the header, directly in front of the body. Decoding removes the
//! marker from the end of the header. Wrappers encode outermost first and
//! decode innermost first, so the header behaves as a stack:
//!
//! ```text
//! write "data" through Compression(Encryption(store))
//!   Compression encodes  -> "Compressed: data"
//!   Encryption encodes   -> "Compressed: Encrypted: data"
//! read back
//!   Encryption decodes   -> "Compressed: data"
//!   Compression decodes  -> "data"
//! ```
//!
//! Bodies that themselves begin with a known marker are ambiguous and are
//! not guaranteed to round-trip.

use crate::journal::Event;
use tracing::debug;

/// Marker applied by [`Encryption`].
pub const ENCRYPTION_MARKER: &str = "Encrypted: ";
/// Marker applied by [`Compression`].
pub const COMPRESSION_MARKER: &str = "Compressed: ";

const KNOWN_MARKERS: [&str; 2] = [ENCRYPTION_MARKER, COMPRESSION_MARKER];

/// A reversible payload transformation applied by a [`Wrapped`](crate::Wrapped) layer.
///
/// Every method has a default: encoding and decoding are the identity and no
/// events are recorded. A transform that only overrides some methods still
/// forwards payloads untouched for the rest.
pub trait Transform: Send + Sync {
    /// Transforms a payload on its way to storage.
    fn encode(&self, data: &str) -> String {
        data.to_string()
    }

    /// Reverses [`encode`](Self::encode) on a payload read from storage.
    ///
    /// Input that was not produced by `encode` is returned unchanged.
    fn decode(&self, data: &str) -> String {
        data.to_string()
    }

    /// Event recorded before an outgoing payload is forwarded.
    fn encode_event(&self) -> Option<Event> {
        None
    }

    /// Event recorded after an incoming payload is received.
    fn decode_event(&self) -> Option<Event> {
        None
    }
}

/// Fake encryption: tags payloads with [`ENCRYPTION_MARKER`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Encryption;

impl Transform for Encryption {
    fn encode(&self, data: &str) -> String {
        insert_marker(data, ENCRYPTION_MARKER)
    }

    fn decode(&self, data: &str) -> String {
        remove_marker(data, ENCRYPTION_MARKER)
    }

    fn encode_event(&self) -> Option<Event> {
        Some(Event::Encrypting)
    }

    fn decode_event(&self) -> Option<Event> {
        Some(Event::Decrypting)
    }
}

/// Fake compression: tags payloads with [`COMPRESSION_MARKER`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Compression;

impl Transform for Compression {
    fn encode(&self, data: &str) -> String {
        insert_marker(data, COMPRESSION_MARKER)
    }

    fn decode(&self, data: &str) -> String {
        remove_marker(data, COMPRESSION_MARKER)
    }

    fn encode_event(&self) -> Option<Event> {
        Some(Event::Compressing)
    }

    fn decode_event(&self) -> Option<Event> {
        Some(Event::Decompressing)
    }
}

/// Splits `data` into its marker header and body.
fn split_header(data: &str) -> (&str, &str) {
    let mut body = data;
    while let Some(rest) = KNOWN_MARKERS
        .iter()
        .find_map(|marker| body.strip_prefix(marker))
    {
        body = rest;
    }
    data.split_at(data.len() - body.len())
}

fn insert_marker(data: &str, marker: &str) -> String {
    let (header, body) = split_header(data);
    format!("{header}{marker}{body}")
}

fn remove_marker(data: &str, marker: &str) -> String {
    let (header, body) = split_header(data);
    match header.strip_suffix(marker) {
        Some(rest) => format!("{rest}{body}"),
        None => {
            debug!(marker, "marker not found, payload left unchanged");
            data.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Identity;

    impl Transform for Identity {}

    #[test]
    fn default_transform_is_identity() {
        let t = Identity;
        assert_eq!(t.encode("abc"), "abc");
        assert_eq!(t.decode("Encrypted: abc"), "Encrypted: abc");
        assert!(t.encode_event().is_none());
        assert!(t.decode_event().is_none());
    }

    #[test]
    fn encryption_prefixes_marker() {
        assert_eq!(Encryption.encode("Write data"), "Encrypted: Write data");
        assert_eq!(Encryption.decode("Encrypted: Write data"), "Write data");
    }

    #[test]
    fn compression_prefixes_marker() {
        assert_eq!(Compression.encode("Write data"), "Compressed: Write data");
        assert_eq!(Compression.decode("Compressed: Write data"), "Write data");
    }

    #[test]
    fn inner_marker_goes_after_outer_marker() {
        let outgoing = Encryption.encode(&Compression.encode("Write data"));
        assert_eq!(outgoing, "Compressed: Encrypted: Write data");
    }

    #[test]
    fn decode_peels_header_from_the_end() {
        let stored = "Compressed: Encrypted: Write data";
        let once = Encryption.decode(stored);
        assert_eq!(once, "Compressed: Write data");
        assert_eq!(Compression.decode(&once), "Write data");
    }

    #[test]
    fn decode_without_marker_is_noop() {
        assert_eq!(Encryption.decode("Sample data  file"), "Sample data  file");
        assert_eq!(Compression.decode("Sample data  file"), "Sample data  file");
    }

    #[test]
    fn decode_with_foreign_marker_last_is_noop() {
        // Only the marker directly in front of the body can be removed.
        let stored = "Encrypted: Compressed: x";
        assert_eq!(Encryption.decode(stored), stored);
        assert_eq!(Compression.decode(stored), "Encrypted: x");
    }

    #[test]
    fn marker_in_middle_of_body_is_not_header() {
        let data = "note: Encrypted: inline";
        assert_eq!(Encryption.decode(data), data);
        assert_eq!(Encryption.encode(data), "Encrypted: note: Encrypted: inline");
    }

    #[test]
    fn empty_payload() {
        assert_eq!(Encryption.encode(""), "Encrypted: ");
        assert_eq!(Encryption.decode("Encrypted: "), "");
        assert_eq!(Compression.decode(""), "");
    }

    #[test]
    fn split_header_stops_at_body() {
        assert_eq!(
            split_header("Compressed: Encrypted: body"),
            ("Compressed: Encrypted: ", "body")
        );
        assert_eq!(split_header("body"), ("", "body"));
    }
}
