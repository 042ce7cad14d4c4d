//! Data source trait definition.

/// A named store that accepts string payloads and hands them back.
///
/// Both the storage endpoints and the transform wrappers implement this
/// trait, so a wrapper can stand anywhere a plain endpoint can.
///
/// # Invariants
///
/// - `write_data` and `read_data` never fail
/// - A wrapper's `read_data` undoes exactly what its `write_data` applied
/// - Data sources must be `Send + Sync`
///
/// # Implementors
///
/// - [`super::FileDataSource`] - Named endpoint that only echoes
/// - [`super::InMemoryDataSource`] - Keeps the last written payload
/// - [`super::Wrapped`] - Transform wrapper around another data source
pub trait DataSource: Send + Sync {
    /// Writes `data` to the store.
    fn write_data(&mut self, data: &str);

    /// Reads the stored payload back.
    fn read_data(&self) -> String;
}

impl<S: DataSource + ?Sized> DataSource for Box<S> {
    fn write_data(&mut self, data: &str) {
        (**self).write_data(data);
    }

    fn read_data(&self) -> String {
        (**self).read_data()
    }
}
