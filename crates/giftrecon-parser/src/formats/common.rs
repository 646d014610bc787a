use std::collections::HashMap;

use csv::{StringRecord, StringRecordsIter};

use crate::errors::LoadError;

/// Maps vendor column headers to field indices. A column the source does not
/// carry is not an error; every lookup against it resolves to `None`, which
/// the derivation fallback chains absorb downstream.
pub(crate) struct HeaderMap {
    indices: HashMap<String, usize>,
}

impl HeaderMap {
    pub fn new(header: &StringRecord) -> Self {
        let mut indices = HashMap::with_capacity(header.len());
        for (idx, name) in header.iter().enumerate() {
            indices.entry(name.to_string()).or_insert(idx);
        }
        Self { indices }
    }

    /// Fetch the named column from a data row. Empty cells load as `None` so
    /// that field presence checks are a constructor concern, not a runtime
    /// string inspection.
    pub fn field(&self, record: &StringRecord, name: &str) -> Option<String> {
        let idx = *self.indices.get(name)?;
        record
            .get(idx)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }
}

pub(crate) fn read_header(
    loader: &'static str,
    records: &mut StringRecordsIter<'_, &[u8]>,
) -> Result<StringRecord, LoadError> {
    records
        .next()
        .ok_or(LoadError::MissingHeader { loader })?
        .map_err(|err| LoadError::Csv {
            loader,
            source: err,
        })
}
