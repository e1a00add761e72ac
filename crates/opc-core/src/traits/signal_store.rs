use crate::errors::OpcResult;
use crate::models::RawEntity;

/// Source of snapshot records, supplied once per render cycle.
///
/// Ingestion, scoring and deserialization happen behind this seam.
pub trait ISignalRecordStore {
    /// All records of the current snapshot, in snapshot order.
    fn records(&self) -> OpcResult<Vec<RawEntity>>;
}

/// A store that hands out a fixed, in-memory record set.
#[derive(Debug, Clone, Default)]
pub struct InMemorySignalStore {
    records: Vec<RawEntity>,
}

impl InMemorySignalStore {
    pub fn new(records: Vec<RawEntity>) -> Self {
        Self { records }
    }
}

impl ISignalRecordStore for InMemorySignalStore {
    fn records(&self) -> OpcResult<Vec<RawEntity>> {
        Ok(self.records.clone())
    }
}
