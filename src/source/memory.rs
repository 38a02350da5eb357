//! In-memory record source

use super::{check_offset, RecordSource};
use crate::error::Result;
use crate::pagination::FetchSpec;

/// Records held in a vector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VecSource<T> {
    records: Vec<T>,
}

impl<T> VecSource<T> {
    /// Create a source over `records`
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }
}

impl<T: Clone> RecordSource for VecSource<T> {
    type Record = T;

    fn count(&self) -> Result<u64> {
        Ok(self.records.len() as u64)
    }

    fn fetch_page(&self, spec: FetchSpec) -> Result<Vec<T>> {
        let offset = check_offset(spec)?;
        Ok(self
            .records
            .iter()
            .skip(offset)
            .take(spec.limit as usize)
            .cloned()
            .collect())
    }
}
