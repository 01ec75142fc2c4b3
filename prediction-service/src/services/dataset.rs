//! Reference dataset of cleaned car listings, loaded once at startup and
//! served read-only through the catalog endpoints.

use crate::models::CarRecord;
use csv::Reader;
use service_core::error::AppError;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub struct CarDataset {
    records: Vec<CarRecord>,
}

impl CarDataset {
    /// Read the cleaned car CSV. A missing or malformed file is a startup
    /// failure.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            AppError::ModelError(anyhow::anyhow!(
                "Failed to open reference dataset at {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut reader = Reader::from_reader(BufReader::new(file));
        let mut records = Vec::new();
        for result in reader.deserialize() {
            let record: CarRecord = result?;
            records.push(record);
        }

        if records.is_empty() {
            return Err(AppError::ModelError(anyhow::anyhow!(
                "Reference dataset at {} contains no rows",
                path.display()
            )));
        }

        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Unique company names, sorted.
    pub fn companies(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.company.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Unique model names for one company, sorted. Unknown company yields an
    /// empty list.
    pub fn models_for(&self, company: &str) -> Vec<String> {
        self.records
            .iter()
            .filter(|r| r.company == company)
            .map(|r| r.name.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Unique years, newest first.
    pub fn years(&self) -> Vec<i64> {
        self.records
            .iter()
            .map(|r| r.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .rev()
            .collect()
    }

    /// Unique fuel types, sorted.
    pub fn fuel_types(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.fuel_type.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
