use serde::{Deserialize, Serialize};
use shared::{DiseaseSummary, Severity};
use std::collections::HashMap;

use super::plant_diseases::{DiseaseSeed, PLANT_DISEASES};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub treatment: String,
    pub severity: Severity,
    pub prevention: String,
}

impl From<&DiseaseSeed> for DiseaseRecord {
    fn from(seed: &DiseaseSeed) -> Self {
        Self {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            treatment: seed.treatment.to_string(),
            severity: seed.severity,
            prevention: seed.prevention.to_string(),
        }
    }
}

/// Immutable, ordered lookup table of disease metadata. Built once at startup
/// and shared read-only between workers.
#[derive(Debug, Clone)]
pub struct DiseaseCatalog {
    records: Vec<DiseaseRecord>,
    index: HashMap<String, usize>,
}

impl DiseaseCatalog {
    pub fn new(records: Vec<DiseaseRecord>) -> Self {
        let index = records
            .iter()
            .enumerate()
            .map(|(position, record)| (record.id.clone(), position))
            .collect();
        Self { records, index }
    }

    pub fn plant_diseases() -> Self {
        Self::new(PLANT_DISEASES.iter().map(DiseaseRecord::from).collect())
    }

    pub fn get(&self, id: &str) -> Option<&DiseaseRecord> {
        self.index.get(id).map(|&position| &self.records[position])
    }

    /// Record at a fixed position; the order never changes for a given table.
    pub fn entry_at(&self, position: usize) -> Option<&DiseaseRecord> {
        self.records.get(position)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> impl Iterator<Item = &DiseaseRecord> {
        self.records.iter()
    }

    pub fn summaries(&self) -> Vec<DiseaseSummary> {
        self.records()
            .map(|record| DiseaseSummary {
                id: record.id.clone(),
                name: record.name.clone(),
                severity: record.severity,
            })
            .collect()
    }
}
