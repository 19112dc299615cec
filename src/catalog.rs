// ABOUTME: Substitution catalog access trait and in-memory implementation
// ABOUTME: The persistence seam between the engine and the platform's catalog store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen

//! Access to the persisted ingredient substitution catalog.
//!
//! The engine only reads the catalog; curation happens elsewhere in the
//! platform. Backends implement [`SubstitutionCatalog`]; the engine treats
//! any error as "no suggestions for that ingredient".

use crate::errors::CatalogResult;
use crate::models::SubstitutionRecord;
use std::collections::HashMap;

/// Read access to the substitution catalog
#[async_trait::async_trait]
pub trait SubstitutionCatalog: Send + Sync {
    /// Fetch all records whose original ingredient matches the given name
    /// case-insensitively
    async fn fetch_substitutions(
        &self,
        original_ingredient: &str,
    ) -> CatalogResult<Vec<SubstitutionRecord>>;
}

/// In-memory catalog keyed by lowercase ingredient name
///
/// Used by tests and demo seeding. Production deployments wire a database
/// backed implementation through the same trait.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    records: HashMap<String, Vec<SubstitutionRecord>>,
}

impl InMemoryCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from a list of records
    #[must_use]
    pub fn with_records(records: Vec<SubstitutionRecord>) -> Self {
        let mut catalog = Self::new();
        for record in records {
            catalog.insert(record);
        }
        catalog
    }

    /// Add a record to the catalog
    pub fn insert(&mut self, record: SubstitutionRecord) {
        self.records
            .entry(record.original_ingredient.to_lowercase())
            .or_default()
            .push(record);
    }

    /// Number of distinct original ingredients covered
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait::async_trait]
impl SubstitutionCatalog for InMemoryCatalog {
    async fn fetch_substitutions(
        &self,
        original_ingredient: &str,
    ) -> CatalogResult<Vec<SubstitutionRecord>> {
        Ok(self
            .records
            .get(&original_ingredient.to_lowercase())
            .cloned()
            .unwrap_or_default())
    }
}
