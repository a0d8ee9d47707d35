//! In-memory company registry
//!
//! Holds the current record list as an immutable snapshot. Writers build a
//! new list and swap it in, readers clone the `Arc` and work lock-free.
//! Nothing is persisted; records can be seeded from an import file at
//! startup.

use std::sync::Arc;
use tokio::sync::RwLock;

use super::error::{RegistryError, RegistryResult};
use super::types::{Company, CompanyId, NewCompany};

/// Current snapshot plus a counter bumped on every swap
struct Inner {
    records: Arc<[Company]>,
    generation: u64,
}

/// Thread-safe registry of company records
pub struct CompanyRegistry {
    inner: RwLock<Inner>,
}

impl Default for CompanyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CompanyRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a registry holding the given records
    pub fn with_records(records: Vec<Company>) -> Self {
        Self {
            inner: RwLock::new(Inner {
                records: records.into(),
                generation: 0,
            }),
        }
    }

    /// Current record list.
    ///
    /// The returned snapshot stays valid and unchanged after later writes;
    /// those publish a new allocation instead.
    pub async fn snapshot(&self) -> Arc<[Company]> {
        Arc::clone(&self.inner.read().await.records)
    }

    /// Number of records
    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    /// Whether the registry holds no records
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Number of snapshots published since creation
    pub async fn generation(&self) -> u64 {
        self.inner.read().await.generation
    }

    /// All records in insertion order
    pub async fn list(&self) -> Vec<Company> {
        self.snapshot().await.to_vec()
    }

    /// Look up a record by id
    pub async fn get(&self, id: CompanyId) -> Option<Company> {
        self.inner
            .read()
            .await
            .records
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    /// Validate and add a single record
    pub async fn insert(&self, input: NewCompany) -> RegistryResult<Company> {
        input.validate()?;
        let company = input.into_company();

        let mut inner = self.inner.write().await;
        let mut records = inner.records.to_vec();
        records.push(company.clone());
        Self::publish(&mut inner, records);

        tracing::debug!(company_id = %company.id, industry = %company.industry, "Inserted company");
        Ok(company)
    }

    /// Validate and add several records as one snapshot.
    ///
    /// Validation runs over the whole batch first; a single invalid entry
    /// rejects the batch and leaves the registry unchanged.
    pub async fn insert_batch(&self, inputs: Vec<NewCompany>) -> RegistryResult<Vec<Company>> {
        for (index, input) in inputs.iter().enumerate() {
            input.validate().map_err(|e| match e {
                RegistryError::Validation(msg) => {
                    RegistryError::Validation(format!("entry {}: {}", index, msg))
                }
                other => other,
            })?;
        }

        if inputs.is_empty() {
            return Ok(Vec::new());
        }

        let created: Vec<Company> = inputs.into_iter().map(NewCompany::into_company).collect();

        let mut inner = self.inner.write().await;
        let mut records = inner.records.to_vec();
        records.extend(created.iter().cloned());
        Self::publish(&mut inner, records);

        tracing::debug!(count = created.len(), "Inserted company batch");
        Ok(created)
    }

    /// Remove a record by id
    pub async fn remove(&self, id: CompanyId) -> RegistryResult<Company> {
        let mut inner = self.inner.write().await;

        let position = inner
            .records
            .iter()
            .position(|c| c.id == id)
            .ok_or(RegistryError::NotFound(id))?;

        let mut records = inner.records.to_vec();
        let removed = records.remove(position);
        Self::publish(&mut inner, records);

        tracing::debug!(company_id = %id, "Removed company");
        Ok(removed)
    }

    fn publish(inner: &mut Inner, records: Vec<Company>) {
        inner.records = records.into();
        inner.generation += 1;
    }
}
