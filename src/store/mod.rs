//! Record storage.
//!
//! A [`Table`] is an ordered, append-only list of string rows with a fixed
//! header. Services never talk to a table directly; they go through a typed
//! [`Store`], which turns rows into records and back. Two backends exist:
//! [`CsvTable`] (one file per table) and [`MemoryTable`].

mod csv_table;
mod memory;

pub use csv_table::CsvTable;
pub use memory::MemoryTable;

use async_trait::async_trait;
use std::marker::PhantomData;
use std::path::Path;
use std::sync::Arc;
use crate::config::StorageBackend;
use crate::errors::{StoreError, StoreResult};

#[async_trait]
pub trait Table: Send + Sync {
    /// Short name used in logs and error messages, e.g. `quotes.csv`.
    fn label(&self) -> &str;

    fn columns(&self) -> &'static [&'static str];

    /// Makes sure the table exists with its header row.
    async fn ensure(&self) -> StoreResult<()>;

    /// All data rows in insertion order, header excluded.
    async fn scan(&self) -> StoreResult<Vec<Vec<String>>>;

    async fn append(&self, row: Vec<String>) -> StoreResult<()>;
}

/// A type that maps onto one row of a table.
pub trait Record: Sized + Send + 'static {
    const COLUMNS: &'static [&'static str];

    /// Builds a record from a row holding at least `COLUMNS.len()` fields.
    fn from_fields(fields: Vec<String>) -> Self;

    fn to_fields(&self) -> Vec<String>;
}

pub struct Store<R> {
    table: Arc<dyn Table>,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
            _record: PhantomData,
        }
    }
}

impl<R: Record> Store<R> {
    pub fn new(table: Arc<dyn Table>) -> Self {
        Self {
            table,
            _record: PhantomData,
        }
    }

    pub fn csv(path: impl AsRef<Path>) -> Self {
        Self::new(Arc::new(CsvTable::new(path.as_ref(), R::COLUMNS)))
    }

    pub fn in_memory(label: &str) -> Self {
        Self::new(Arc::new(MemoryTable::new(label, R::COLUMNS)))
    }

    pub fn open(backend: StorageBackend, dir: &Path, file_name: &str) -> Self {
        match backend {
            StorageBackend::Csv => Self::csv(dir.join(file_name)),
            StorageBackend::Memory => Self::in_memory(file_name),
        }
    }

    pub fn label(&self) -> &str {
        self.table.label()
    }

    pub async fn ensure(&self) -> StoreResult<()> {
        self.table.ensure().await
    }

    pub async fn all(&self) -> StoreResult<Vec<R>> {
        self.table
            .scan()
            .await?
            .into_iter()
            .map(|row| self.decode(row))
            .collect()
    }

    /// First record matching `pred`, in insertion order.
    pub async fn find<F>(&self, pred: F) -> StoreResult<Option<R>>
    where
        F: Fn(&R) -> bool + Send,
    {
        Ok(self.all().await?.into_iter().find(|record| pred(record)))
    }

    pub async fn filter<F>(&self, pred: F) -> StoreResult<Vec<R>>
    where
        F: Fn(&R) -> bool + Send,
    {
        Ok(self
            .all()
            .await?
            .into_iter()
            .filter(|record| pred(record))
            .collect())
    }

    pub async fn append(&self, record: &R) -> StoreResult<()> {
        self.table.append(record.to_fields()).await
    }

    fn decode(&self, row: Vec<String>) -> StoreResult<R> {
        let expected = self.table.columns().len();
        if row.len() < expected {
            tracing::error!("Short row in {}: {:?}", self.label(), row);
            return Err(StoreError::Malformed {
                table: self.label().to_string(),
                expected,
                found: row.len(),
            });
        }
        Ok(R::from_fields(row))
    }
}
