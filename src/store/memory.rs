use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::errors::{StoreError, StoreResult};
use super::Table;

pub struct MemoryTable {
    label: String,
    columns: &'static [&'static str],
    rows: RwLock<Vec<Vec<String>>>,
    writable: bool,
}

impl MemoryTable {
    pub fn new(label: &str, columns: &'static [&'static str]) -> Self {
        Self {
            label: label.to_string(),
            columns,
            rows: RwLock::new(Vec::new()),
            writable: true,
        }
    }

    /// A table that rejects every append with a permission error.
    #[cfg(test)]
    pub fn read_only(label: &str, columns: &'static [&'static str]) -> Self {
        Self {
            writable: false,
            ..Self::new(label, columns)
        }
    }
}

#[async_trait]
impl Table for MemoryTable {
    fn label(&self) -> &str {
        &self.label
    }

    fn columns(&self) -> &'static [&'static str] {
        self.columns
    }

    async fn ensure(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn scan(&self) -> StoreResult<Vec<Vec<String>>> {
        Ok(self.rows.read().await.clone())
    }

    async fn append(&self, row: Vec<String>) -> StoreResult<()> {
        if !self.writable {
            return Err(StoreError::PermissionDenied(self.label.clone()));
        }
        self.rows.write().await.push(row);
        Ok(())
    }
}
