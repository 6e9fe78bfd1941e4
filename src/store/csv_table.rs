use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use tokio::{
    fs::{self, OpenOptions},
    io::AsyncWriteExt,
    sync::Mutex,
};
use crate::errors::{StoreError, StoreResult};
use super::Table;

/// A table kept as a CSV file whose first line names the columns.
///
/// Reads parse the whole file on every call. Writes on the same table are
/// serialized through `write_lock`, and the header is written by whichever
/// write finds the file missing or empty.
pub struct CsvTable {
    path: PathBuf,
    label: String,
    columns: &'static [&'static str],
    write_lock: Mutex<()>,
}

impl CsvTable {
    pub fn new(path: &Path, columns: &'static [&'static str]) -> Self {
        let label = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Self {
            path: path.to_path_buf(),
            label,
            columns,
            write_lock: Mutex::new(()),
        }
    }

    async fn needs_header(&self) -> StoreResult<bool> {
        match fs::metadata(&self.path).await {
            Ok(meta) => Ok(meta.len() == 0),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(true),
            Err(e) => Err(StoreError::from_io(&self.path, e)),
        }
    }

    async fn write_bytes(&self, bytes: &[u8]) -> StoreResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| StoreError::from_io(&self.path, e))?;

        file.write_all(bytes)
            .await
            .map_err(|e| StoreError::from_io(&self.path, e))?;
        file.flush()
            .await
            .map_err(|e| StoreError::from_io(&self.path, e))
    }
}

fn encode<I, T>(rows: I) -> StoreResult<Vec<u8>>
where
    I: IntoIterator,
    I::Item: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for row in rows {
        writer.write_record(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| StoreError::Csv(io::Error::new(e.error().kind(), e.error().to_string()).into()))
}

#[async_trait]
impl Table for CsvTable {
    fn label(&self) -> &str {
        &self.label
    }

    fn columns(&self) -> &'static [&'static str] {
        self.columns
    }

    async fn ensure(&self) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::from_io(parent, e))?;
        }

        if self.needs_header().await? {
            self.write_bytes(&encode([self.columns])?).await?;
            tracing::info!("Initialized {} with header {:?}", self.path.display(), self.columns);
        }
        Ok(())
    }

    async fn scan(&self) -> StoreResult<Vec<Vec<String>>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("{} does not exist yet, treating as empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::from_io(&self.path, e)),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes.as_slice());

        let rows = reader
            .records()
            .map(|record| {
                record
                    .map(|r| r.iter().map(str::to_string).collect())
                    .map_err(StoreError::from)
            })
            .collect::<StoreResult<Vec<Vec<String>>>>()?;

        tracing::trace!("Read {} rows from {}", rows.len(), self.path.display());
        Ok(rows)
    }

    async fn append(&self, row: Vec<String>) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut bytes = if self.needs_header().await? {
            encode([self.columns])?
        } else {
            Vec::new()
        };
        bytes.extend(encode([&row])?);

        self.write_bytes(&bytes).await
    }
}
