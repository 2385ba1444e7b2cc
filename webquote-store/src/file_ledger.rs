use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info};
use webquote_core::{CoreError, CoreResult, QuotationLedger};
use webquote_shared::{PdfRecord, QuotationRecord};

const QUOTATIONS_FILE: &str = "quotationsTable.json";
const LATEST_FILE: &str = "latestQuotation.json";
const DOCUMENTS_FILE: &str = "generatedPDFs.json";

/// Ledger kept as JSON files in one directory.
///
/// Every write replaces the whole file: the new content goes to a sibling
/// temporary file which is then renamed over the old one, so readers see
/// either the previous or the next version. A missing file reads as empty.
pub struct FileLedger {
    directory: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileLedger {
    pub async fn open(directory: impl Into<PathBuf>) -> CoreResult<Self> {
        let directory = directory.into();
        fs::create_dir_all(&directory).await.map_err(|e| {
            CoreError::PersistenceError(format!(
                "Failed to create ledger directory {}: {}",
                directory.display(),
                e
            ))
        })?;
        info!("Quotation ledger stored in {}", directory.display());

        Ok(Self {
            directory,
            write_lock: Mutex::new(()),
        })
    }

    fn path(&self, file: &str) -> PathBuf {
        self.directory.join(file)
    }

    async fn read<T: DeserializeOwned>(&self, file: &str) -> CoreResult<Option<T>> {
        let path = self.path(file);
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(CoreError::PersistenceError(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        serde_json::from_str(&content).map(Some).map_err(|e| {
            CoreError::PersistenceError(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    async fn write<T: Serialize + ?Sized>(&self, file: &str, value: &T) -> CoreResult<()> {
        let path = self.path(file);
        let content = serde_json::to_string_pretty(value)
            .map_err(|e| CoreError::PersistenceError(format!("Failed to encode {}: {}", file, e)))?;

        let staging = self.path(&format!("{}.tmp", file));
        fs::write(&staging, content).await.map_err(|e| {
            CoreError::PersistenceError(format!("Failed to write {}: {}", staging.display(), e))
        })?;
        fs::rename(&staging, &path).await.map_err(|e| {
            CoreError::PersistenceError(format!("Failed to replace {}: {}", path.display(), e))
        })?;
        debug!("Wrote {}", path.display());
        Ok(())
    }

    async fn remove(&self, file: &str) -> CoreResult<()> {
        let path = self.path(file);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CoreError::PersistenceError(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

#[async_trait]
impl QuotationLedger for FileLedger {
    async fn list_quotations(&self) -> CoreResult<Vec<QuotationRecord>> {
        Ok(self.read(QUOTATIONS_FILE).await?.unwrap_or_default())
    }

    async fn append_quotation(&self, record: &QuotationRecord) -> CoreResult<()> {
        let _lock = self.write_lock.lock().await;

        let mut records: Vec<QuotationRecord> = self.read(QUOTATIONS_FILE).await?.unwrap_or_default();
        records.push(record.clone());
        self.write(QUOTATIONS_FILE, &records).await?;
        self.write(LATEST_FILE, record).await
    }

    async fn latest_quotation(&self) -> CoreResult<Option<QuotationRecord>> {
        self.read(LATEST_FILE).await
    }

    async fn clear_quotations(&self) -> CoreResult<()> {
        let _lock = self.write_lock.lock().await;

        self.remove(QUOTATIONS_FILE).await?;
        self.remove(LATEST_FILE).await?;
        info!("Quotation ledger cleared");
        Ok(())
    }

    async fn list_documents(&self) -> CoreResult<Vec<PdfRecord>> {
        Ok(self.read(DOCUMENTS_FILE).await?.unwrap_or_default())
    }

    async fn append_document(&self, record: &PdfRecord) -> CoreResult<()> {
        let _lock = self.write_lock.lock().await;

        let mut records: Vec<PdfRecord> = self.read(DOCUMENTS_FILE).await?.unwrap_or_default();
        records.push(record.clone());
        self.write(DOCUMENTS_FILE, &records).await
    }

    async fn clear_documents(&self) -> CoreResult<()> {
        let _lock = self.write_lock.lock().await;

        self.remove(DOCUMENTS_FILE).await?;
        info!("Document history cleared");
        Ok(())
    }
}
