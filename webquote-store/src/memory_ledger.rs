use async_trait::async_trait;
use tokio::sync::RwLock;
use webquote_core::{CoreResult, QuotationLedger};
use webquote_shared::{PdfRecord, QuotationRecord};

#[derive(Default)]
struct Tables {
    quotations: Vec<QuotationRecord>,
    latest: Option<QuotationRecord>,
    documents: Vec<PdfRecord>,
}

/// Process-local ledger. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryLedger {
    tables: RwLock<Tables>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuotationLedger for InMemoryLedger {
    async fn list_quotations(&self) -> CoreResult<Vec<QuotationRecord>> {
        Ok(self.tables.read().await.quotations.clone())
    }

    async fn append_quotation(&self, record: &QuotationRecord) -> CoreResult<()> {
        let mut tables = self.tables.write().await;
        tables.quotations.push(record.clone());
        tables.latest = Some(record.clone());
        Ok(())
    }

    async fn latest_quotation(&self) -> CoreResult<Option<QuotationRecord>> {
        Ok(self.tables.read().await.latest.clone())
    }

    async fn clear_quotations(&self) -> CoreResult<()> {
        let mut tables = self.tables.write().await;
        tables.quotations.clear();
        tables.latest = None;
        Ok(())
    }

    async fn list_documents(&self) -> CoreResult<Vec<PdfRecord>> {
        Ok(self.tables.read().await.documents.clone())
    }

    async fn append_document(&self, record: &PdfRecord) -> CoreResult<()> {
        self.tables.write().await.documents.push(record.clone());
        Ok(())
    }

    async fn clear_documents(&self) -> CoreResult<()> {
        self.tables.write().await.documents.clear();
        Ok(())
    }
}
