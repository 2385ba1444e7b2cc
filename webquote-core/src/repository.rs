use async_trait::async_trait;
use webquote_shared::{PdfRecord, QuotationRecord};

use crate::CoreResult;

/// Append-only history of exported quotations and generated documents.
///
/// There is no update or per-record delete; `clear_quotations` wipes the
/// whole quotation table.
#[async_trait]
pub trait QuotationLedger: Send + Sync {
    async fn list_quotations(&self) -> CoreResult<Vec<QuotationRecord>>;

    /// Appends to the table and replaces the "latest quotation" slot.
    async fn append_quotation(&self, record: &QuotationRecord) -> CoreResult<()>;

    async fn latest_quotation(&self) -> CoreResult<Option<QuotationRecord>>;

    async fn clear_quotations(&self) -> CoreResult<()>;

    async fn list_documents(&self) -> CoreResult<Vec<PdfRecord>>;

    async fn append_document(&self, record: &PdfRecord) -> CoreResult<()>;

    async fn clear_documents(&self) -> CoreResult<()>;
}
