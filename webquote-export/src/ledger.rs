use tracing::{info, warn};
use webquote_core::QuotationLedger;
use webquote_shared::QuotationRecord;

use crate::ledger_csv::render_ledger;

pub const LEDGER_FILE_NAME: &str = "quotations_master_file.xls";
pub const LEDGER_CONTENT_TYPE: &str = "application/vnd.ms-excel; charset=utf-8";

/// Downloadable ledger spreadsheet.
#[derive(Debug, Clone)]
pub struct LedgerExport {
    pub file_name: &'static str,
    pub content_type: &'static str,
    pub content: String,
    pub rows: usize,
}

/// Appends `record` to the ledger history and renders the full spreadsheet.
///
/// Storage problems never block the download: an unreadable history is
/// treated as empty and a failed write is only logged.
pub async fn export_ledger(ledger: &dyn QuotationLedger, record: QuotationRecord) -> LedgerExport {
    let mut records = match ledger.list_quotations().await {
        Ok(records) => records,
        Err(e) => {
            warn!("Quotation history unavailable, exporting current quotation only: {}", e);
            Vec::new()
        }
    };

    if let Err(e) = ledger.append_quotation(&record).await {
        warn!(quotation_id = %record.quotation_id, "Failed to persist quotation: {}", e);
    }

    records.push(record);
    let content = render_ledger(&records);
    info!(rows = records.len(), "Ledger exported");

    LedgerExport {
        file_name: LEDGER_FILE_NAME,
        content_type: LEDGER_CONTENT_TYPE,
        content,
        rows: records.len(),
    }
}
