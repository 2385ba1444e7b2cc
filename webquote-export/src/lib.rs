pub mod document;
pub mod ledger;
pub mod ledger_csv;
pub mod projection;
pub mod text_renderer;

pub use document::{artifact_name, DocumentExporter, ExportArtifact, ExportError, PageLayout};
pub use ledger::{export_ledger, LedgerExport, LEDGER_FILE_NAME};
pub use ledger_csv::{escape_field, parse_ledger, render_ledger, render_row, LedgerCsvError, HEADERS};
pub use projection::project;
pub use text_renderer::PlainTextRenderer;
