pub mod quotation;
pub mod summary;

pub use quotation::{PdfRecord, QuotationRecord};
pub use summary::{InvestmentBreakdown, QuotationSummary, SummaryLine, SummarySection};
