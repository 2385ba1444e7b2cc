pub mod models;
pub mod pii;

pub use models::{
    InvestmentBreakdown, PdfRecord, QuotationRecord, QuotationSummary, SummaryLine, SummarySection,
};
pub use pii::Masked;
