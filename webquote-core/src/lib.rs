pub mod render;
pub mod repository;

pub use render::{DocumentFormat, DocumentRenderer, RenderedDocument};
pub use repository::QuotationLedger;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Ledger persistence failed: {0}")]
    PersistenceError(String),
    #[error("Document rendering failed: {0}")]
    RenderError(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
