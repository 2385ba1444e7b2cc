use async_trait::async_trait;
use serde::Serialize;
use webquote_shared::QuotationSummary;

use crate::CoreResult;

/// File type produced by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentFormat {
    pub extension: &'static str,
    pub content_type: &'static str,
}

impl DocumentFormat {
    pub const PDF: DocumentFormat = DocumentFormat {
        extension: "pdf",
        content_type: "application/pdf",
    };

    pub const PLAIN_TEXT: DocumentFormat = DocumentFormat {
        extension: "txt",
        content_type: "text/plain; charset=utf-8",
    };
}

#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    /// Height of the laid-out content, used for pagination.
    pub content_height_mm: f64,
}

/// Turns a quotation summary into a binary document.
///
/// Implementations wrap whatever rasterization or encoding library is
/// available; failures are reported with a reason and never retried.
#[async_trait]
pub trait DocumentRenderer: Send + Sync {
    fn format(&self) -> DocumentFormat;

    async fn render(&self, summary: &QuotationSummary) -> CoreResult<RenderedDocument>;
}
