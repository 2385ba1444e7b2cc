use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{error, info, warn};
use webquote_core::{CoreError, DocumentRenderer, QuotationLedger};
use webquote_shared::{PdfRecord, QuotationSummary};

/// Page geometry in millimetres. Content is placed as one tall image and
/// sliced across pages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub page_height_mm: f64,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            page_height_mm: 287.0,
        }
    }
}

impl PageLayout {
    /// Pages needed for content of the given height.
    ///
    /// The first page is always emitted, then one more for every full page
    /// height of content, so content of exactly one page height yields a
    /// trailing page. A non-finite height is rejected.
    pub fn page_count(&self, content_height_mm: f64) -> Result<usize, ExportError> {
        if !content_height_mm.is_finite() {
            return Err(ExportError::Render(format!(
                "renderer reported a content height of {} mm",
                content_height_mm
            )));
        }
        if !self.page_height_mm.is_finite() || self.page_height_mm <= 0.0 {
            return Ok(1);
        }
        if content_height_mm < self.page_height_mm {
            return Ok(1);
        }

        // Saturates for absurdly tall content.
        let full_pages = (content_height_mm / self.page_height_mm).floor() as usize;
        Ok(full_pages.saturating_add(1))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to generate document: {0}")]
    Render(String),
}

/// Named binary artifact ready for download.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
    pub pages: usize,
}

/// `Quotation_{client}_{YYYY-MM-DDTHH-MM-SS}.{extension}`.
///
/// Characters that are not allowed in file names are replaced with `_`.
pub fn artifact_name(client_name: Option<&str>, at: DateTime<Utc>, extension: &str) -> String {
    let client: String = client_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or("Client")
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    format!(
        "Quotation_{}_{}.{}",
        client,
        at.format("%Y-%m-%dT%H-%M-%S"),
        extension
    )
}

/// Decrements the in-flight counter when dropped.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Drives a renderer and records what it produced.
pub struct DocumentExporter {
    renderer: Arc<dyn DocumentRenderer>,
    layout: PageLayout,
    in_flight: AtomicUsize,
}

impl DocumentExporter {
    pub fn new(renderer: Arc<dyn DocumentRenderer>, layout: PageLayout) -> Self {
        Self {
            renderer,
            layout,
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Renders currently running.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Renders `summary` and appends a history entry to `ledger`.
    ///
    /// A renderer failure is returned as-is and never retried. A history
    /// write failure is logged and the artifact is still returned.
    pub async fn export(
        &self,
        summary: &QuotationSummary,
        ledger: &dyn QuotationLedger,
        at: DateTime<Utc>,
    ) -> Result<ExportArtifact, ExportError> {
        let _guard = InFlight::enter(&self.in_flight);

        let rendered = self.renderer.render(summary).await.map_err(|e| {
            error!(quotation_id = %summary.quotation_id, "Document render failed: {}", e);
            match e {
                CoreError::RenderError(reason) => ExportError::Render(reason),
                other => ExportError::Render(other.to_string()),
            }
        })?;

        let format = self.renderer.format();
        let file_name = artifact_name(summary.client_name.as_deref(), at, format.extension);
        let pages = self.layout.page_count(rendered.content_height_mm).map_err(|e| {
            error!(quotation_id = %summary.quotation_id, "Unusable render output: {}", e);
            e
        })?;

        let record = PdfRecord {
            filename: file_name.clone(),
            client_name: summary.client_name.clone(),
            project_title: summary.project_title.clone(),
            total_cost: summary.investment.subtotal,
            generated_date: at.to_rfc3339(),
            quotation_id: summary.quotation_id.clone(),
        };
        if let Err(e) = ledger.append_document(&record).await {
            warn!(file_name = %file_name, "Failed to record generated document: {}", e);
        }

        info!(file_name = %file_name, pages, "Document generated");

        Ok(ExportArtifact {
            file_name,
            content_type: format.content_type,
            bytes: rendered.bytes,
            pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::testing::FakeLedger;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use webquote_catalog::Selection;
    use webquote_core::{CoreResult, DocumentFormat, RenderedDocument};
    use webquote_engine::{build_summary, QuoteEngine, SummaryTerms};

    struct FixedRenderer {
        height_mm: f64,
    }

    #[async_trait]
    impl DocumentRenderer for FixedRenderer {
        fn format(&self) -> DocumentFormat {
            DocumentFormat::PDF
        }

        async fn render(&self, _summary: &QuotationSummary) -> CoreResult<RenderedDocument> {
            Ok(RenderedDocument {
                bytes: b"%PDF-1.4".to_vec(),
                content_height_mm: self.height_mm,
            })
        }
    }

    struct FailingRenderer;

    #[async_trait]
    impl DocumentRenderer for FailingRenderer {
        fn format(&self) -> DocumentFormat {
            DocumentFormat::PDF
        }

        async fn render(&self, _summary: &QuotationSummary) -> CoreResult<RenderedDocument> {
            Err(CoreError::RenderError("rasterizer not loaded".into()))
        }
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 45).unwrap()
    }

    fn summary(client: Option<&str>) -> QuotationSummary {
        let selection = Selection {
            client_name: client.map(String::from),
            project_title: Some("Storefront".into()),
            website_type: Some("informational".into()),
            ..Default::default()
        };
        let engine = QuoteEngine::default();
        let quote = engine.quote(&selection);
        build_summary(
            &selection,
            engine.table(),
            &quote.cost,
            &quote.timeline,
            SummaryTerms::default(),
            at(),
        )
    }

    #[test]
    fn test_page_count_follows_slicing_loop() {
        let layout = PageLayout::default();

        assert_eq!(layout.page_count(-10.0).unwrap(), 1);
        assert_eq!(layout.page_count(0.0).unwrap(), 1);
        assert_eq!(layout.page_count(286.9).unwrap(), 1);
        assert_eq!(layout.page_count(287.0).unwrap(), 2);
        assert_eq!(layout.page_count(400.0).unwrap(), 2);
        assert_eq!(layout.page_count(574.0).unwrap(), 3);
    }

    #[test]
    fn test_page_count_of_extreme_heights() {
        let layout = PageLayout::default();

        assert!(matches!(layout.page_count(f64::INFINITY), Err(ExportError::Render(_))));
        assert!(matches!(layout.page_count(f64::NAN), Err(ExportError::Render(_))));
        assert_eq!(layout.page_count(287.0 * 1_000_000.0).unwrap(), 1_000_001);

        let tiny = PageLayout {
            page_height_mm: f64::MIN_POSITIVE,
        };
        assert_eq!(tiny.page_count(1.0).unwrap(), usize::MAX);
    }

    #[test]
    fn test_artifact_name() {
        assert_eq!(
            artifact_name(Some("Asha Rao"), at(), "pdf"),
            "Quotation_Asha Rao_2024-03-15T10-30-45.pdf"
        );
        assert_eq!(
            artifact_name(None, at(), "pdf"),
            "Quotation_Client_2024-03-15T10-30-45.pdf"
        );
        assert_eq!(
            artifact_name(Some("A/B \"Co\""), at(), "txt"),
            "Quotation_A_B _Co__2024-03-15T10-30-45.txt"
        );
    }

    #[tokio::test]
    async fn test_export_records_history() {
        let exporter = DocumentExporter::new(
            Arc::new(FixedRenderer { height_mm: 400.0 }),
            PageLayout::default(),
        );
        let ledger = FakeLedger::default();
        let summary = summary(Some("Asha"));

        let artifact = exporter.export(&summary, &ledger, at()).await.unwrap();

        assert_eq!(artifact.file_name, "Quotation_Asha_2024-03-15T10-30-45.pdf");
        assert_eq!(artifact.content_type, "application/pdf");
        assert_eq!(artifact.pages, 2);
        assert_eq!(exporter.in_flight(), 0);

        let documents = ledger.documents.lock().unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].filename, artifact.file_name);
        assert_eq!(documents[0].project_title.as_deref(), Some("Storefront"));
        assert_eq!(documents[0].total_cost, 50_000);
        assert_eq!(documents[0].quotation_id, summary.quotation_id);
    }

    #[tokio::test]
    async fn test_render_failure_is_reported_and_guard_released() {
        let exporter = DocumentExporter::new(Arc::new(FailingRenderer), PageLayout::default());
        let ledger = FakeLedger::default();

        let err = exporter
            .export(&summary(None), &ledger, at())
            .await
            .unwrap_err();

        assert!(matches!(err, ExportError::Render(ref reason) if reason == "rasterizer not loaded"));
        assert_eq!(exporter.in_flight(), 0);
        assert!(ledger.documents.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_history_failure_still_returns_artifact() {
        let exporter = DocumentExporter::new(
            Arc::new(FixedRenderer { height_mm: 100.0 }),
            PageLayout::default(),
        );

        let artifact = exporter
            .export(&summary(Some("Asha")), &FakeLedger::broken(), at())
            .await
            .unwrap();

        assert_eq!(artifact.pages, 1);
        assert_eq!(artifact.bytes, b"%PDF-1.4".to_vec());
    }

    #[tokio::test]
    async fn test_infinite_height_is_a_render_error() {
        let exporter = DocumentExporter::new(
            Arc::new(FixedRenderer {
                height_mm: f64::INFINITY,
            }),
            PageLayout::default(),
        );
        let ledger = FakeLedger::default();

        let err = exporter
            .export(&summary(Some("Asha")), &ledger, at())
            .await
            .unwrap_err();

        assert!(matches!(err, ExportError::Render(_)));
        assert_eq!(exporter.in_flight(), 0);
        assert!(ledger.documents.lock().unwrap().is_empty());
    }
}
