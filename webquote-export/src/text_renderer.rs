use async_trait::async_trait;
use std::fmt::Write;
use webquote_core::{CoreError, CoreResult, DocumentFormat, DocumentRenderer, RenderedDocument};
use webquote_engine::currency::format_rupees;
use webquote_shared::{QuotationSummary, SummaryLine};

/// Millimetres per printed line, used to estimate content height.
pub const LINE_HEIGHT_MM: f64 = 6.0;

const DATE_FORMAT: &str = "%-d %B %Y";

/// Lays a quotation summary out as plain UTF-8 text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextRenderer;

impl PlainTextRenderer {
    pub fn render_text(&self, summary: &QuotationSummary) -> Result<String, std::fmt::Error> {
        let mut out = String::new();

        writeln!(out, "Website Development Quotation")?;
        writeln!(out, "Quotation ID: {}", summary.quotation_id)?;
        writeln!(out, "Date: {}", summary.issued_on.format(DATE_FORMAT))?;

        for section in &summary.sections {
            writeln!(out)?;
            writeln!(out, "{}", section.title)?;
            for line in &section.lines {
                match line {
                    SummaryLine::Field { label, value } => writeln!(out, "  {}: {}", label, value)?,
                    SummaryLine::Item(text) => writeln!(out, "  • {}", text)?,
                }
            }
        }

        let investment = &summary.investment;
        writeln!(out)?;
        writeln!(out, "Investment Breakdown")?;
        writeln!(out, "  Base Development: {}", format_rupees(investment.base_cost))?;
        writeln!(
            out,
            "  Additional Features: {}",
            format_rupees(investment.features_cost)
        )?;
        writeln!(out, "  Subtotal: {}", format_rupees(investment.subtotal))?;
        writeln!(
            out,
            "  GST ({}%): {}",
            investment.gst_rate_percent,
            format_rupees(investment.gst_amount)
        )?;
        writeln!(
            out,
            "  Total Investment: {}",
            format_rupees(investment.total_with_gst)
        )?;
        writeln!(out, "  Timeline: {}", investment.timeline)?;

        writeln!(out)?;
        writeln!(
            out,
            "This quotation is valid until {}.",
            summary.valid_until.format(DATE_FORMAT)
        )?;

        Ok(out)
    }
}

#[async_trait]
impl DocumentRenderer for PlainTextRenderer {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::PLAIN_TEXT
    }

    async fn render(&self, summary: &QuotationSummary) -> CoreResult<RenderedDocument> {
        let text = self
            .render_text(summary)
            .map_err(|e| CoreError::RenderError(e.to_string()))?;
        let lines = text.lines().count();

        Ok(RenderedDocument {
            bytes: text.into_bytes(),
            content_height_mm: lines as f64 * LINE_HEIGHT_MM,
        })
    }
}
