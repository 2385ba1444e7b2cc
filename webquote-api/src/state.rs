use std::sync::Arc;
use webquote_core::{DocumentRenderer, QuotationLedger};
use webquote_engine::{QuoteEngine, SummaryTerms};
use webquote_export::{DocumentExporter, PageLayout};
use webquote_store::Config;

#[derive(Clone)]
pub struct AppState {
    pub engine: QuoteEngine,
    pub ledger: Arc<dyn QuotationLedger>,
    pub documents: Arc<DocumentExporter>,
    pub terms: SummaryTerms,
}

impl AppState {
    pub fn new(
        ledger: Arc<dyn QuotationLedger>,
        renderer: Arc<dyn DocumentRenderer>,
        terms: SummaryTerms,
        layout: PageLayout,
    ) -> Self {
        Self {
            engine: QuoteEngine::default(),
            ledger,
            documents: Arc::new(DocumentExporter::new(renderer, layout)),
            terms,
        }
    }

    pub fn from_config(
        config: &Config,
        ledger: Arc<dyn QuotationLedger>,
        renderer: Arc<dyn DocumentRenderer>,
    ) -> Self {
        let terms = SummaryTerms {
            gst_rate_percent: config.business_rules.gst_rate_percent,
            validity_days: config.business_rules.quote_validity_days,
        };
        let layout = PageLayout {
            page_height_mm: config.document.page_height_mm,
        };
        Self::new(ledger, renderer, terms, layout)
    }
}
