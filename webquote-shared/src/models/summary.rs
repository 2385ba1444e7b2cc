use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Presentation model of a quotation, consumed by document renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationSummary {
    pub quotation_id: String,
    pub client_name: Option<String>,
    pub project_title: Option<String>,
    pub issued_on: NaiveDate,
    pub valid_until: NaiveDate,
    pub sections: Vec<SummarySection>,
    pub investment: InvestmentBreakdown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarySection {
    pub title: String,
    pub lines: Vec<SummaryLine>,
}

impl SummarySection {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn field(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.lines.push(SummaryLine::Field {
            label: label.into(),
            value: value.into(),
        });
    }

    pub fn item(&mut self, text: impl Into<String>) {
        self.lines.push(SummaryLine::Item(text.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum SummaryLine {
    Field { label: String, value: String },
    Item(String),
}

/// Cost table printed at the end of a quotation. GST is applied here, on top
/// of the engine's total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentBreakdown {
    pub base_cost: u64,
    pub features_cost: u64,
    pub subtotal: u64,
    pub gst_rate_percent: u64,
    pub gst_amount: u64,
    pub total_with_gst: u64,
    pub timeline: String,
}
