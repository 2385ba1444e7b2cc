use serde::Serialize;
use webquote_catalog::{PriceTable, Selection};

use crate::cost::{derive_cost, CostResult};
use crate::timeline::{estimate_timeline, TimelineEstimate};

/// Price and delivery window of one selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub cost: CostResult,
    pub timeline: TimelineEstimate,
}

/// Prices selections against a fixed rate card.
#[derive(Debug, Clone, Copy)]
pub struct QuoteEngine {
    table: &'static PriceTable,
}

impl QuoteEngine {
    pub fn new(table: &'static PriceTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'static PriceTable {
        self.table
    }

    pub fn quote(&self, selection: &Selection) -> Quote {
        Quote {
            cost: derive_cost(selection, self.table),
            timeline: estimate_timeline(selection),
        }
    }
}

impl Default for QuoteEngine {
    fn default() -> Self {
        Self::new(PriceTable::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_combines_cost_and_timeline() {
        let engine = QuoteEngine::default();
        let selection = Selection {
            website_type: Some("informational".into()),
            ..Default::default()
        };

        let quote = engine.quote(&selection);

        assert_eq!(quote.cost.total_cost, 50_000);
        assert_eq!(quote.timeline.to_string(), "5-7 weeks");
    }

    #[test]
    fn test_quote_serializes_camel_case_cost() {
        let quote = QuoteEngine::default().quote(&Selection::default());
        let json = serde_json::to_value(quote).unwrap();

        assert_eq!(json["cost"]["baseCost"], 30_000);
        assert_eq!(json["timeline"]["low"], 6);
    }
}
