use serde::{Deserialize, Serialize};
use webquote_catalog::{non_empty, Category, PriceTable, Selection, TechSlot};

/// Base fee charged when nothing in the base categories is selected.
pub const MINIMUM_BASE_COST: u64 = 30_000;

/// Cost breakdown in whole Rupees. `total_cost` is always
/// `base_cost + features_cost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostResult {
    pub base_cost: u64,
    pub features_cost: u64,
    pub total_cost: u64,
}

/// Prices a selection against a rate card.
///
/// Unknown or unset options contribute nothing; the function never fails.
pub fn derive_cost(selection: &Selection, table: &PriceTable) -> CostResult {
    let scalar = |category: Category, value: &Option<String>| {
        non_empty(value).map_or(0, |key| table.price(category, key))
    };
    let each = |category: Category, keys: &[String]| -> u64 {
        keys.iter().map(|key| table.price(category, key)).sum()
    };

    let mut base_cost = scalar(Category::ProjectType, &selection.project_type)
        + scalar(Category::WebsiteType, &selection.website_type)
        + scalar(Category::PerformanceLevel, &selection.performance_level)
        + each(Category::DeviceCompatibility, &selection.device_compatibility);

    // Only an exact zero is floored; small positive bases stand.
    if base_cost == 0 {
        base_cost = MINIMUM_BASE_COST;
    }

    let tech_cost: u64 = TechSlot::ALL
        .iter()
        .filter_map(|slot| {
            selection
                .tech(*slot)
                .map(|key| table.price(Category::Tech(*slot), key))
        })
        .sum();

    let feature_toggles: u64 = selection
        .enabled_features()
        .map(|feature| table.price(Category::Feature, feature))
        .sum();

    let languages = selection.multilingual_support.len() as u64 * table.per_language();

    let features_cost = scalar(Category::LogoDesign, &selection.logo_design)
        + tech_cost
        + feature_toggles
        + each(Category::PaymentGateway, &selection.payment_gateway)
        + scalar(Category::Cms, &selection.cms)
        + scalar(Category::Accessibility, &selection.accessibility)
        + languages;

    CostResult {
        base_cost,
        features_cost,
        total_cost: base_cost + features_cost,
    }
}
