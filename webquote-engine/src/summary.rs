use chrono::{DateTime, Duration, Utc};
use webquote_catalog::{label, non_empty, Category, PriceTable, Selection, TechSlot};
use webquote_shared::{InvestmentBreakdown, QuotationSummary, SummarySection};

use crate::cost::CostResult;
use crate::currency::gst_amount;
use crate::timeline::TimelineEstimate;

const EMPTY: &str = "—";

/// Standard deliverables listed on every quotation.
const PARTICULARS: &[&str] = &[
    "Static website with 5 professional pages",
    "Website Design & UI/UX",
    "Frontend & Backend Development",
    "User Interactive Animations",
    "Comprehensive Testing",
    "Basic SEO & Performance Optimizations",
    "Mobile-responsive design",
    "Cross-browser compatibility",
];

/// Commercial terms printed on a quotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryTerms {
    pub gst_rate_percent: u64,
    pub validity_days: u32,
}

impl Default for SummaryTerms {
    fn default() -> Self {
        Self {
            gst_rate_percent: 18,
            validity_days: 30,
        }
    }
}

/// Quotation id derived from the issue instant.
pub fn quotation_id(issued_at: DateTime<Utc>) -> String {
    format!("QTN-{}", issued_at.timestamp_millis())
}

/// Lays a priced selection out for a document renderer.
///
/// The cost and timeline are reflected as given; only GST is computed here.
pub fn build_summary(
    selection: &Selection,
    table: &PriceTable,
    cost: &CostResult,
    timeline: &TimelineEstimate,
    terms: SummaryTerms,
    issued_at: DateTime<Utc>,
) -> QuotationSummary {
    let text = |value: &Option<String>| non_empty(value).unwrap_or(EMPTY).to_string();
    let labelled = |category: Category, value: &Option<String>| {
        non_empty(value).map_or_else(|| EMPTY.to_string(), |key| label(category, key))
    };

    let mut client = SummarySection::new("Client Information");
    client.field("Client Name", text(&selection.client_name));
    client.field("Company", text(&selection.company_name));
    client.field("Email", text(&selection.email));
    client.field("Phone", text(&selection.phone));

    let mut overview = SummarySection::new("Project Overview");
    overview.field("Project Title", text(&selection.project_title));
    overview.field("Project Goal", text(&selection.project_goal));
    overview.field("Project Type", text(&selection.project_type));
    if let Some(budget) = non_empty(&selection.budget_range) {
        overview.field("Budget Range", budget);
    }
    overview.field(
        "Target Audience",
        if selection.target_audience.is_empty() {
            EMPTY.to_string()
        } else {
            selection.target_audience.join(", ")
        },
    );
    overview.field(
        "Website Type",
        labelled(Category::WebsiteType, &selection.website_type),
    );
    if let Some(pages) = non_empty(&selection.number_of_pages) {
        overview.field("Number of Pages", pages);
    }
    overview.field(
        "Performance Level",
        labelled(Category::PerformanceLevel, &selection.performance_level),
    );
    overview.field("Timeline", timeline.to_string());
    overview.field(
        "Preferred Start Date",
        non_empty(&selection.preferred_start_date).unwrap_or("To be discussed"),
    );
    if !selection.device_compatibility.is_empty() {
        overview.field(
            "Device Compatibility",
            selection.device_compatibility.join(", "),
        );
    }

    let mut stack = SummarySection::new("Technology Stack");
    for slot in TechSlot::ALL {
        if let Some(key) = selection.tech(slot) {
            stack.field(slot.title(), label(Category::Tech(slot), key));
        }
    }

    let mut particulars = SummarySection::new("Website Development Particulars");
    for item in PARTICULARS {
        particulars.item(*item);
    }

    let mut requirements = SummarySection::new("Technical Requirements");
    if let Some(key) = non_empty(&selection.logo_design) {
        requirements.field("Logo Design", label(Category::LogoDesign, key));
    }
    if let Some(key) = non_empty(&selection.cms) {
        requirements.field("CMS", label(Category::Cms, key));
    }
    if let Some(key) = non_empty(&selection.accessibility) {
        requirements.field("Accessibility", label(Category::Accessibility, key));
    }
    if !selection.multilingual_support.is_empty() {
        requirements.field("Languages", selection.multilingual_support.join(", "));
    }

    let mut features = SummarySection::new("Selected Features");
    for (key, _) in table.options(Category::Feature) {
        if selection.is_enabled(key) {
            features.item(label(Category::Feature, key));
        }
    }
    if !selection.payment_gateway.is_empty() {
        let gateways: Vec<String> = selection
            .payment_gateway
            .iter()
            .map(|gateway| gateway.to_uppercase())
            .collect();
        features.item(format!("Payment Gateway: {}", gateways.join(", ")));
    }

    let sections = [client, overview, stack, particulars, requirements, features]
        .into_iter()
        .filter(|section| !section.is_empty())
        .collect();

    let gst = gst_amount(cost.total_cost, terms.gst_rate_percent);
    let issued_on = issued_at.date_naive();

    QuotationSummary {
        quotation_id: quotation_id(issued_at),
        client_name: non_empty(&selection.client_name).map(str::to_string),
        project_title: non_empty(&selection.project_title).map(str::to_string),
        issued_on,
        valid_until: issued_on + Duration::days(i64::from(terms.validity_days)),
        sections,
        investment: InvestmentBreakdown {
            base_cost: cost.base_cost,
            features_cost: cost.features_cost,
            subtotal: cost.total_cost,
            gst_rate_percent: terms.gst_rate_percent,
            gst_amount: gst,
            total_with_gst: cost.total_cost + gst,
            timeline: timeline.to_string(),
        },
    }
}
