use chrono::{DateTime, Utc};
use webquote_catalog::{label, non_empty, Category, PriceTable, Selection, TechSlot};
use webquote_engine::currency::format_rupees;
use webquote_engine::{quotation_id, CostResult, TimelineEstimate};
use webquote_shared::QuotationRecord;

const NOT_AVAILABLE: &str = "N/A";

/// Values a ledger row falls back to when the form left a field blank.
mod defaults {
    pub const PROJECT_TYPE: &str = "website";
    pub const WEBSITE_TYPE: &str = "informational";
    pub const FRONTEND: &str = "react";
    pub const BACKEND: &str = "nodejs";
    pub const DATABASE: &str = "mysql";
    pub const HOSTING: &str = "shared_hosting";
    pub const DEVOPS: &str = "basic_deployment";
    pub const ADDITIONAL_SERVICES: &str = "ssl";
    pub const PERFORMANCE_LEVEL: &str = "basic";
    pub const LOGO_DESIGN: &str = "no";
    pub const CMS: &str = "wordpress";
    pub const ACCESSIBILITY: &str = "basic";
    pub const DEVICE_COMPATIBILITY: &[&str] = &["desktop", "mobile"];
    pub const PAYMENT_GATEWAY: &[&str] = &["razorpay"];
    pub const MULTILINGUAL_SUPPORT: &[&str] = &["English"];
    pub const TARGET_AUDIENCE: &[&str] = &["General Public"];
}

fn or_default<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    non_empty(value).unwrap_or(default)
}

/// Joins a multi-valued field, substituting `default` when nothing usable
/// was chosen.
fn join_or_default(values: &[String], default: &[&str]) -> String {
    let blank = values.is_empty() || (values.len() == 1 && values[0].trim().is_empty());
    if blank {
        default.join(", ")
    } else {
        values.join(", ")
    }
}

fn labelled(category: Category, value: &Option<String>, default: &str) -> String {
    label(category, or_default(value, default))
}

fn selected_features(selection: &Selection, table: &PriceTable) -> String {
    let labels: Vec<String> = table
        .options(Category::Feature)
        .iter()
        .filter(|(key, _)| selection.is_enabled(key))
        .map(|(key, _)| label(Category::Feature, key))
        .collect();

    if labels.is_empty() {
        "Basic features only".to_string()
    } else {
        labels.join(", ")
    }
}

/// Flattens a priced selection into a ledger row.
///
/// Blank fields are filled from the default table and codes are replaced by
/// their labels. `cost` and `timeline` are copied as given; `table` only
/// fixes the order of the selected features.
pub fn project(
    selection: &Selection,
    table: &PriceTable,
    cost: &CostResult,
    timeline: &TimelineEstimate,
    issued_at: DateTime<Utc>,
) -> QuotationRecord {
    let text = |value: &Option<String>, default: &str| or_default(value, default).to_string();
    let tech = |slot: TechSlot, default: &str| {
        label(Category::Tech(slot), selection.tech(slot).unwrap_or(default))
    };

    QuotationRecord {
        quotation_id: quotation_id(issued_at),
        generated_date: issued_at.date_naive().format("%Y-%m-%d").to_string(),
        client_name: text(&selection.client_name, NOT_AVAILABLE),
        company_name: text(&selection.company_name, NOT_AVAILABLE),
        project_title: text(&selection.project_title, "Untitled Project"),
        email: text(&selection.email, NOT_AVAILABLE),
        phone: text(&selection.phone, NOT_AVAILABLE),
        address: text(&selection.address, NOT_AVAILABLE),
        preferred_start_date: text(&selection.preferred_start_date, "To be decided"),
        project_type: text(&selection.project_type, defaults::PROJECT_TYPE),
        target_audience: join_or_default(&selection.target_audience, defaults::TARGET_AUDIENCE),
        project_goal: text(&selection.project_goal, NOT_AVAILABLE),
        device_compatibility: join_or_default(
            &selection.device_compatibility,
            defaults::DEVICE_COMPATIBILITY,
        ),
        website_type: labelled(
            Category::WebsiteType,
            &selection.website_type,
            defaults::WEBSITE_TYPE,
        ),
        cms_required: labelled(Category::Cms, &selection.cms, defaults::CMS),
        accessibility_compliance: labelled(
            Category::Accessibility,
            &selection.accessibility,
            defaults::ACCESSIBILITY,
        ),
        logo_design: labelled(
            Category::LogoDesign,
            &selection.logo_design,
            defaults::LOGO_DESIGN,
        ),
        performance_level: labelled(
            Category::PerformanceLevel,
            &selection.performance_level,
            defaults::PERFORMANCE_LEVEL,
        ),
        frontend_tech: tech(TechSlot::Frontend, defaults::FRONTEND),
        backend_tech: tech(TechSlot::Backend, defaults::BACKEND),
        database_tech: tech(TechSlot::Database, defaults::DATABASE),
        hosting_tech: tech(TechSlot::Hosting, defaults::HOSTING),
        devops_tech: tech(TechSlot::Devops, defaults::DEVOPS),
        additional_services: tech(TechSlot::AdditionalServices, defaults::ADDITIONAL_SERVICES),
        selected_features: selected_features(selection, table),
        payment_gateways: join_or_default(&selection.payment_gateway, defaults::PAYMENT_GATEWAY),
        multilingual_support: join_or_default(
            &selection.multilingual_support,
            defaults::MULTILINGUAL_SUPPORT,
        ),
        base_cost: cost.base_cost,
        features_cost: cost.features_cost,
        total_cost_inr: cost.total_cost,
        timeline: timeline.to_string(),
        formatted_base_cost: format_rupees(cost.base_cost),
        formatted_features_cost: format_rupees(cost.features_cost),
        formatted_total_inr: format_rupees(cost.total_cost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use webquote_engine::QuoteEngine;

    fn issued() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap()
    }

    fn record(selection: &Selection) -> QuotationRecord {
        let engine = QuoteEngine::default();
        let quote = engine.quote(selection);
        project(selection, engine.table(), &quote.cost, &quote.timeline, issued())
    }

    #[test]
    fn test_blank_selection_is_filled_with_defaults() {
        let record = record(&Selection::default());

        assert_eq!(record.client_name, "N/A");
        assert_eq!(record.project_title, "Untitled Project");
        assert_eq!(record.preferred_start_date, "To be decided");
        assert_eq!(record.project_type, "website");
        assert_eq!(record.website_type, "Informational Website");
        assert_eq!(record.frontend_tech, "React.js");
        assert_eq!(record.backend_tech, "Node.js + Express");
        assert_eq!(record.cms_required, "WordPress");
        assert_eq!(record.device_compatibility, "desktop, mobile");
        assert_eq!(record.payment_gateways, "razorpay");
        assert_eq!(record.multilingual_support, "English");
        assert_eq!(record.target_audience, "General Public");
        assert_eq!(record.selected_features, "Basic features only");
    }

    #[test]
    fn test_costs_are_copied_not_recomputed() {
        // Defaults fill the record only; the price still reflects the
        // empty selection.
        let record = record(&Selection::default());

        assert_eq!(record.base_cost, 30_000);
        assert_eq!(record.features_cost, 0);
        assert_eq!(record.total_cost_inr, 30_000);
        assert_eq!(record.formatted_total_inr, "₹30,000");
        assert_eq!(record.timeline, "6-8 weeks");
    }

    #[test]
    fn test_identity_fields() {
        let record = record(&Selection::default());

        assert_eq!(record.quotation_id, format!("QTN-{}", issued().timestamp_millis()));
        assert_eq!(record.generated_date, "2024-03-15");
    }

    #[test]
    fn test_labels_and_feature_order() {
        let selection = Selection {
            client_name: Some("Asha Rao".into()),
            website_type: Some("ecommerce".into()),
            performance_level: Some("enterprise".into()),
            accessibility: Some("wcag".into()),
            payment_gateway: vec!["stripe".into(), "paypal".into()],
            ..Default::default()
        }
        .with_feature("shoppingCart", true)
        .with_feature("adminPanel", true)
        .with_feature("seoSetup", false);

        let record = record(&selection);

        assert_eq!(record.client_name, "Asha Rao");
        assert_eq!(record.website_type, "eCommerce Store");
        assert_eq!(record.performance_level, "Enterprise Performance");
        assert_eq!(record.accessibility_compliance, "Full WCAG 2.1 Compliance");
        assert_eq!(record.selected_features, "Admin Panel, Shopping Cart");
        assert_eq!(record.payment_gateways, "stripe, paypal");
    }

    #[test]
    fn test_unknown_codes_pass_through() {
        let selection = Selection {
            website_type: Some("spaceship".into()),
            frontend_tech: Some("cobol".into()),
            ..Default::default()
        };

        let record = record(&selection);

        assert_eq!(record.website_type, "spaceship");
        assert_eq!(record.frontend_tech, "cobol");
    }

    #[test]
    fn test_single_blank_array_entry_uses_default() {
        let selection = Selection {
            target_audience: vec!["  ".into()],
            ..Default::default()
        };

        assert_eq!(record(&selection).target_audience, "General Public");
    }

    #[test]
    fn test_ledger_feature_labels() {
        let selection = Selection {
            website_type: Some("healthcare".into()),
            ..Default::default()
        }
        .with_feature("googleAnalytics", true)
        .with_feature("userAuthentication", true)
        .with_feature("productManagement", true);

        let record = record(&selection);

        assert_eq!(record.selected_features, "User Auth, Product Mgmt, Analytics");
        assert_eq!(record.website_type, "healthcare");
        // Still priced even without a label.
        assert_eq!(record.base_cost, 25_000);
    }

    #[test]
    fn test_padded_codes_are_exported_raw() {
        let selection = Selection {
            website_type: Some(" ecommerce ".into()),
            ..Default::default()
        };

        let record = record(&selection);

        assert_eq!(record.website_type, " ecommerce ");
        assert_eq!(record.base_cost, 30_000);
    }
}
