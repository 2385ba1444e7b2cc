pub mod app_config;
pub mod file_ledger;
pub mod memory_ledger;

pub use app_config::{Config, LedgerBackend};
pub use file_ledger::FileLedger;
pub use memory_ledger::InMemoryLedger;

#[cfg(test)]
pub(crate) mod testing {
    use webquote_shared::{PdfRecord, QuotationRecord};

    pub fn quotation(id: &str) -> QuotationRecord {
        QuotationRecord {
            quotation_id: id.to_string(),
            generated_date: "2024-03-15".into(),
            client_name: "Asha Rao".into(),
            company_name: "Rao Textiles".into(),
            project_title: "Storefront".into(),
            email: "asha@raotextiles.in".into(),
            phone: "N/A".into(),
            address: "N/A".into(),
            preferred_start_date: "To be decided".into(),
            project_type: "website".into(),
            target_audience: "General Public".into(),
            project_goal: "N/A".into(),
            device_compatibility: "desktop, mobile".into(),
            website_type: "Informational Website".into(),
            cms_required: "WordPress".into(),
            accessibility_compliance: "Basic Accessibility".into(),
            logo_design: "No logo design needed".into(),
            performance_level: "Basic Performance".into(),
            frontend_tech: "React.js".into(),
            backend_tech: "Node.js + Express".into(),
            database_tech: "MySQL".into(),
            hosting_tech: "Shared Hosting".into(),
            devops_tech: "Basic Deployment".into(),
            additional_services: "SSL Certificate".into(),
            selected_features: "Basic features only".into(),
            payment_gateways: "razorpay".into(),
            multilingual_support: "English".into(),
            base_cost: 50_000,
            features_cost: 0,
            total_cost_inr: 50_000,
            timeline: "5-7 weeks".into(),
            formatted_base_cost: "₹50,000".into(),
            formatted_features_cost: "₹0".into(),
            formatted_total_inr: "₹50,000".into(),
        }
    }

    pub fn document(quotation_id: &str) -> PdfRecord {
        PdfRecord {
            filename: "Quotation_Asha Rao_2024-03-15T10-30-00.pdf".into(),
            client_name: Some("Asha Rao".into()),
            project_title: Some("Storefront".into()),
            total_cost: 50_000,
            generated_date: "2024-03-15T10:30:00+00:00".into(),
            quotation_id: quotation_id.to_string(),
        }
    }
}
