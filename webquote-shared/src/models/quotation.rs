use serde::{Deserialize, Serialize};

/// Flattened, labelled and default-filled snapshot of one quotation.
///
/// This is the row shape of the quotation ledger. Every field except the
/// numeric costs is a display string; costs are copied from the engine's
/// result and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationRecord {
    pub quotation_id: String,
    pub generated_date: String,
    pub client_name: String,
    pub company_name: String,
    pub project_title: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub preferred_start_date: String,
    pub project_type: String,
    pub target_audience: String,
    pub project_goal: String,
    pub device_compatibility: String,
    pub website_type: String,
    pub cms_required: String,
    pub accessibility_compliance: String,
    pub logo_design: String,
    pub performance_level: String,
    pub frontend_tech: String,
    pub backend_tech: String,
    pub database_tech: String,
    pub hosting_tech: String,
    pub devops_tech: String,
    pub additional_services: String,
    pub selected_features: String,
    pub payment_gateways: String,
    pub multilingual_support: String,
    pub base_cost: u64,
    pub features_cost: u64,
    #[serde(rename = "totalCostINR")]
    pub total_cost_inr: u64,
    pub timeline: String,
    pub formatted_base_cost: String,
    pub formatted_features_cost: String,
    #[serde(rename = "formattedTotalINR")]
    pub formatted_total_inr: String,
}

/// History entry written after a quotation document has been produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfRecord {
    pub filename: String,
    pub client_name: Option<String>,
    pub project_title: Option<String>,
    pub total_cost: u64,
    pub generated_date: String,
    pub quotation_id: String,
}
