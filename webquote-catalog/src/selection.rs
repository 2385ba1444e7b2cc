use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::price_table::TechSlot;

/// Normalized snapshot of a quotation form.
///
/// Field names follow the form's camelCase keys. A scalar that is missing,
/// empty or blank means "nothing selected"; use [`non_empty`] or the helper
/// accessors instead of reading the options directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Selection {
    // Client and project details. Not priced.
    pub client_name: Option<String>,
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub project_title: Option<String>,
    pub project_goal: Option<String>,
    pub preferred_start_date: Option<String>,
    pub budget_range: Option<String>,
    pub number_of_pages: Option<String>,

    pub project_type: Option<String>,
    pub website_type: Option<String>,
    pub performance_level: Option<String>,
    pub logo_design: Option<String>,
    #[serde(rename = "cmsRequired")]
    pub cms: Option<String>,
    #[serde(rename = "accessibilityCompliance")]
    pub accessibility: Option<String>,

    pub frontend_tech: Option<String>,
    pub backend_tech: Option<String>,
    pub database_tech: Option<String>,
    pub hosting_tech: Option<String>,
    pub devops_tech: Option<String>,
    pub additional_services: Option<String>,

    pub device_compatibility: Vec<String>,
    pub multilingual_support: Vec<String>,
    pub payment_gateway: Vec<String>,
    pub target_audience: Vec<String>,

    /// Toggle switches keyed by feature name.
    pub features: BTreeMap<String, bool>,
}

/// Treats blank strings the same as an unset field.
///
/// Anything else is returned untouched, so a padded key stays unknown.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl Selection {
    pub fn tech(&self, slot: TechSlot) -> Option<&str> {
        let value = match slot {
            TechSlot::Frontend => &self.frontend_tech,
            TechSlot::Backend => &self.backend_tech,
            TechSlot::Database => &self.database_tech,
            TechSlot::Hosting => &self.hosting_tech,
            TechSlot::Devops => &self.devops_tech,
            TechSlot::AdditionalServices => &self.additional_services,
        };
        non_empty(value)
    }

    pub fn is_enabled(&self, feature: &str) -> bool {
        self.features.get(feature).copied().unwrap_or(false)
    }

    /// Keys of every feature switched on, in key order.
    pub fn enabled_features(&self) -> impl Iterator<Item = &str> {
        self.features
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(key, _)| key.as_str())
    }

    pub fn with_feature(mut self, feature: &str, enabled: bool) -> Self {
        self.features.insert(feature.to_string(), enabled);
        self
    }
}
