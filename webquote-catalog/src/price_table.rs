use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Slot of the technology-stack section. Each slot has its own tariff table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TechSlot {
    Frontend,
    Backend,
    Database,
    Hosting,
    Devops,
    AdditionalServices,
}

impl TechSlot {
    pub const ALL: [TechSlot; 6] = [
        TechSlot::Frontend,
        TechSlot::Backend,
        TechSlot::Database,
        TechSlot::Hosting,
        TechSlot::Devops,
        TechSlot::AdditionalServices,
    ];

    /// Caption used when a slot is listed in a summary.
    pub fn title(self) -> &'static str {
        match self {
            TechSlot::Frontend => "Frontend",
            TechSlot::Backend => "Backend",
            TechSlot::Database => "Database",
            TechSlot::Hosting => "Hosting",
            TechSlot::Devops => "DevOps",
            TechSlot::AdditionalServices => "Services",
        }
    }
}

/// Priced option category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    WebsiteType,
    Feature,
    PaymentGateway,
    Cms,
    Accessibility,
    DeviceCompatibility,
    ProjectType,
    PerformanceLevel,
    LogoDesign,
    Tech(TechSlot),
}

// Tariffs in whole Rupees.
const WEBSITE_TYPES: &[(&str, u64)] = &[
    ("informational", 50_000),
    ("ecommerce", 150_000),
    ("booking", 100_000),
    ("membership", 120_000),
    ("dashboard", 80_000),
    ("portfolio", 40_000),
    ("realestate", 75_000),
    ("healthcare", 25_000),
    ("socialmedia", 120_000),
    ("learningmanagementsystem", 30_000),
    ("fintechapplications", 50_000),
    ("saasproduct", 60_000),
    ("newsmagzines", 35_000),
    ("marketplace", 80_000),
];

const FEATURES: &[(&str, u64)] = &[
    ("adminPanel", 25_000),
    ("userAuthentication", 20_000),
    ("roleBasedAccess", 15_000),
    ("productManagement", 30_000),
    ("shoppingCart", 35_000),
    ("orderTracking", 20_000),
    ("inventoryManagement", 40_000),
    ("blogNewsModule", 15_000),
    ("bookingCalendarModule", 30_000),
    ("liveChatChatbot", 12_000),
    ("socialMediaIntegration", 8_000),
    ("googleAnalytics", 5_000),
    ("seoSetup", 15_000),
];

const PAYMENT_GATEWAYS: &[(&str, u64)] = &[
    ("stripe", 8_000),
    ("paypal", 8_000),
    ("razorpay", 6_000),
    ("payu", 6_000),
    ("ccavenue", 7_000),
];

const CMS: &[(&str, u64)] = &[("wordpress", 10_000), ("strapi", 15_000), ("custom", 25_000)];

const ACCESSIBILITY: &[(&str, u64)] = &[("basic", 8_000), ("wcag", 25_000)];

const DEVICE_COMPATIBILITY: &[(&str, u64)] =
    &[("desktop", 10_000), ("tablet", 8_000), ("mobile", 12_000)];

const PROJECT_TYPES: &[(&str, u64)] = &[("website", 10_000), ("mobile", 15_000), ("both", 22_000)];

const PERFORMANCE_LEVELS: &[(&str, u64)] = &[
    ("basic", 0),
    ("optimized", 10_000),
    ("high_performance", 25_000),
    ("enterprise", 40_000),
];

const LOGO_DESIGN: &[(&str, u64)] = &[
    ("no", 0),
    ("basic", 8_000),
    ("premium", 15_000),
    ("complete_branding", 25_000),
];

const FRONTEND: &[(&str, u64)] = &[
    ("react", 15_000),
    ("vue", 12_000),
    ("angular", 18_000),
    ("nextjs", 20_000),
    ("nuxtjs", 18_000),
    ("svelte", 15_000),
    ("vanilla", 5_000),
    ("jquery", 8_000),
    ("bootstrap", 5_000),
    ("tailwind", 8_000),
];

const BACKEND: &[(&str, u64)] = &[
    ("nodejs", 15_000),
    ("python_django", 18_000),
    ("python_flask", 12_000),
    ("python_fastapi", 16_000),
    ("php_laravel", 14_000),
    ("php_symfony", 16_000),
    ("php_codeigniter", 10_000),
    ("ruby_rails", 20_000),
    ("java_spring", 22_000),
    ("csharp_dotnet", 20_000),
    ("go", 18_000),
    ("rust", 22_000),
];

const DATABASE: &[(&str, u64)] = &[
    ("mysql", 8_000),
    ("postgresql", 10_000),
    ("mongodb", 12_000),
    ("sqlite", 5_000),
    ("redis", 8_000),
    ("mariadb", 8_000),
    ("oracle", 25_000),
    ("mssql", 15_000),
    ("dynamodb", 15_000),
    ("firestore", 12_000),
    ("cassandra", 20_000),
];

const HOSTING: &[(&str, u64)] = &[
    ("aws", 20_000),
    ("azure", 18_000),
    ("gcp", 18_000),
    ("vercel", 8_000),
    ("netlify", 6_000),
    ("heroku", 10_000),
    ("digitalocean", 12_000),
    ("linode", 10_000),
    ("cloudflare", 8_000),
    ("shared_hosting", 3_000),
    ("vps", 8_000),
    ("dedicated", 15_000),
];

const DEVOPS: &[(&str, u64)] = &[
    ("docker", 15_000),
    ("kubernetes", 25_000),
    ("jenkins", 18_000),
    ("github_actions", 10_000),
    ("gitlab_ci", 12_000),
    ("terraform", 20_000),
    ("ansible", 18_000),
    ("nginx", 8_000),
    ("apache", 6_000),
    ("basic_deployment", 5_000),
];

const ADDITIONAL_SERVICES: &[(&str, u64)] = &[
    ("cdn", 5_000),
    ("ssl", 3_000),
    ("monitoring", 8_000),
    ("backup", 6_000),
    ("load_balancer", 12_000),
    ("caching", 8_000),
    ("search_engine", 15_000),
    ("email_service", 8_000),
    ("analytics", 10_000),
    ("security_audit", 15_000),
];

const PER_LANGUAGE: u64 = 12_000;

/// Option tariffs grouped by category, plus the flat per-language surcharge.
///
/// Options keep their catalogue order so summaries list them the same way
/// every time.
#[derive(Debug, Clone)]
pub struct PriceTable {
    categories: HashMap<Category, Vec<(String, u64)>>,
    per_language: u64,
}

impl PriceTable {
    /// The standard rate card, built once per process.
    pub fn standard() -> &'static PriceTable {
        static STANDARD: OnceLock<PriceTable> = OnceLock::new();
        STANDARD.get_or_init(PriceTable::build_standard)
    }

    fn build_standard() -> Self {
        let mut categories = HashMap::new();
        let mut insert = |category: Category, options: &[(&str, u64)]| {
            categories.insert(
                category,
                options.iter().map(|(key, tariff)| (key.to_string(), *tariff)).collect(),
            );
        };

        insert(Category::WebsiteType, WEBSITE_TYPES);
        insert(Category::Feature, FEATURES);
        insert(Category::PaymentGateway, PAYMENT_GATEWAYS);
        insert(Category::Cms, CMS);
        insert(Category::Accessibility, ACCESSIBILITY);
        insert(Category::DeviceCompatibility, DEVICE_COMPATIBILITY);
        insert(Category::ProjectType, PROJECT_TYPES);
        insert(Category::PerformanceLevel, PERFORMANCE_LEVELS);
        insert(Category::LogoDesign, LOGO_DESIGN);
        insert(Category::Tech(TechSlot::Frontend), FRONTEND);
        insert(Category::Tech(TechSlot::Backend), BACKEND);
        insert(Category::Tech(TechSlot::Database), DATABASE);
        insert(Category::Tech(TechSlot::Hosting), HOSTING);
        insert(Category::Tech(TechSlot::Devops), DEVOPS);
        insert(Category::Tech(TechSlot::AdditionalServices), ADDITIONAL_SERVICES);

        Self {
            categories,
            per_language: PER_LANGUAGE,
        }
    }

    /// Tariff of `key` in `category`, `None` when the option is unknown.
    pub fn tariff(&self, category: Category, key: &str) -> Option<u64> {
        self.options(category)
            .iter()
            .find(|(option, _)| option == key)
            .map(|(_, tariff)| *tariff)
    }

    /// Tariff of `key`, zero when unknown.
    pub fn price(&self, category: Category, key: &str) -> u64 {
        self.tariff(category, key).unwrap_or(0)
    }

    /// All options of a category in catalogue order.
    pub fn options(&self, category: Category) -> &[(String, u64)] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn per_language(&self) -> u64 {
        self.per_language
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_lookups() {
        let table = PriceTable::standard();

        assert_eq!(table.tariff(Category::WebsiteType, "ecommerce"), Some(150_000));
        assert_eq!(table.tariff(Category::Tech(TechSlot::Backend), "rust"), Some(22_000));
        assert_eq!(table.price(Category::PerformanceLevel, "enterprise"), 40_000);
        assert_eq!(table.per_language(), 12_000);
    }

    #[test]
    fn test_unknown_key_prices_as_zero() {
        let table = PriceTable::standard();

        assert_eq!(table.tariff(Category::Feature, "teleportation"), None);
        assert_eq!(table.price(Category::Feature, "teleportation"), 0);
        // Keys are not shared across categories.
        assert_eq!(table.tariff(Category::DeviceCompatibility, "website"), None);
    }

    #[test]
    fn test_every_category_is_populated() {
        let table = PriceTable::standard();
        let mut categories = vec![
            Category::WebsiteType,
            Category::Feature,
            Category::PaymentGateway,
            Category::Cms,
            Category::Accessibility,
            Category::DeviceCompatibility,
            Category::ProjectType,
            Category::PerformanceLevel,
            Category::LogoDesign,
        ];
        categories.extend(TechSlot::ALL.iter().map(|slot| Category::Tech(*slot)));

        for category in categories {
            assert!(!table.options(category).is_empty(), "{:?} has no options", category);
        }
    }

    #[test]
    fn test_features_keep_catalogue_order() {
        let table = PriceTable::standard();
        let keys: Vec<&str> = table
            .options(Category::Feature)
            .iter()
            .map(|(key, _)| key.as_str())
            .collect();

        assert_eq!(keys.first(), Some(&"adminPanel"));
        assert_eq!(keys.last(), Some(&"seoSetup"));
        assert_eq!(keys.len(), 13);
    }

    #[test]
    fn test_standard_is_shared() {
        assert!(std::ptr::eq(PriceTable::standard(), PriceTable::standard()));
    }
}
