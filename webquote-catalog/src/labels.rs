use crate::price_table::{Category, TechSlot};

const WEBSITE_TYPES: &[(&str, &str)] = &[
    ("informational", "Informational Website"),
    ("ecommerce", "eCommerce Store"),
    ("booking", "Booking System"),
    ("membership", "Membership Platform"),
    ("dashboard", "Dashboard"),
    ("portfolio", "Portfolio Website"),
    ("realestate", "Real Estate"),
    ("socialmedia", "Social Media Platforms"),
    ("learningmanagementsystem", "Learning Management System"),
    ("fintechapplications", "Fintech Applications"),
    ("saasproduct", "SaaS Products"),
    ("marketplace", "Marketplace"),
    ("newsmagzines", "News / Magazines"),
];

// Short forms used in the ledger's Selected Features column.
const FEATURES: &[(&str, &str)] = &[
    ("adminPanel", "Admin Panel"),
    ("userAuthentication", "User Auth"),
    ("roleBasedAccess", "Role Access"),
    ("productManagement", "Product Mgmt"),
    ("shoppingCart", "Shopping Cart"),
    ("orderTracking", "Order Tracking"),
    ("inventoryManagement", "Inventory Mgmt"),
    ("blogNewsModule", "Blog/News"),
    ("bookingCalendarModule", "Booking Calendar"),
    ("liveChatChatbot", "Live Chat"),
    ("socialMediaIntegration", "Social Media"),
    ("googleAnalytics", "Analytics"),
    ("seoSetup", "SEO Setup"),
];

const LOGO_DESIGN: &[(&str, &str)] = &[
    ("no", "No logo design needed"),
    ("basic", "Basic Logo Design"),
    ("premium", "Premium Logo Design"),
    ("complete_branding", "Complete Brand Identity Package"),
];

const PERFORMANCE_LEVELS: &[(&str, &str)] = &[
    ("basic", "Basic Performance"),
    ("optimized", "Optimized Performance"),
    ("high_performance", "High Performance"),
    ("enterprise", "Enterprise Performance"),
];

const CMS: &[(&str, &str)] = &[
    ("wordpress", "WordPress"),
    ("strapi", "Strapi CMS"),
    ("custom", "Custom CMS"),
];

const ACCESSIBILITY: &[(&str, &str)] = &[
    ("basic", "Basic Accessibility"),
    ("wcag", "Full WCAG 2.1 Compliance"),
];

const FRONTEND: &[(&str, &str)] = &[
    ("react", "React.js"),
    ("vue", "Vue.js"),
    ("angular", "Angular"),
    ("nextjs", "Next.js"),
    ("nuxtjs", "Nuxt.js"),
    ("svelte", "Svelte"),
    ("vanilla", "Vanilla JavaScript"),
    ("jquery", "jQuery"),
    ("bootstrap", "Bootstrap + HTML/CSS"),
    ("tailwind", "Tailwind CSS + HTML"),
];

const BACKEND: &[(&str, &str)] = &[
    ("nodejs", "Node.js + Express"),
    ("python_django", "Python + Django"),
    ("python_flask", "Python + Flask"),
    ("python_fastapi", "Python + FastAPI"),
    ("php_laravel", "PHP + Laravel"),
    ("php_symfony", "PHP + Symfony"),
    ("php_codeigniter", "PHP + CodeIgniter"),
    ("ruby_rails", "Ruby on Rails"),
    ("java_spring", "Java + Spring Boot"),
    ("csharp_dotnet", "C# + .NET Core"),
    ("go", "Go (Golang)"),
    ("rust", "Rust"),
];

const DATABASE: &[(&str, &str)] = &[
    ("mysql", "MySQL"),
    ("postgresql", "PostgreSQL"),
    ("mongodb", "MongoDB"),
    ("sqlite", "SQLite"),
    ("redis", "Redis"),
    ("mariadb", "MariaDB"),
    ("oracle", "Oracle Database"),
    ("mssql", "Microsoft SQL Server"),
    ("dynamodb", "AWS DynamoDB"),
    ("firestore", "Google Firestore"),
    ("cassandra", "Apache Cassandra"),
];

const HOSTING: &[(&str, &str)] = &[
    ("aws", "Amazon Web Services (AWS)"),
    ("azure", "Microsoft Azure"),
    ("gcp", "Google Cloud Platform"),
    ("vercel", "Vercel"),
    ("netlify", "Netlify"),
    ("heroku", "Heroku"),
    ("digitalocean", "DigitalOcean"),
    ("linode", "Linode"),
    ("cloudflare", "Cloudflare Pages"),
    ("shared_hosting", "Shared Hosting"),
    ("vps", "VPS Hosting"),
    ("dedicated", "Dedicated Server"),
];

const DEVOPS: &[(&str, &str)] = &[
    ("docker", "Docker"),
    ("kubernetes", "Kubernetes"),
    ("jenkins", "Jenkins CI/CD"),
    ("github_actions", "GitHub Actions"),
    ("gitlab_ci", "GitLab CI/CD"),
    ("terraform", "Terraform"),
    ("ansible", "Ansible"),
    ("nginx", "Nginx"),
    ("apache", "Apache"),
    ("basic_deployment", "Basic Deployment"),
];

const ADDITIONAL_SERVICES: &[(&str, &str)] = &[
    ("cdn", "Content Delivery Network (CDN)"),
    ("ssl", "SSL Certificate"),
    ("monitoring", "Application Monitoring"),
    ("backup", "Automated Backup"),
    ("load_balancer", "Load Balancer"),
    ("caching", "Advanced Caching"),
    ("search_engine", "Search Engine (Elasticsearch)"),
    ("email_service", "Email Service Integration"),
    ("analytics", "Advanced Analytics"),
    ("security_audit", "Security Audit"),
];

fn table(category: Category) -> &'static [(&'static str, &'static str)] {
    match category {
        Category::WebsiteType => WEBSITE_TYPES,
        Category::Feature => FEATURES,
        Category::LogoDesign => LOGO_DESIGN,
        Category::PerformanceLevel => PERFORMANCE_LEVELS,
        Category::Cms => CMS,
        Category::Accessibility => ACCESSIBILITY,
        Category::Tech(TechSlot::Frontend) => FRONTEND,
        Category::Tech(TechSlot::Backend) => BACKEND,
        Category::Tech(TechSlot::Database) => DATABASE,
        Category::Tech(TechSlot::Hosting) => HOSTING,
        Category::Tech(TechSlot::Devops) => DEVOPS,
        Category::Tech(TechSlot::AdditionalServices) => ADDITIONAL_SERVICES,
        // Shown as the raw option key.
        Category::ProjectType | Category::DeviceCompatibility | Category::PaymentGateway => &[],
    }
}

/// Display label for an option key. Unknown keys come back unchanged.
pub fn label(category: Category, key: &str) -> String {
    table(category)
        .iter()
        .find(|(option, _)| *option == key)
        .map(|(_, text)| (*text).to_string())
        .unwrap_or_else(|| key.to_string())
}
