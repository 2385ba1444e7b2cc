use serde::{Deserialize, Serialize};
use std::fmt;
use webquote_catalog::{non_empty, Selection, TechSlot};

/// Shortest timeline ever quoted, in weeks.
pub const BASELINE_WEEKS: u32 = 4;

/// Technologies that add a week each when picked for frontend, backend or
/// devops.
pub const COMPLEX_TECH: &[&str] = &[
    "angular",
    "java_spring",
    "csharp_dotnet",
    "rust",
    "kubernetes",
    "terraform",
];

/// Devops choices that add two extra weeks of infrastructure work.
pub const ADVANCED_DEVOPS: &[&str] = &["kubernetes", "terraform", "ansible"];

/// Feature toggles that add a week each.
pub const COMPLEX_FEATURES: &[&str] = &[
    "productManagement",
    "shoppingCart",
    "inventoryManagement",
    "bookingCalendarModule",
];

/// Estimated delivery window in weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEstimate {
    pub low: u32,
    pub high: u32,
}

impl fmt::Display for TimelineEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} weeks", self.low, self.high)
    }
}

/// Build complexity of a website type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexityTier {
    High,
    MediumHigh,
    Medium,
    Low,
    Unclassified,
}

impl ComplexityTier {
    pub fn classify(website_type: Option<&str>) -> Self {
        match website_type {
            Some("ecommerce" | "marketplace" | "socialmedia") => ComplexityTier::High,
            Some(
                "membership" | "booking" | "learningmanagementsystem" | "realestate"
                | "fintechapplications" | "saasproduct",
            ) => ComplexityTier::MediumHigh,
            Some("dashboard" | "healthcare" | "newsmagzines") => ComplexityTier::Medium,
            Some("portfolio" | "informational") => ComplexityTier::Low,
            _ => ComplexityTier::Unclassified,
        }
    }

    pub fn weeks(self) -> u32 {
        match self {
            ComplexityTier::High => 6,
            ComplexityTier::MediumHigh => 4,
            ComplexityTier::Medium => 3,
            ComplexityTier::Low => 1,
            ComplexityTier::Unclassified => 2,
        }
    }
}

fn performance_weeks(level: Option<&str>) -> u32 {
    match level {
        Some("optimized") => 1,
        Some("high_performance") => 2,
        Some("enterprise") => 3,
        _ => 0,
    }
}

/// Estimates the delivery window for a selection. Total over every input.
pub fn estimate_timeline(selection: &Selection) -> TimelineEstimate {
    let mut weeks = BASELINE_WEEKS;

    // Unset website types land in the fallback tier as well.
    weeks += ComplexityTier::classify(non_empty(&selection.website_type)).weeks();

    let complex_tech = [TechSlot::Frontend, TechSlot::Backend, TechSlot::Devops]
        .iter()
        .filter_map(|slot| selection.tech(*slot))
        .filter(|tech| COMPLEX_TECH.contains(tech))
        .count() as u32;
    weeks += complex_tech;

    // Stacks with the complex-tech week above.
    if selection
        .tech(TechSlot::Devops)
        .is_some_and(|devops| ADVANCED_DEVOPS.contains(&devops))
    {
        weeks += 2;
    }

    weeks += performance_weeks(non_empty(&selection.performance_level));

    weeks += COMPLEX_FEATURES
        .iter()
        .filter(|feature| selection.is_enabled(feature))
        .count() as u32;

    // Adds the full language count, not count - 1.
    let languages = selection.multilingual_support.len() as u32;
    if languages > 1 {
        weeks += languages;
    }

    TimelineEstimate {
        low: weeks.max(BASELINE_WEEKS),
        high: weeks + 2,
    }
}
