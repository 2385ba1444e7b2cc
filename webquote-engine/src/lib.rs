pub mod cost;
pub mod currency;
pub mod progress;
pub mod quote;
pub mod summary;
pub mod timeline;
pub mod validation;

pub use cost::{derive_cost, CostResult, MINIMUM_BASE_COST};
pub use progress::{progress, Progress, ProgressStage};
pub use quote::{Quote, QuoteEngine};
pub use summary::{build_summary, quotation_id, SummaryTerms};
pub use timeline::{estimate_timeline, TimelineEstimate};
pub use validation::{validate, RequiredFields, ValidationFailure};
