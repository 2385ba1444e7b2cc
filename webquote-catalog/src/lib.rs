pub mod labels;
pub mod price_table;
pub mod selection;

pub use labels::label;
pub use price_table::{Category, PriceTable, TechSlot};
pub use selection::{non_empty, Selection};
