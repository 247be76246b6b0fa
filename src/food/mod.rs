pub mod analysis;
pub mod dataset;
pub mod record;

// Re-export common types
pub use analysis::lookup::{FoodLookup, FoodReport, LookupOutcome};
pub use analysis::nutrition::CaloricBreakdown;
pub use dataset::FoodDataset;
pub use record::FoodRecord;
