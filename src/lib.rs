pub mod advice;
pub mod api;
pub mod commands;
pub mod config;
pub mod food;
pub mod providers;
pub mod report;

// Re-export commonly used items
pub use advice::{CommentaryClient, FALLBACK_ADVICE};
pub use food::{CaloricBreakdown, FoodDataset, FoodLookup, FoodRecord, FoodReport, LookupOutcome};
pub use report::{PdfReport, ReportRenderer};
