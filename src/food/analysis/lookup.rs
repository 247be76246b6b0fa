use crate::advice::CommentaryClient;
use crate::food::analysis::nutrition::CaloricBreakdown;
use crate::food::dataset::FoodDataset;
use crate::food::record::FoodRecord;
use crate::report::{ReportError, ReportInput, ReportRenderer};
use log::info;
use serde::Serialize;
use std::sync::Arc;

/// Everything the front ends show for one search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodReport {
    pub record: FoodRecord,
    pub breakdown: CaloricBreakdown,
    pub advice: String,
    pub region_hint: Option<String>,
    /// Every record matching the search, the selected one first.
    pub matches: Vec<FoodRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LookupOutcome {
    /// The dataset is missing or empty.
    NoData,
    NoMatch { search_term: String },
    Found(FoodReport),
}

/// Search → first match → breakdown → commentary.
#[derive(Clone)]
pub struct FoodLookup {
    dataset: Arc<FoodDataset>,
    advisor: CommentaryClient,
    renderer: Arc<dyn ReportRenderer>,
}

impl FoodLookup {
    pub fn new(
        dataset: Arc<FoodDataset>,
        advisor: CommentaryClient,
        renderer: Arc<dyn ReportRenderer>,
    ) -> Self {
        Self {
            dataset,
            advisor,
            renderer,
        }
    }

    pub fn dataset(&self) -> &FoodDataset {
        &self.dataset
    }

    pub fn advisor(&self) -> &CommentaryClient {
        &self.advisor
    }

    pub fn renderer(&self) -> &dyn ReportRenderer {
        self.renderer.as_ref()
    }

    /// Matches for `search_term` without asking for commentary.
    pub fn matches(&self, search_term: &str) -> Vec<FoodRecord> {
        self.dataset.find(search_term)
    }

    /// Runs one interaction. Makes at most one commentary request, and none
    /// when nothing matches. `search_term` is matched literally.
    pub async fn lookup(&self, search_term: &str, region_hint: Option<&str>) -> LookupOutcome {
        if self.dataset.load().is_empty() {
            return LookupOutcome::NoData;
        }

        let matches = self.dataset.find(search_term);
        let record = match matches.first() {
            Some(record) => record.clone(),
            None => {
                info!("No foods match '{}'", search_term);
                return LookupOutcome::NoMatch {
                    search_term: search_term.to_string(),
                };
            }
        };

        info!(
            "'{}' matched {} foods, using '{}'",
            search_term,
            matches.len(),
            record.name
        );

        let region_hint = region_hint
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string);

        let advice = self
            .advisor
            .advise(
                &record.name,
                record.protein_grams,
                record.fat_grams,
                region_hint.as_deref(),
            )
            .await;

        LookupOutcome::Found(FoodReport {
            breakdown: CaloricBreakdown::for_record(&record),
            record,
            advice,
            region_hint,
            matches,
        })
    }

    pub fn report(&self, report: &FoodReport) -> Result<Vec<u8>, ReportError> {
        self.renderer.render(&ReportInput {
            food_name: &report.record.name,
            protein_grams: report.record.protein_grams,
            fat_grams: report.record.fat_grams,
            advice: &report.advice,
        })
    }
}
