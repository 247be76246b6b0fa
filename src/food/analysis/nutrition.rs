use crate::food::record::FoodRecord;
use serde::Serialize;

pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Energy contributed by protein and fat, per 100g. This is the pair the
/// front ends draw as a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CaloricBreakdown {
    pub protein_kcal: f64,
    pub fat_kcal: f64,
}

impl CaloricBreakdown {
    pub fn from_grams(protein_grams: f64, fat_grams: f64) -> Self {
        Self {
            protein_kcal: protein_grams * KCAL_PER_GRAM_PROTEIN,
            fat_kcal: fat_grams * KCAL_PER_GRAM_FAT,
        }
    }

    pub fn for_record(record: &FoodRecord) -> Self {
        Self::from_grams(record.protein_grams, record.fat_grams)
    }

    pub fn total_kcal(&self) -> f64 {
        self.protein_kcal + self.fat_kcal
    }

    /// Percentage shares `(protein, fat)`. Both are 0 when there is no energy.
    pub fn shares(&self) -> (f64, f64) {
        let total = self.total_kcal();
        if total <= 0.0 {
            return (0.0, 0.0);
        }
        (
            self.protein_kcal / total * 100.0,
            self.fat_kcal / total * 100.0,
        )
    }
}
