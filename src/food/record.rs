use serde::{Deserialize, Serialize};

/// One row of the nutrition dataset. Grams are per 100g of food.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    pub name: String,
    pub protein_grams: f64,
    pub fat_grams: f64,
}

impl FoodRecord {
    pub fn new(name: impl Into<String>, protein_grams: f64, fat_grams: f64) -> Self {
        Self {
            name: name.into(),
            protein_grams,
            fat_grams,
        }
    }

    pub fn matches(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
    }

    /// Name cut to `max_chars` characters, for headings.
    pub fn short_name(&self, max_chars: usize) -> String {
        if self.name.chars().count() <= max_chars {
            self.name.clone()
        } else {
            self.name.chars().take(max_chars).collect()
        }
    }
}

/// Row layout of the source CSV. Extra columns are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct CsvRow {
    #[serde(rename = "Food_Name")]
    pub name: String,
    #[serde(rename = "Protein_Value")]
    pub protein: f64,
    #[serde(rename = "Fat_Value")]
    pub fat: f64,
}

impl CsvRow {
    pub(crate) fn into_record(self) -> Option<FoodRecord> {
        let name = self.name.trim();
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        if name.is_empty() || !valid(self.protein) || !valid(self.fat) {
            return None;
        }
        Some(FoodRecord::new(name, self.protein, self.fat))
    }
}
