use crate::food::record::{CsvRow, FoodRecord};
use log::{debug, error, info, warn};
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Read-only access to the nutrition table.
///
/// The CSV is read on the first call to [`FoodDataset::load`] and kept for the
/// lifetime of the accessor. A missing or unreadable file yields an empty
/// table, never an error, so callers can show "no data" instead of failing.
#[derive(Debug)]
pub struct FoodDataset {
    path: PathBuf,
    cache: RwLock<Option<Arc<[FoodRecord]>>>,
}

impl FoodDataset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    /// Accessor that is already loaded with `records` and never touches disk.
    pub fn from_records(records: Vec<FoodRecord>) -> Self {
        Self {
            path: PathBuf::new(),
            cache: RwLock::new(Some(records.into())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.cache.read().is_some()
    }

    pub fn load(&self) -> Arc<[FoodRecord]> {
        if let Some(records) = self.cache.read().as_ref() {
            return Arc::clone(records);
        }

        let mut cache = self.cache.write();
        // Another reader may have filled it while we waited for the write lock.
        if let Some(records) = cache.as_ref() {
            return Arc::clone(records);
        }

        let records: Arc<[FoodRecord]> = read_records(&self.path).into();
        *cache = Some(Arc::clone(&records));
        records
    }

    /// All records whose name contains `query`, ignoring case, in file order.
    pub fn find(&self, query: &str) -> Vec<FoodRecord> {
        let query = query.to_lowercase();
        self.load()
            .iter()
            .filter(|record| record.matches(&query))
            .cloned()
            .collect()
    }
}

fn read_records(path: &Path) -> Vec<FoodRecord> {
    if !path.exists() {
        warn!("Dataset not found at {}, continuing with no data", path.display());
        return Vec::new();
    }

    let mut reader = match csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
    {
        Ok(reader) => reader,
        Err(e) => {
            error!("Failed to open dataset {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (index, row) in reader.deserialize::<CsvRow>().enumerate() {
        match row.map(CsvRow::into_record) {
            Ok(Some(record)) => records.push(record),
            Ok(None) => {
                skipped += 1;
                debug!("Skipping row {}: empty name or invalid grams", index + 1);
            }
            Err(e) => {
                skipped += 1;
                debug!("Skipping row {}: {}", index + 1, e);
            }
        }
    }

    if skipped > 0 {
        warn!("Skipped {} unreadable rows in {}", skipped, path.display());
    }
    if records.is_empty() {
        error!("Dataset {} contains no usable rows", path.display());
    } else {
        info!("Loaded {} foods from {}", records.len(), path.display());
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    const SAMPLE: &str = "Food_Name,Protein_Value,Fat_Value,Category\n\
        Chicken Breast,23,1,Meat\n\
        Beef Steak,26,15,Meat\n\
        chicken thigh,19,9,Meat\n\
        Olive Oil,0,100,Oil\n";

    #[test]
    fn test_load_reads_rows_in_file_order() {
        let file = write_csv(SAMPLE);
        let dataset = FoodDataset::new(file.path());

        let records = dataset.load();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0], FoodRecord::new("Chicken Breast", 23.0, 1.0));
        assert_eq!(records[3].name, "Olive Oil");
    }

    #[test]
    fn test_load_is_memoized() {
        let file = write_csv(SAMPLE);
        let path = file.path().to_path_buf();
        let dataset = FoodDataset::new(&path);

        assert!(!dataset.is_loaded());
        let first = dataset.load();
        assert!(dataset.is_loaded());

        // Removing the file proves the second call does not read it again.
        file.close().unwrap();
        assert!(!path.exists());

        let second = dataset.load();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 4);
    }

    #[test]
    fn test_missing_file_gives_empty_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = FoodDataset::new(dir.path().join("absent.csv"));
        assert!(dataset.load().is_empty());
        assert!(dataset.find("").is_empty());
    }

    #[test]
    fn test_file_without_expected_columns_gives_empty_dataset() {
        let file = write_csv("name,kcal\nApple,52\n");
        let dataset = FoodDataset::new(file.path());
        assert!(dataset.load().is_empty());
    }

    #[test]
    fn test_bad_rows_are_skipped() {
        let file = write_csv(
            "Food_Name,Protein_Value,Fat_Value\n\
             Egg,13,11\n\
             Mystery,n/a,3\n\
             Broken,-2,1\n\
             Milk,3.4,3.6\n",
        );
        let dataset = FoodDataset::new(file.path());
        let names: Vec<_> = dataset.load().iter().map(|r| r.name.clone()).collect();
        assert_eq!(names, vec!["Egg", "Milk"]);
    }

    #[test]
    fn test_find_is_case_insensitive_substring() {
        let file = write_csv(SAMPLE);
        let dataset = FoodDataset::new(file.path());

        let hits = dataset.find("CHICKEN");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].name, "Chicken Breast");
        assert_eq!(hits[1].name, "chicken thigh");

        for query in ["ee", "oil", "Steak", "xyz"] {
            let lower = query.to_lowercase();
            for record in dataset.find(query) {
                assert!(record.name.to_lowercase().contains(&lower));
            }
        }
        assert!(dataset.find("nonexistent-food-xyz").is_empty());
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let dataset = FoodDataset::from_records(vec![
            FoodRecord::new("Apple", 0.3, 0.2),
            FoodRecord::new("Salmon", 20.0, 13.0),
        ]);
        assert_eq!(dataset.find("").len(), 2);
    }

    #[test]
    fn test_query_is_not_a_pattern() {
        let dataset = FoodDataset::from_records(vec![
            FoodRecord::new("Cheese (cheddar)", 25.0, 33.0),
            FoodRecord::new("Cheese", 20.0, 25.0),
        ]);
        let hits = dataset.find("(cheddar");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Cheese (cheddar)");
    }
}
