use nutrition_advisor::advice::{CommentaryClient, FALLBACK_ADVICE};
use nutrition_advisor::config::{ApiKey, ProviderConfig};
use nutrition_advisor::food::{FoodDataset, FoodLookup, LookupOutcome};
use nutrition_advisor::providers::DeepSeekProvider;
use nutrition_advisor::report::PdfReport;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tempfile::NamedTempFile;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn dataset_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Food_Name,Protein_Value,Fat_Value").unwrap();
    writeln!(file, "Beef Steak,26,15").unwrap();
    writeln!(file, "Chicken Breast,23,1").unwrap();
    writeln!(file, "Olive Oil,0,100").unwrap();
    file.flush().unwrap();
    file
}

fn lookup_against(server: &MockServer, dataset: &NamedTempFile) -> FoodLookup {
    let config = ProviderConfig {
        api_url: format!("{}/chat/completions", server.uri()),
        timeout: Duration::from_secs(5),
        ..ProviderConfig::default()
    };
    let provider = DeepSeekProvider::new(ApiKey::new("sk-test").unwrap(), config).unwrap();

    FoodLookup::new(
        Arc::new(FoodDataset::new(dataset.path())),
        CommentaryClient::new(Arc::new(provider)),
        Arc::new(PdfReport::new()),
    )
}

#[tokio::test]
async fn test_chicken_lookup_survives_commentary_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let file = dataset_file();
    let lookup = lookup_against(&server, &file);

    let LookupOutcome::Found(report) = lookup.lookup("chicken", None).await else {
        panic!("expected chicken to match");
    };
    assert_eq!(report.record.name, "Chicken Breast");
    assert_eq!(report.breakdown.protein_kcal, 92.0);
    assert_eq!(report.breakdown.fat_kcal, 9.0);
    assert_eq!(report.advice, FALLBACK_ADVICE);

    let pdf = lookup.report(&report).unwrap();
    assert!(pdf.starts_with(b"%PDF-"));
}

#[tokio::test]
async fn test_unknown_food_makes_no_commentary_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let file = dataset_file();
    let lookup = lookup_against(&server, &file);

    let outcome = lookup.lookup("nonexistent-food-xyz", Some("Peru")).await;
    assert!(matches!(outcome, LookupOutcome::NoMatch { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_dataset_reports_no_data() {
    let dir = tempfile::tempdir().unwrap();

    let lookup = FoodLookup::new(
        Arc::new(FoodDataset::new(dir.path().join("protein_vs_fat.csv"))),
        CommentaryClient::unconfigured(),
        Arc::new(PdfReport::new()),
    );

    assert_eq!(lookup.lookup("beef", None).await, LookupOutcome::NoData);
    assert!(lookup.matches("").is_empty());
}

#[tokio::test]
async fn test_successful_advice_reaches_the_report() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{ "message": { "content": "Steak is fine in moderation." } }]
        })))
        .mount(&server)
        .await;

    let file = dataset_file();
    let lookup = lookup_against(&server, &file);

    let LookupOutcome::Found(report) = lookup.lookup("BEEF", Some("Texas")).await else {
        panic!("expected beef to match");
    };
    assert_eq!(report.advice, "Steak is fine in moderation.");
    assert_eq!(report.region_hint.as_deref(), Some("Texas"));

    let pdf = lookup.report(&report).unwrap();
    assert!(pdf
        .windows(b"Steak is fine in moderation.".len())
        .any(|w| w == b"Steak is fine in moderation."));
}
