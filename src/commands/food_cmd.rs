use colored::Colorize;
use crate::food::{FoodLookup, FoodRecord, FoodReport, LookupOutcome};
use crate::report::{report_file_name, write_report};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

const HEADING_CHARS: usize = 40;
const BAR_WIDTH: usize = 30;
const TABLE_ROWS: usize = 20;

/// Runs a lookup and prints it. Returns the report when a food was found.
pub async fn handle_search(
    lookup: &FoodLookup,
    term: &str,
    region_hint: Option<&str>,
) -> Result<Option<FoodReport>, String> {
    let spinner = if lookup.advisor().is_configured() {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Asking the coach...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        Some(spinner)
    } else {
        None
    };

    let outcome = lookup.lookup(term, region_hint).await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    print_outcome(&outcome);
    match outcome {
        LookupOutcome::Found(report) => Ok(Some(report)),
        _ => Ok(None),
    }
}

pub fn handle_list(lookup: &FoodLookup, term: &str) -> Result<(), String> {
    if lookup.dataset().load().is_empty() {
        return Err(no_data_message(lookup));
    }
    let matches = lookup.matches(term);
    if matches.is_empty() {
        println!("{}", "🤷 No matching foods found.".yellow());
        return Ok(());
    }
    println!("\n📋 {} matches", matches.len().to_string().cyan());
    for line in format_table(&matches, TABLE_ROWS) {
        println!("{}", line);
    }
    Ok(())
}

pub fn handle_report(lookup: &FoodLookup, report: &FoodReport, target: &str) -> Result<(), String> {
    let path = if target.is_empty() {
        PathBuf::from(report_file_name(
            &report.record.name,
            lookup.renderer().file_extension(),
        ))
    } else {
        PathBuf::from(target)
    };

    let bytes = lookup
        .report(report)
        .map_err(|e| format!("Could not build the report: {}", e))?;
    write_report(&path, &bytes).map_err(|e| e.to_string())?;

    println!("📄 Report saved to {}", path.display().to_string().green());
    Ok(())
}

pub fn print_outcome(outcome: &LookupOutcome) {
    match outcome {
        LookupOutcome::NoData => {
            println!("{}", "❌ No nutrition data loaded. Check the dataset path.".red());
        }
        LookupOutcome::NoMatch { search_term } => {
            println!(
                "{}",
                format!("🤷 No foods found for '{}'.", search_term).yellow()
            );
        }
        LookupOutcome::Found(report) => print_report(report),
    }
}

fn print_report(report: &FoodReport) {
    let record = &report.record;
    let (protein_share, fat_share) = report.breakdown.shares();

    println!(
        "\n📊 Key figures: {}",
        record.short_name(HEADING_CHARS).bold()
    );
    println!(
        "  Protein (g): {}    Fat (g): {}",
        record.protein_grams.to_string().cyan(),
        record.fat_grams.to_string().cyan()
    );

    println!("\n💡 {}", "AI coach says:".bold());
    println!("  {}", report.advice.truecolor(255, 236, 179));

    println!("\n🔥 {}", "Energy breakdown".bold());
    println!(
        "  Protein  {} {:>5.1}%  ({:.1} kcal)",
        share_bar(protein_share, BAR_WIDTH).green(),
        protein_share,
        report.breakdown.protein_kcal
    );
    println!(
        "  Fat      {} {:>5.1}%  ({:.1} kcal)",
        share_bar(fat_share, BAR_WIDTH).truecolor(255, 127, 14),
        fat_share,
        report.breakdown.fat_kcal
    );

    if report.matches.len() > 1 {
        println!("\n📋 All {} matches", report.matches.len().to_string().cyan());
        for line in format_table(&report.matches, TABLE_ROWS) {
            println!("{}", line);
        }
    }
    println!();
}

fn no_data_message(lookup: &FoodLookup) -> String {
    format!(
        "No nutrition data loaded from {}. Check the dataset path.",
        lookup.dataset().path().display()
    )
}

/// Filled/empty bar for a percentage share.
pub fn share_bar(share: f64, width: usize) -> String {
    let filled = ((share.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn format_table(records: &[FoodRecord], limit: usize) -> Vec<String> {
    let name_width = records
        .iter()
        .take(limit)
        .map(|r| r.short_name(HEADING_CHARS).chars().count())
        .max()
        .unwrap_or(0)
        .max("Food".len());

    let mut lines = vec![format!(
        "  {:<width$}  {:>11}  {:>7}",
        "Food",
        "Protein (g)",
        "Fat (g)",
        width = name_width
    )];
    for record in records.iter().take(limit) {
        lines.push(format!(
            "  {:<width$}  {:>11}  {:>7}",
            record.short_name(HEADING_CHARS),
            record.protein_grams,
            record.fat_grams,
            width = name_width
        ));
    }
    if records.len() > limit {
        lines.push(format!("  ... and {} more", records.len() - limit));
    }
    lines
}
