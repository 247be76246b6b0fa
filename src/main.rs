use nutrition_advisor::advice::CommentaryClient;
use nutrition_advisor::api;
use nutrition_advisor::commands::food_cmd;
use nutrition_advisor::commands::CommandHandler;
use nutrition_advisor::config::{ApiKey, AppConfig};
use nutrition_advisor::food::{FoodDataset, FoodLookup};
use nutrition_advisor::providers::DeepSeekProvider;
use nutrition_advisor::report::PdfReport;
use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use dotenv::dotenv;
use log::{info, warn};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

const DEFAULT_SEARCH: &str = "Beef";

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Search a nutrition table and ask an AI coach about it", long_about = None)]
struct Args {
    /// Commentary API key (defaults to DEEPSEEK_API_KEY)
    #[arg(short, long)]
    api_key: Option<String>,

    /// CSV with Food_Name, Protein_Value and Fat_Value columns
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Region the coach should tailor advice to
    #[arg(long)]
    region: Option<String>,

    /// Run a single search and exit
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_SEARCH)]
    search: Option<String>,

    /// With --search, also save the PDF report here
    #[arg(long, requires = "search")]
    report: Option<PathBuf>,

    /// Serve the JSON API instead of the interactive prompt
    #[arg(long)]
    api: bool,

    #[arg(long, default_value = "3000")]
    port: u16,
}

impl Args {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(key) = self.api_key.clone().and_then(ApiKey::new) {
            config.api_key = Some(key);
        }
        if let Some(path) = &self.dataset {
            config.dataset_path = path.clone();
        }
        if let Some(region) = &self.region {
            let region = region.trim();
            config.region_hint = (!region.is_empty()).then(|| region.to_string());
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_log_filter(args.api)),
    )
    .init();

    let mut config = AppConfig::from_env().context("Invalid configuration")?;
    args.apply(&mut config);

    let lookup = build_lookup(&config);

    if args.api {
        run_api_server(lookup, config, args.port).await
    } else if let Some(term) = &args.search {
        run_single_search(&lookup, &config, term, args.report.as_ref()).await
    } else {
        run_cli_mode(lookup, config).await
    }
}

/// Terminal modes stay at `warn` so log lines don't interleave with the REPL.
fn default_log_filter(api: bool) -> &'static str {
    if api {
        "info"
    } else {
        "warn"
    }
}

fn build_lookup(config: &AppConfig) -> FoodLookup {
    let dataset = Arc::new(FoodDataset::new(&config.dataset_path));

    let advisor = match config.require_api_key() {
        Ok(key) => match DeepSeekProvider::new(key.clone(), config.provider.clone()) {
            Ok(provider) => {
                info!(
                    "Commentary via {} ({})",
                    config.provider.api_url, config.provider.model
                );
                CommentaryClient::new(Arc::new(provider))
            }
            Err(e) => {
                warn!("Failed to create commentary provider: {}", e);
                CommentaryClient::unconfigured()
            }
        },
        Err(e) => {
            warn!("{}; coach commentary is disabled", e);
            CommentaryClient::unconfigured()
        }
    };

    FoodLookup::new(dataset, advisor, Arc::new(PdfReport::new()))
}

async fn run_single_search(
    lookup: &FoodLookup,
    config: &AppConfig,
    term: &str,
    report_path: Option<&PathBuf>,
) -> anyhow::Result<()> {
    let report = food_cmd::handle_search(lookup, term.trim(), config.region_hint.as_deref())
        .await
        .map_err(anyhow::Error::msg)?;

    if let (Some(report), Some(path)) = (report, report_path) {
        let target = path.to_string_lossy();
        if let Err(e) = food_cmd::handle_report(lookup, &report, &target) {
            println!("{}", e.red());
        }
    }
    Ok(())
}

async fn run_cli_mode(lookup: FoodLookup, config: AppConfig) -> anyhow::Result<()> {
    let foods = lookup.dataset().load().len();
    if foods == 0 {
        println!(
            "{}",
            format!(
                "⚠️ No nutrition data found at {}",
                config.dataset_path.display()
            )
            .yellow()
        );
    } else {
        println!("🥗 Loaded {} foods", foods.to_string().cyan());
    }

    let mut command_handler = CommandHandler::new(lookup, config.region_hint.clone());

    // Show initial help menu
    command_handler.handle_command("help").await.map_err(anyhow::Error::msg)?;

    let mut rl = Editor::<(), DefaultHistory>::new()?;

    // Main input loop
    loop {
        let prompt = match command_handler.region_hint() {
            Some(region) => format!("🔍 [{}] ", region),
            None => "🔍 ".to_string(),
        };
        match rl.readline(&prompt) {
            Ok(line) => {
                let input = line.trim();
                let _ = rl.add_history_entry(input);

                if let Err(e) = command_handler.handle_command(input).await {
                    println!("{}", e.red());
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}

async fn run_api_server(lookup: FoodLookup, config: AppConfig, port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!(
        "Loaded {} foods from {}",
        lookup.dataset().load().len(),
        config.dataset_path.display()
    );

    let app = api::create_api(lookup, config.region_hint);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Server successfully bound to {}", addr);

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_depends_on_mode() {
        assert_eq!(default_log_filter(true), "info");
        assert_eq!(default_log_filter(false), "warn");
    }

    #[test]
    fn test_report_requires_search() {
        assert!(Args::try_parse_from(["nutrition-advisor", "--report", "out.pdf"]).is_err());
        let args = Args::try_parse_from(["nutrition-advisor", "--search"]).unwrap();
        assert_eq!(args.search.as_deref(), Some("Beef"));
    }
}
