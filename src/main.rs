use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use receipt_points::receipt::{validate_receipt, Receipt};
use receipt_points::scoring::calculate_points;
use receipt_points::{ReceiptService, ReceiptStore};

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_INVALID_RECEIPT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP service (default if no subcommand)
    Serve,
    /// Score a receipt JSON file offline and print the breakdown
    Score {
        /// Path to the receipt JSON, or "-" for stdin
        file: String,
    },
}

#[derive(Parser, Debug)]
#[command(name = "receipt-points")]
#[command(about = "Receipt reward points service", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/receipt-points/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let code = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(cli.config.map(PathBuf::from), cli.verbose).await,
        Commands::Score { file } => score(&file),
    };
    std::process::exit(code);
}

async fn serve(config_path: Option<PathBuf>, verbose: bool) -> i32 {
    let config = match receipt_points::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            return EXIT_CONFIG;
        }
    };

    if let Err(e) = receipt_points::logging::init(&config.log, verbose) {
        eprintln!("Config error: {:#}", e);
        return EXIT_CONFIG;
    }
    tracing::info!("Logger initialized");
    tracing::debug!("Settings: {:?}", config);

    let store = Arc::new(ReceiptStore::new());
    let service = Arc::new(ReceiptService::new(store));

    match receipt_points::server::run_server(&config.server, service).await {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            EXIT_FAILURE
        }
    }
}

fn score(file: &str) -> i32 {
    let content = match read_input(file) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Failed to read receipt: {:#}", e);
            return EXIT_FAILURE;
        }
    };
    let receipt = match decode_receipt(&content) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Invalid receipt: {:#}", e);
            return EXIT_INVALID_RECEIPT;
        }
    };

    let result = validate_receipt(receipt.as_ref()).and_then(|valid| calculate_points(&valid));
    match result {
        Ok(result) => {
            let use_colors = receipt_points::output::should_use_colors();
            println!("{}", receipt_points::output::format_breakdown(&result, use_colors));
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Invalid receipt: {}", e);
            EXIT_INVALID_RECEIPT
        }
    }
}

/// Read the whole receipt file, or stdin when `file` is "-".
fn read_input(file: &str) -> Result<String> {
    if file == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file))
    }
}

fn decode_receipt(content: &str) -> Result<Option<Receipt>> {
    serde_json::from_str(content).context("Receipt is not valid JSON")
}
