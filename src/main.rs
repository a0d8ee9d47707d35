//! Pantopia CLI
//!
//! Command-line interface for Pantopia operations:
//! - Summarize a company export offline
//! - Fetch the live distribution from a running API server
//! - Generate a default config file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use pantopia::aggregate::{Distribution, GroupBy};
use pantopia::api::dto::DistributionResponse;
use pantopia::company::{Company, NewCompany};
use pantopia::config::generate_default_config;
use pantopia::import;

#[derive(Parser)]
#[command(name = "pantopia")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Client management dashboard tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8082", global = true)]
    pub api_url: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count companies in a CSV or JSON file by industry and status
    Summarize {
        /// Path to a .csv or .json file
        path: PathBuf,
        /// Only one dimension (industry, status)
        #[arg(short, long)]
        by: Option<GroupBy>,
    },

    /// Show the distribution served by the API
    Distribution {
        /// Only one dimension (industry, status)
        #[arg(short, long)]
        by: Option<GroupBy>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Summarize { path, by } => {
            let records = import::load_file(&path)
                .with_context(|| format!("Failed to load {}", path.display()))?;

            let companies = records
                .into_iter()
                .enumerate()
                .map(|(i, record)| validated(i, record))
                .collect::<anyhow::Result<Vec<_>>>()?;

            let distribution = Distribution::from_records(&companies);
            print_distribution(&distribution_response(&distribution, by), cli.format)?;
        }

        Commands::Distribution { by } => {
            let mut url = format!("{}/api/v1/distribution", cli.api_url.trim_end_matches('/'));
            if let Some(group_by) = by {
                url.push_str(&format!("?by={}", group_by));
            }

            let resp = reqwest::get(&url)
                .await
                .with_context(|| format!("Failed to reach {}", cli.api_url))?;

            if !resp.status().is_success() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                bail!("API returned {}: {}", status, body);
            }

            let response: DistributionResponse = resp.json().await?;
            print_distribution(&response, cli.format)?;
        }

        Commands::Config { output } => {
            let config = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, &config)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", config),
            }
        }
    }

    Ok(())
}

fn validated(index: usize, record: NewCompany) -> anyhow::Result<Company> {
    record
        .validate()
        .map_err(|e| anyhow::anyhow!("record {}: {}", index + 1, e))?;
    Ok(record.into_company())
}

fn distribution_response(distribution: &Distribution, by: Option<GroupBy>) -> DistributionResponse {
    let wants = |dimension: GroupBy| by.map_or(true, |g| g == dimension);

    DistributionResponse {
        total: distribution.total,
        industry: wants(GroupBy::Industry).then(|| distribution.industry.chart_points()),
        status: wants(GroupBy::Status).then(|| distribution.status.chart_points()),
    }
}

fn print_distribution(response: &DistributionResponse, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(response)?);
        }
        OutputFormat::Table => {
            println!("Companies: {}", response.total);
            let sections = [
                (GroupBy::Industry, &response.industry),
                (GroupBy::Status, &response.status),
            ];
            for (group_by, points) in sections {
                let Some(points) = points else { continue };
                let total: u64 = points.iter().map(|p| p.value).sum();

                println!();
                println!("{:<24} {:>8} {:>6}", group_by.to_string().to_uppercase(), "COUNT", "%");
                println!("{}", "-".repeat(40));
                if points.is_empty() {
                    println!("No data");
                }
                for point in points {
                    let label = if point.label.is_empty() { "(none)" } else { point.label.as_str() };
                    let percent = point.value as f64 * 100.0 / total.max(1) as f64;
                    println!("{:<24} {:>8} {:>5.1}%", label, point.value, percent);
                }
            }
        }
    }
    Ok(())
}
