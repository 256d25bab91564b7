mod catalog;
mod crawler;
mod export;
mod fetch;
mod parser;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use fetch::Fetcher;

#[derive(Parser)]
#[command(name = "catalog_scraper", about = "University course catalog scraper")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Crawl every department and write catalog.csv + department.csv
    Run {
        /// Catalog site origin
        #[arg(long, env = "CATALOG_BASE_URL", default_value = catalog::BASE_URL)]
        base_url: String,
        /// Directory for the CSV files (default: current directory)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
    /// List departments found on the root page without crawling them
    Departments {
        /// Catalog site origin
        #[arg(long, env = "CATALOG_BASE_URL", default_value = catalog::BASE_URL)]
        base_url: String,
    },
    /// Parse a saved department page and print its courses
    Parse {
        /// Path to the HTML file
        file: PathBuf,
        /// Print one JSON object per course instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { base_url, out_dir } => {
            let out_dir = match out_dir {
                Some(dir) => dir,
                None => std::env::current_dir().context("Failed to resolve current directory")?,
            };
            let fetcher = Fetcher::new()?;
            let run = crawler::run_catalog(&fetcher, &base_url).await?;

            let catalog_path = export::write_catalog(&out_dir, &run.courses)?;
            info!("Completed scraping, catalog saved at {}", catalog_path.display());
            let department_path = export::write_departments(&out_dir, &run.departments)?;
            info!("Department data saved at {}", department_path.display());

            println!(
                "Saved {} courses from {} departments.",
                run.courses.len(),
                run.departments.len()
            );
            Ok(())
        }
        Commands::Departments { base_url } => {
            let fetcher = Fetcher::new()?;
            let links = crawler::fetch_departments(&fetcher, &base_url).await?;
            if links.is_empty() {
                println!("No department links found.");
                return Ok(());
            }
            for (i, link) in links.iter().enumerate() {
                println!("{:>3} | {:<40} | {}", i + 1, truncate(&link.name, 40), link.url(&base_url));
            }
            Ok(())
        }
        Commands::Parse { file, json } => {
            let html = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let courses = parser::parse_department_page(&html);
            if json {
                for course in &courses {
                    println!("{}", serde_json::to_string(course)?);
                }
            } else {
                println!(
                    "{:<12} | {:<40} | {:<20} | {:<20}",
                    "Course", "Name", "Terms", "Instructors"
                );
                println!("{}", "-".repeat(101));
                for c in &courses {
                    println!(
                        "{:<12} | {:<40} | {:<20} | {:<20}",
                        c.id,
                        truncate(&c.name, 40),
                        truncate(&c.terms, 20),
                        truncate(&c.instructors, 20)
                    );
                }
                println!("\n{} courses", courses.len());
            }
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
