use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use journal_migrate::importer::DEFAULT_NOTEBOOK;
use journal_migrate::joplin::DEFAULT_HOST;
use journal_migrate::{
    ImportReport, ImportSettings, Importer, JoplinClientBuilder, TagDirectory, load_export,
};

/// journal-migrate - import a Day One journal export into Joplin
#[derive(Parser, Debug)]
#[command(name = "journal-migrate")]
#[command(about = "Import journal entries, photos and tags into a Joplin notebook")]
#[command(version)]
struct Cli {
    /// Fully qualified host address of your local Joplin instance
    #[arg(long, value_name = "URL", default_value = DEFAULT_HOST)]
    host: String,

    /// Directory containing your extracted journal data
    #[arg(long, visible_alias = "journalFolder", value_name = "DIR")]
    journal_folder: PathBuf,

    /// ID of the notebook to import your journal entries into
    #[arg(long, value_name = "ID", default_value = DEFAULT_NOTEBOOK)]
    notebook: String,

    /// API token for your local Joplin instance
    #[arg(long)]
    token: String,

    /// Timeout for each request, in seconds
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Stop at the first entry that fails to import
    #[arg(long)]
    fail_fast: bool,
}

impl Cli {
    fn settings(&self) -> ImportSettings {
        ImportSettings {
            journal_folder: self.journal_folder.clone(),
            notebook: self.notebook.clone(),
            fail_fast: self.fail_fast,
        }
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let exit_code = match run(&cli) {
        Ok(report) => {
            print_summary(&report);
            if report.is_success() { 0 } else { 1 }
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

/// Logs go to stderr; `RUST_LOG` overrides the default filter.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "journal_migrate=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Reads the export, snapshots the store's tags and imports every entry.
///
/// Errors returned here mean the run never started; per-entry failures are
/// carried in the report instead.
fn run(cli: &Cli) -> Result<ImportReport> {
    let export = load_export(&cli.journal_folder).context("Failed to read journal export")?;

    let client = JoplinClientBuilder::new()
        .base_url(&cli.host)
        .token(&cli.token)
        .timeout(Duration::from_secs(cli.timeout_secs))
        .build()
        .context("Failed to create Joplin client")?;

    let directory = TagDirectory::load(&client).context("Failed to fetch existing tags")?;

    let mut importer = Importer::new(&client, directory, cli.settings());
    Ok(importer.run(&export))
}

fn print_summary(report: &ImportReport) {
    let succeeded = report.succeeded().count();
    let failed = report.failed().count();
    println!(
        "Imported {} of {} entries",
        succeeded,
        succeeded + failed + report.skipped
    );

    for outcome in report.failed() {
        if let Err(e) = &outcome.result {
            eprintln!("  failed {} ({}): {}", outcome.uuid, outcome.title, e);
        }
    }
    if report.skipped > 0 {
        eprintln!("  {} entries not attempted", report.skipped);
    }
}
