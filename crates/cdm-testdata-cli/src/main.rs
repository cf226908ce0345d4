use std::path::PathBuf;

use anyhow::{Context, Result};
use cdm_testdata::{DataModelFamily, Dataset, FixtureCatalog, FixtureRecord};
use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{Args, Parser, Subcommand};
use comfy_table::{presets::UTF8_FULL, Table};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "CDM reader/mapper test-data catalog", long_about = None)]
struct Cli {
    /// Directory holding the sample files (defaults to the crate's data directory)
    #[arg(
        long,
        env = "CDM_TESTDATA_DIR",
        global = true,
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered fixtures
    List(ListArgs),
    /// Show a single fixture record
    Show(ShowArgs),
}

#[derive(Args, Debug, Default)]
struct ListArgs {
    /// Only fixtures of this format family (imma1, immt)
    #[arg(long)]
    family: Option<DataModelFamily>,
    /// Only fixtures from this dataset release
    #[arg(long)]
    dataset: Option<Dataset>,
    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Default)]
struct ShowArgs {
    /// Fixture name, e.g. test_063_714
    name: String,
    /// Emit JSON instead of key/value lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let cli = Cli::parse();
    let catalog = open_catalog(cli.data_dir);

    let rendered = match cli.command {
        Command::List(args) => render_list(&catalog, &args)?,
        Command::Show(args) => render_show(&catalog, &args)?,
    };
    println!("{rendered}");

    Ok(())
}

// An empty CDM_TESTDATA_DIR (e.g. a blank line in .env) means "no override".
fn open_catalog(data_dir: Option<PathBuf>) -> FixtureCatalog {
    match data_dir.filter(|dir| !dir.as_os_str().is_empty()) {
        Some(dir) => {
            info!(data_dir = %dir.display(), "Using data directory override");
            FixtureCatalog::with_base_dir(dir)
        }
        None => FixtureCatalog::new(),
    }
}

fn render_list(catalog: &FixtureCatalog, args: &ListArgs) -> Result<String> {
    let records = select_records(catalog, args.family, args.dataset);

    if args.json {
        return serde_json::to_string_pretty(&records)
            .context("failed to render fixtures as JSON");
    }

    if records.is_empty() {
        return Ok("No fixtures match the given filters.".to_string());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["name", "deck", "data_model", "dm", "ds", "source"]);
    for record in &records {
        table.add_row(vec![
            record.name.to_string(),
            record.deck.to_string(),
            record.data_model.to_string(),
            record.dm.to_string(),
            record.ds.to_string(),
            record.source.display().to_string(),
        ]);
    }

    Ok(format!(
        "{table}\n{} of {} fixtures",
        records.len(),
        catalog.len()
    ))
}

fn render_show(catalog: &FixtureCatalog, args: &ShowArgs) -> Result<String> {
    let record = catalog.lookup(&args.name)?;

    if args.json {
        return serde_json::to_string_pretty(record)
            .with_context(|| format!("failed to render {} as JSON", record.name));
    }

    Ok([
        format!("name:       {}", record.name),
        format!("source:     {}", record.source.display()),
        format!("data_model: {}", record.data_model),
        format!("dm:         {}", record.dm),
        format!("ds:         {}", record.ds),
        format!("deck:       {}", record.deck),
    ]
    .join("\n"))
}

fn select_records(
    catalog: &FixtureCatalog,
    family: Option<DataModelFamily>,
    dataset: Option<Dataset>,
) -> Vec<&FixtureRecord> {
    catalog
        .iter()
        .filter(|record| family.map_or(true, |family| record.dm == family))
        .filter(|record| dataset.map_or(true, |dataset| record.ds == dataset))
        .collect()
}
