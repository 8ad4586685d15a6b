//! List command - build and print the page catalog of a category.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use horarios_core::{Catalog, CatalogBuilder, CatalogSession, Category, FileSource, LoadOutcome};

use super::{load_config, load_failure_message};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Category: professor (prof, professores) or class (turma, turmas)
    category: Category,

    /// PDF to read instead of the configured source
    #[arg(long)]
    file: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// One line per page
    Text,
}

pub async fn run(args: ListArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;
    let builder = CatalogBuilder::from_config(&config)?;

    let source = match &args.file {
        Some(path) => FileSource::single(path),
        None => FileSource::new(config.sources.clone()),
    };
    info!(
        "Listing {} pages from {}",
        args.category,
        source.path_for(args.category).display()
    );

    let pb = if args.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(0)
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")?
            .progress_chars("##-"),
    );
    pb.set_message("Reading pages...");

    let session = CatalogSession::new();
    let outcome = session
        .load_with_progress(&source, args.category, &builder, |done, total| {
            pb.set_length(u64::from(total));
            pb.set_position(u64::from(done));
        })
        .await;

    let catalog = match outcome {
        Ok(LoadOutcome::Applied(catalog)) => catalog,
        Ok(LoadOutcome::Superseded) => anyhow::bail!("Load was superseded"),
        Err(e) => {
            pb.abandon();
            return Err(e).context(load_failure_message(args.category));
        }
    };
    pb.finish_and_clear();

    let output = format_catalog(&catalog, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} {} entries written to {}",
            style("✓").green(),
            catalog.len(),
            output_path.display()
        );
    } else {
        print!("{}", output);
    }

    debug!("Listed {} pages in {:?}", catalog.len(), start.elapsed());

    Ok(())
}

fn format_catalog(catalog: &Catalog, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(catalog)?)),
        OutputFormat::Csv => format_csv(catalog),
        OutputFormat::Text => Ok(format_text(catalog)),
    }
}

fn format_csv(catalog: &Catalog) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["page", "label"])?;
    for entry in catalog.iter() {
        wtr.write_record([entry.page_number.to_string().as_str(), entry.label.as_str()])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(catalog: &Catalog) -> String {
    let width = catalog
        .iter()
        .map(|e| e.page_number.to_string().len())
        .max()
        .unwrap_or(1);

    let mut output = String::new();
    for entry in catalog.iter() {
        output.push_str(&format!(
            "{:>width$}  {}\n",
            entry.page_number,
            entry.label,
            width = width
        ));
    }
    output
}
