//! Inspect command - show how one page of a document is labeled.
//!
//! Prints the page text in every form the rules read, then each rule's
//! verdict in table order. Useful when tuning the blacklist or stop markers.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use console::style;

use horarios_core::label::rules_for;
use horarios_core::{
    join_runs, loosen, normalize, CatalogBuilder, Category, DocumentSource, FileSource,
    PdfDocument, TextVariant,
};

use super::{load_config, load_failure_message};

/// Arguments for the inspect command.
#[derive(Args)]
pub struct InspectArgs {
    /// Category: professor (prof, professores) or class (turma, turmas)
    category: Category,

    /// Page number (1-indexed)
    #[arg(short, long)]
    page: u32,

    /// PDF to read instead of the configured source
    #[arg(long)]
    file: Option<PathBuf>,
}

pub async fn run(args: InspectArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let builder = CatalogBuilder::from_config(&config)?;

    let source = match &args.file {
        Some(path) => FileSource::single(path),
        None => FileSource::new(config.sources.clone()),
    };

    let document = source
        .open(args.category)
        .await
        .context(load_failure_message(args.category))?;

    if args.page == 0 || args.page > document.page_count() {
        anyhow::bail!(
            "Page {} is out of range; the document has {} pages",
            args.page,
            document.page_count()
        );
    }

    let runs = document.page_text(args.page).await?;
    let text = join_runs(&runs);
    let spaced = normalize(&text);
    let loosened = loosen(&text);

    println!(
        "{} Page {} of {} ({} text runs)",
        style("ℹ").blue(),
        args.page,
        document.page_count(),
        runs.len()
    );
    println!();
    println!("{}", style("Normalized:").bold());
    println!("  {}", spaced);
    println!("{}", style("Loosened:").bold());
    println!("  {}", loosened);
    println!();
    println!("{}", style("Rules:").bold());

    let extractor = builder.extractor();
    let mut winner = None;
    for rule in rules_for(args.category) {
        let input = match rule.variant {
            TextVariant::Spaced => spaced.as_str(),
            TextVariant::Loosened => loosened.as_str(),
        };
        match rule.apply(extractor, input) {
            Some(label) => {
                let marker = if winner.is_none() {
                    style("✓").green()
                } else {
                    style("·").dim()
                };
                println!("  {} {:<24} {}", marker, rule.name, label);
                winner.get_or_insert(label);
            }
            None => println!("  {} {:<24} -", style("✗").red(), rule.name),
        }
    }

    println!();
    let label = winner.unwrap_or_else(|| builder.placeholder(args.page));
    println!("{} {}", style("Label:").bold(), label);

    Ok(())
}
