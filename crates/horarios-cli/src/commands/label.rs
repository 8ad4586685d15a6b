//! Label command - run extraction on ad-hoc text.

use std::io::{self, IsTerminal, Read};

use clap::Args;
use console::style;

use horarios_core::{CatalogBuilder, Category};

use super::load_config;

/// Arguments for the label command.
#[derive(Args)]
pub struct LabelArgs {
    /// Category: professor (prof, professores) or class (turma, turmas)
    category: Category,

    /// Page text (default: read from stdin)
    text: Option<String>,

    /// Show the rule that produced the label
    #[arg(long)]
    rule: bool,
}

pub async fn run(args: LabelArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let builder = CatalogBuilder::from_config(&config)?;

    let text = match args.text {
        Some(text) => text,
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                anyhow::bail!("No text given. Pass it as an argument or pipe it to stdin.");
            }
            let mut text = String::new();
            stdin.lock().read_to_string(&mut text)?;
            text
        }
    };

    match builder.extractor().extract_match(&text, args.category) {
        Some(found) if args.rule => {
            println!("{}", found.label);
            eprintln!(
                "{} rule {} on {:?} text",
                style("ℹ").blue(),
                found.rule,
                found.variant
            );
        }
        Some(found) => println!("{}", found.label),
        None => println!("(no match)"),
    }

    Ok(())
}
