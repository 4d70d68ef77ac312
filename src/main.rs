use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

use catalog_picker::config::{OutputFormat, PickerConfig};
use catalog_picker::{demo_data, listing, logging, ops, BrowserObject, CatalogTree, PickOp};

/// Build a catalog tree from a listing, apply pick operations and print the selection
#[derive(Parser, Debug)]
#[command(name = "catalog-picker", version)]
struct Cli {
    /// Listing file with one path per line
    #[arg(required_unless_present = "demo", conflicts_with = "demo")]
    listing: Option<PathBuf>,

    /// Use the built-in demo catalog instead of a listing file
    #[arg(long)]
    demo: bool,

    /// Pick operation, applied in order: select:<path>, deselect:<path>,
    /// select-all:<path>, deselect-all:<path>
    #[arg(long = "op", value_name = "OP")]
    ops: Vec<PickOp>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    separator: Option<String>,

    /// Name of the root node
    #[arg(long)]
    root: Option<String>,

    /// Print the selection as JSON
    #[arg(long)]
    json: bool,

    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Serialize)]
struct SelectionReport<'a> {
    count: usize,
    selected: Vec<&'a BrowserObject>,
}

fn resolve_config(cli: &Cli) -> Result<PickerConfig> {
    let mut config = match &cli.config {
        Some(path) => PickerConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => PickerConfig::default(),
    };

    if let Some(separator) = &cli.separator {
        config.separator = separator.clone();
    }
    if let Some(root) = &cli.root {
        config.root_name = root.clone();
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if cli.json {
        config.output = OutputFormat::Json;
    }

    config.validate()?;
    Ok(config)
}

fn load_tree(cli: &Cli, config: &PickerConfig) -> Result<CatalogTree> {
    match &cli.listing {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read listing {}", path.display()))?;
            Ok(listing::build_from_listing(
                &text,
                &config.root_name,
                &config.separator,
            ))
        }
        None => Ok(demo_data::load_demo_tree(&config.root_name, &config.separator)),
    }
}

fn build_report(tree: &CatalogTree) -> SelectionReport<'_> {
    let root = tree.root();
    SelectionReport {
        count: tree.count_selected_descendants(root),
        selected: tree.selected_payloads(root),
    }
}

/// Render the selection in the configured output format
fn render_selection(tree: &CatalogTree, config: &PickerConfig) -> Result<String> {
    match config.output {
        OutputFormat::Text => {
            let root = tree.root();
            let mut out = String::new();
            for id in tree.selected_descendants(root) {
                out.push_str(&tree.path_string(id, &config.separator));
                out.push('\n');
            }
            out.push_str(&format!(
                "{} selected\n",
                tree.count_selected_descendants(root)
            ));
            Ok(out)
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&build_report(tree))?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    let level = config
        .log_level
        .parse()
        .unwrap_or(log::LevelFilter::Info);
    logging::init_logger(level);

    let mut tree = load_tree(&cli, &config)?;
    ops::apply_all(&mut tree, &cli.ops, &config.separator)
        .context("Failed to apply pick operations")?;

    log::info!(
        "{} of {} nodes selected",
        tree.count_selected_descendants(tree.root()),
        tree.len()
    );

    print!("{}", render_selection(&tree, &config)?);
    Ok(())
}
