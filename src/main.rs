mod catalog;
mod matcher;
mod search;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::catalog::{BandCatalog, Standard};
use crate::matcher::parse_frequency_spec;
use crate::search::{filter_products, load_products, product_matches, Selection};

#[derive(Parser)]
#[command(name = "bandmatch")]
#[command(about = "Antenna frequency band compatibility search")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the known band plan
    Bands {
        /// Restrict the listing to one standard
        #[arg(long, value_enum)]
        standard: Option<Standard>,
    },
    /// Check a frequency spec against selected bands
    Check {
        spec: String,
        /// Selection file (YAML keyed by standard name)
        #[arg(long)]
        selection: Option<String>,
        /// Add a single band, e.g. --band "5G NR:n1" (repeatable)
        #[arg(long = "band", value_name = "STANDARD:NAME")]
        bands: Vec<String>,
    },
    /// Filter a product catalog file by a selection file
    Filter {
        products: String,
        selection: String,
        /// Keep only products in this category
        #[arg(long)]
        category: Option<String>,
        /// Keep only products matching this text
        #[arg(long)]
        query: Option<String>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    let catalog = BandCatalog::new();

    match cli.command {
        Commands::Bands { standard } => bands(&catalog, standard),
        Commands::Check {
            spec,
            selection,
            bands,
        } => check(&catalog, &spec, selection.as_deref(), &bands),
        Commands::Filter {
            products,
            selection,
            category,
            query,
        } => filter(
            &catalog,
            &products,
            &selection,
            category.as_deref(),
            query.as_deref(),
        ),
    }
}

fn bands(catalog: &BandCatalog, standard: Option<Standard>) -> ExitCode {
    let standards = match standard {
        Some(s) => vec![s],
        None => Standard::ALL.to_vec(),
    };

    for standard in standards {
        println!("{}", standard);
        for band in catalog.bands(standard) {
            let mode = band.mode.map(|m| m.to_string()).unwrap_or_default();
            let mut ranges: Vec<String> = band
                .requirement
                .required
                .iter()
                .map(|r| format!("{} MHz", r))
                .collect();
            if !band.requirement.alternatives.is_empty() {
                let alts: Vec<String> = band
                    .requirement
                    .alternatives
                    .iter()
                    .map(|r| r.to_string())
                    .collect();
                ranges.push(format!("any of {} MHz", alts.join(" / ")));
            }
            println!("  {:<10} {:<4} {}", band.name, mode, ranges.join(", "));
        }
    }
    ExitCode::SUCCESS
}

fn check(
    catalog: &BandCatalog,
    spec: &str,
    selection_path: Option<&str>,
    band_args: &[String],
) -> ExitCode {
    let mut selection = match selection_path {
        Some(path) => match Selection::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error reading selection: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Selection::default(),
    };

    for arg in band_args {
        let (standard, name) = match arg.split_once(':') {
            Some(parts) => parts,
            None => {
                eprintln!("Invalid band argument (expected STANDARD:NAME): {}", arg);
                return ExitCode::FAILURE;
            }
        };
        match Standard::from_name(standard.trim()) {
            Some(standard) => selection.select(standard, name.trim()),
            None => {
                eprintln!("Unknown standard: {}", standard);
                return ExitCode::FAILURE;
            }
        }
    }

    let ranges = parse_frequency_spec(spec);
    if ranges.is_empty() {
        println!("No frequency ranges found in \"{}\"", spec);
    } else {
        let parsed: Vec<String> = ranges.iter().map(|r| format!("{} MHz", r)).collect();
        println!("Parsed ranges: {}", parsed.join(", "));
    }

    if product_matches(catalog, spec, &selection) {
        println!("Compatible with every selected band");
        ExitCode::SUCCESS
    } else {
        println!("Not compatible with the selected bands");
        ExitCode::FAILURE
    }
}

fn filter(
    catalog: &BandCatalog,
    products_path: &str,
    selection_path: &str,
    category: Option<&str>,
    query: Option<&str>,
) -> ExitCode {
    let products = match load_products(products_path) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error reading products: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let selection = match Selection::from_file(selection_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading selection: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let matches: Vec<_> = filter_products(catalog, &products, &selection)
        .into_iter()
        .filter(|p| category.map_or(true, |c| p.matches_category(c)))
        .filter(|p| query.map_or(true, |q| p.matches_query(q)))
        .collect();

    println!("{} of {} products match", matches.len(), products.len());
    for product in &matches {
        println!(
            "  {}: {} ({})",
            product.id,
            product.name,
            product.frequency_spec()
        );
    }
    ExitCode::SUCCESS
}
