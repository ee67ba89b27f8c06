#![deny(unsafe_code)]
//! CLI binary for swatch.
//!
//! Subcommands:
//! - `name <hex>...` — print the nearest color name for each input
//! - `rank <hex>` — print the k nearest names with their ΔE
//! - `list` — print the built-in tables, or the entries of the selected table

mod error;
mod logging;
mod source;

use clap::{Parser, Subcommand};
use error::CliError;
use std::path::PathBuf;
use std::process;
use swatch_core::{ColorMatcher, ColorTable};

#[derive(Parser)]
#[command(name = "swatch", about = "Name colors by their nearest perceptual match")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Built-in reference table (css, basic).
    #[arg(short, long, global = true, default_value = "css")]
    table: String,

    /// JSON reference table file; overrides --table.
    #[arg(long, global = true, env = "SWATCH_TABLE_FILE")]
    table_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the nearest color name for each hex color.
    Name {
        /// Colors as "#rrggbb" or "rrggbb".
        #[arg(required = true)]
        colors: Vec<String>,

        /// Fail on the first color that cannot be matched instead of printing
        /// an empty name.
        #[arg(long)]
        strict: bool,
    },
    /// Print the k nearest color names for one hex color.
    Rank {
        /// Color as "#rrggbb" or "rrggbb".
        color: String,

        /// Number of matches to print.
        #[arg(short, default_value_t = 5)]
        k: usize,
    },
    /// List built-in tables, or the entries of the selected table.
    List {
        /// Print the entries of the selected table.
        #[arg(long)]
        entries: bool,
    },
}

fn render_names(
    matcher: &ColorMatcher,
    colors: &[String],
    strict: bool,
    json: bool,
) -> Result<String, CliError> {
    let mut rows = Vec::with_capacity(colors.len());
    for input in colors {
        let name = if strict {
            matcher.find_nearest(input)?.name().to_string()
        } else {
            matcher.find_nearest_color_name(input)
        };
        rows.push((input.as_str(), name));
    }

    if json {
        let out: Vec<_> = rows
            .iter()
            .map(|(input, name)| serde_json::json!({ "input": input, "name": name }))
            .collect();
        return Ok(serde_json::to_string_pretty(&out)?);
    }
    let width = rows.iter().map(|(input, _)| input.len()).max().unwrap_or(0);
    Ok(rows
        .iter()
        .map(|(input, name)| {
            let name = if name.is_empty() { "-" } else { name.as_str() };
            format!("{input:<width$}  {name}")
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

fn render_rank(
    matcher: &ColorMatcher,
    color: &str,
    k: usize,
    json: bool,
) -> Result<String, CliError> {
    let matches = matcher.rank(color, k)?;
    if json {
        return Ok(serde_json::to_string_pretty(&matches)?);
    }
    Ok(matches
        .iter()
        .enumerate()
        .map(|(i, m)| {
            format!(
                "{:>3}. {:<22} {}  ΔE {:.2}",
                i + 1,
                m.name(),
                m.color.hex,
                m.distance
            )
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

fn render_list(table: Option<&ColorTable>, json: bool) -> Result<String, CliError> {
    match table {
        None => {
            let names = ColorTable::list_names();
            if json {
                Ok(serde_json::to_string_pretty(&serde_json::json!({ "tables": names }))?)
            } else {
                Ok(format!("Tables:\n  {}", names.join(", ")))
            }
        }
        Some(table) => {
            if json {
                Ok(serde_json::to_string_pretty(table.entries())?)
            } else {
                Ok(table
                    .iter()
                    .map(|c| format!("{:<22} {}", c.name, c.hex))
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let output = match cli.command {
        Command::List { entries: false } if cli.table_file.is_none() => {
            render_list(None, cli.json)?
        }
        Command::List { .. } => {
            let table = source::load_table(&cli.table, cli.table_file.as_deref())?;
            render_list(Some(&table), cli.json)?
        }
        Command::Name { colors, strict } => {
            let table = source::load_table(&cli.table, cli.table_file.as_deref())?;
            render_names(&ColorMatcher::new(table), &colors, strict, cli.json)?
        }
        Command::Rank { color, k } => {
            let table = source::load_table(&cli.table, cli.table_file.as_deref())?;
            render_rank(&ColorMatcher::new(table), &color, k, cli.json)?
        }
    };
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        tracing::debug!(exit_code = e.exit_code(), "command failed");
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
