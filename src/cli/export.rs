//! CLI command for data export

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::error::{RecipeError, RecipeResult};
use crate::export::{export_full_json, export_full_yaml, export_recipes_csv};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (one row per recipe)
    Csv,
    /// JSON format (full database)
    Json,
    /// YAML format (full database, human-readable)
    Yaml,
}

/// Arguments for `recipes export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> RecipeResult<()> {
    let file = File::create(&args.output).map_err(|e| {
        RecipeError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Csv => {
            let count = export_recipes_csv(storage, &mut writer)?;
            println!("Exported {} recipes to: {}", count, args.output.display());
        }
        ExportFormat::Json => {
            export_full_json(storage, &mut writer, args.pretty)?;
            println!("Full database exported to: {}", args.output.display());
        }
        ExportFormat::Yaml => {
            export_full_yaml(storage, &mut writer)?;
            println!("Full database exported to: {}", args.output.display());
        }
    }

    writer
        .flush()
        .map_err(|e| RecipeError::Export(e.to_string()))?;
    Ok(())
}
