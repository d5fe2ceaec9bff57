//! YAML Export functionality
//!
//! Exports every recipe to YAML for a human-readable backup.

use std::io::Write;

use crate::error::RecipeResult;
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Export the full database to YAML format
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> RecipeResult<()> {
    let export = FullExport::from_storage(storage)?;

    let header = format!(
        "# Recipe Book Export\n# Generated: {}\n# App Version: {}\n\n",
        export.exported_at, export.app_version
    );
    writer.write_all(header.as_bytes())?;
    serde_yaml::to_writer(writer, &export)?;

    Ok(())
}
