// src/export/logic.rs

use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::GuardExport;
use crate::models::guard::Roster;
use crate::ui::messages::warning;
use std::path::Path;
use tracing::debug;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the per-guard occupancy of `roster` to `file`.
    pub fn export(roster: &Roster, format: ExportFormat, file: &str, force: bool) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let records: Vec<GuardExport> = Core::guard_summaries(roster)
            .iter()
            .map(GuardExport::from)
            .collect();

        if records.is_empty() {
            warning("No guards found in the log, writing an empty export.");
        }
        debug!(records = records.len(), format = format.as_str(), "exporting");

        match format {
            ExportFormat::Csv => export_csv(&records, path),
            ExportFormat::Json => export_json(&records, path),
        }
    }
}
