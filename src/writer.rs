use crate::{
    config::Config,
    error::{Error, Result},
    report::Report,
};
use rust_xlsxwriter::{Format, FormatAlign, Table, TableColumn, Workbook};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Name of the single worksheet in the workbook.
pub const WORKSHEET_NAME: &str = "Results";

/// Header row of the results table.
pub const HEADERS: [&str; 3] = [
    "Word (Total Occurrences)",
    "Documents",
    "Sentences Containing the word",
];

const COLUMN_WIDTH: f64 = 25.0;

/// Longest string Excel stores in a single cell.
pub const MAX_CELL_CHARS: usize = 32_767;

/// Writes a [`Report`] to an `.xlsx` workbook with atomic replacement.
pub(crate) struct Writer {
    output_file: PathBuf,
    backup_existing: bool,
}

impl Writer {
    /// Creates a new writer from configuration.
    pub(crate) fn new(config: &Config) -> Self {
        Self {
            output_file: config.output_file.clone(),
            backup_existing: config.backup_existing,
        }
    }

    /// Path of the workbook this writer produces.
    pub(crate) fn output_file(&self) -> &Path {
        &self.output_file
    }

    /// Writes the report as a single "Results" worksheet.
    ///
    /// # Errors
    ///
    /// Returns an error if the workbook cannot be built, saved, or moved into
    /// place.
    pub(crate) fn write_report(&self, report: &Report) -> Result<()> {
        let mut workbook = Self::build_workbook(report)
            .map_err(|e| Error::spreadsheet(&self.output_file, e))?;

        if self.output_file.exists() && self.backup_existing {
            self.backup_file(&self.output_file)?;
        }

        let temp_path = temp_path_for(&self.output_file);
        workbook
            .save(&temp_path)
            .map_err(|e| Error::spreadsheet(&self.output_file, e))?;

        // Atomic rename
        fs::rename(&temp_path, &self.output_file).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            Error::io(&self.output_file, e)
        })?;

        info!(
            "Wrote {} rows to {}",
            report.len(),
            self.output_file.display()
        );
        Ok(())
    }

    /// Lays out the report as a formatted table on one worksheet.
    fn build_workbook(report: &Report) -> std::result::Result<Workbook, rust_xlsxwriter::XlsxError> {
        let mut workbook = Workbook::new();

        let header_format = Format::new()
            .set_bold()
            .set_text_wrap()
            .set_align(FormatAlign::Top);
        let cell_format = Format::new().set_text_wrap().set_align(FormatAlign::Top);

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(WORKSHEET_NAME)?;

        let columns: Vec<TableColumn> = HEADERS
            .iter()
            .map(|header| {
                TableColumn::new()
                    .set_header(*header)
                    .set_header_format(&header_format)
            })
            .collect();

        let last_col = (HEADERS.len() - 1) as u16;
        for col in 0..=last_col {
            worksheet.set_column_width(col, COLUMN_WIDTH)?;
        }

        // an Excel table needs at least one data row below its header
        let last_row = u32::try_from(report.len().max(1)).unwrap_or(u32::MAX);
        let table = Table::new().set_columns(&columns);
        worksheet.add_table(0, 0, last_row, last_col, &table)?;

        for (row, entry) in (1u32..).zip(report.rows()) {
            let cells = [entry.word_label(), entry.document.clone(), entry.sentences_text()];
            for (col, text) in (0u16..).zip(cells) {
                let text = fit_cell(text, row, col);
                worksheet.write_string_with_format(row, col, text, &cell_format)?;
            }
        }

        debug!("Laid out table A1:C{}", last_row + 1);
        Ok(workbook)
    }

    /// Creates a timestamped backup of an existing file.
    fn backup_file(&self, path: &Path) -> Result<()> {
        let timestamp = chrono::Local::now().format("%Y%m%d%H%M%S%f");

        let filename = path
            .file_name()
            .ok_or_else(|| Error::config("Invalid file path"))?
            .to_string_lossy();

        let backup_path = path.with_file_name(format!("{filename}.backup.{timestamp}"));

        fs::copy(path, &backup_path).map_err(|e| Error::io(&backup_path, e))?;

        debug!("Created backup: {}", backup_path.display());
        Ok(())
    }
}

/// Cuts `text` to the Excel cell limit on a char boundary.
fn fit_cell(mut text: String, row: u32, col: u16) -> String {
    if let Some((cut, _)) = text.char_indices().nth(MAX_CELL_CHARS) {
        warn!(
            "Cell at row {}, column {} exceeds {} characters; truncating",
            row + 1,
            col + 1,
            MAX_CELL_CHARS
        );
        text.truncate(cut);
    }
    text
}

/// Sibling path the workbook is saved to before being renamed into place.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut raw = path.as_os_str().to_owned();
    raw.push(".tmp");
    PathBuf::from(raw)
}
