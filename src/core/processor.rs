use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{info, warn};

use super::excel_reader::ExcelReader;
use super::normalizer::normalize_sheet;
use crate::models::{ExclusionRow, Pathogen};

/// Sheet names and the pathogen each one reviews, in processing order.
pub const SHEETS_TO_PATHOGENS: [(&str, Pathogen); 3] = [
    ("Rt_Review_COVID", Pathogen::Covid19),
    ("Rt_Review_Influenza", Pathogen::Influenza),
    ("Rt_Review_RSV", Pathogen::Rsv),
];

pub struct Processor {
    report_date: NaiveDate,
}

impl Processor {
    pub fn new(report_date: NaiveDate) -> Self {
        Self { report_date }
    }

    /// Reads every review sheet from the workbook and concatenates the
    /// normalized rows. A missing sheet is skipped with a warning; a sheet
    /// that normalizes to nothing is noted and skipped.
    pub fn process_workbook(&self, path: &Path) -> Result<Vec<ExclusionRow>> {
        let mut reader = ExcelReader::open(path)?;
        let mut combined = Vec::new();

        for (sheet_name, pathogen) in SHEETS_TO_PATHOGENS {
            if !reader.has_sheet(sheet_name) {
                warn!(sheet = sheet_name, file = %path.display(), "sheet not found in workbook");
                continue;
            }

            let sheet = reader
                .read_sheet(sheet_name)
                .with_context(|| format!("failed to read sheet {sheet_name}"))?;

            let rows = normalize_sheet(sheet_name, &sheet, pathogen, self.report_date)?;

            if rows.is_empty() {
                info!(sheet = sheet_name, "sheet has no data after processing");
                continue;
            }

            info!(sheet = sheet_name, rows = rows.len(), "normalized sheet");
            combined.extend(rows);
        }

        Ok(combined)
    }
}
