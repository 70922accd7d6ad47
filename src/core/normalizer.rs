use anyhow::Result;
use chrono::NaiveDate;

use super::excel_reader::SheetData;
use crate::error::ExtractorError;
use crate::models::{ExclusionRow, Pathogen};

/// The spreadsheet opens with rows that are nice for humans but not for
/// parsing.
pub const SKIP_ROWS: usize = 3;

/// Expected columns, in sheet order. Anything to the right is ignored.
pub const COLUMN_NAMES: [&str; 11] = [
    "state",
    "dates_affected",
    "observed_volume",
    "expected_volume",
    "initial_thoughts",
    "state_abb",
    "review_1_decision",
    "reviewer_2_decision",
    "final_decision",
    "drop_dates",
    "additional_reasoning",
];

const COL_STATE: usize = 0;
const COL_STATE_ABB: usize = 5;
const COL_REVIEW_1: usize = 6;
const COL_REVIEWER_2: usize = 7;
const COL_FINAL_DECISION: usize = 8;
const COL_DROP_DATES: usize = 9;

const DROP_DATE_FORMAT: &str = "%Y%m%d";

/// Normalizes one review sheet into exclusion rows: trims the banner,
/// explodes the pipe-delimited drop dates, and attaches the run's report
/// date and pathogen.
///
/// A sheet with no data rows below the banner is a valid empty result.
/// Fewer than 11 columns is a schema error.
pub fn normalize_sheet(
    sheet_name: &str,
    sheet: &SheetData,
    pathogen: Pathogen,
    report_date: NaiveDate,
) -> Result<Vec<ExclusionRow>> {
    if sheet.height() <= SKIP_ROWS {
        return Ok(Vec::new());
    }

    if sheet.width < COLUMN_NAMES.len() {
        return Err(ExtractorError::MissingColumns {
            sheet: sheet_name.to_string(),
            found: sheet.width,
            expected: COLUMN_NAMES.len(),
        }
        .into());
    }

    let mut out = Vec::new();

    for row in &sheet.rows[SKIP_ROWS..] {
        // Blank spreadsheet rows have no state; drop them.
        let Some(state) = row[COL_STATE].clone() else {
            continue;
        };

        let state_abb = row[COL_STATE_ABB].clone();

        for token in split_drop_dates(row[COL_DROP_DATES].as_deref()) {
            let reference_date = token
                .as_deref()
                .and_then(|t| NaiveDate::parse_from_str(t, DROP_DATE_FORMAT).ok());

            out.push(ExclusionRow {
                report_date,
                state: state.clone(),
                state_abb: state_abb.clone(),
                pathogen,
                review_1_decision: row[COL_REVIEW_1].clone(),
                reviewer_2_decision: row[COL_REVIEWER_2].clone(),
                final_decision: row[COL_FINAL_DECISION].clone(),
                reference_date,
                geo_value: state_abb.clone(),
            });
        }
    }

    Ok(out)
}

/// Splits the raw drop-dates cell on `|`, trimming each token and turning
/// empty tokens into `None`. A null cell still yields exactly one token so
/// the reviewer's decision row survives the explode.
fn split_drop_dates(raw: Option<&str>) -> Vec<Option<String>> {
    let Some(raw) = raw else {
        return vec![None];
    };

    raw.split('|')
        .map(|token| {
            let trimmed = token.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}
