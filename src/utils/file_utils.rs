use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;

pub fn is_xlsx_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("xlsx"))
        .unwrap_or(false)
}

/// Where the reviewer's browser drops the workbook:
/// `~/Downloads/Rt_Review_<YYYYMMDD>.xlsx`.
pub fn default_workbook_path(report_date: NaiveDate) -> Result<PathBuf> {
    let home = std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .context("could not determine the home directory; pass --file explicitly")?;

    Ok(PathBuf::from(home)
        .join("Downloads")
        .join(format!("Rt_Review_{}.xlsx", report_date.format("%Y%m%d"))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_xlsx_file() {
        assert!(is_xlsx_file(Path::new("Rt_Review_20250601.xlsx")));
        assert!(is_xlsx_file(Path::new("REVIEW.XLSX")));
        assert!(!is_xlsx_file(Path::new("review.csv")));
        assert!(!is_xlsx_file(Path::new("review")));
    }

    #[test]
    fn test_default_workbook_path_uses_compact_date() {
        let d = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let path = default_workbook_path(d).unwrap();
        assert!(path.ends_with("Downloads/Rt_Review_20250601.xlsx"));
    }
}
