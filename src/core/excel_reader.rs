use anyhow::{Context, Result};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::Path;

/// Thin wrapper over a calamine workbook handle.
pub struct ExcelReader {
    workbook: Xlsx<std::io::BufReader<std::fs::File>>,
}

impl ExcelReader {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        let workbook: Xlsx<_> = open_workbook(path_ref)
            .with_context(|| format!("failed to open workbook: {}", path_ref.display()))?;

        Ok(Self { workbook })
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }

    pub fn has_sheet(&self, sheet_name: &str) -> bool {
        self.workbook.sheet_names().iter().any(|n| n == sheet_name)
    }

    pub fn read_sheet(&mut self, sheet_name: &str) -> Result<SheetData> {
        let range = self
            .workbook
            .worksheet_range(sheet_name)
            .with_context(|| format!("failed to read sheet: {sheet_name}"))?;

        Ok(Self::range_to_sheet(&range))
    }

    fn range_to_sheet(range: &Range<Data>) -> SheetData {
        let (Some(start), Some(end)) = (range.start(), range.end()) else {
            return SheetData {
                rows: Vec::new(),
                width: 0,
            };
        };

        let width = (end.1 - start.1 + 1) as usize;
        let mut rows = Vec::with_capacity((end.0 - start.0 + 1) as usize);

        for row in start.0..=end.0 {
            let mut row_data = Vec::with_capacity(width);
            for col in start.1..=end.1 {
                let cell_value = range.get_value((row, col)).and_then(Self::cell_to_string);
                row_data.push(cell_value);
            }
            rows.push(row_data);
        }

        SheetData { rows, width }
    }

    /// Renders a cell as text; empty cells become `None`. Whole numbers are
    /// rendered without a decimal point so numeric date tokens like
    /// `20250101` survive the float round-trip.
    fn cell_to_string(data: &Data) -> Option<String> {
        match data {
            Data::Empty => None,
            Data::String(s) => Some(s.clone()),
            Data::Float(f) => {
                if f.fract() == 0.0 {
                    Some(format!("{}", *f as i64))
                } else {
                    Some(format!("{f}"))
                }
            }
            Data::Int(i) => Some(format!("{i}")),
            Data::Bool(b) => Some(format!("{b}")),
            Data::DateTime(dt) => Some(format!("{}", dt.as_f64())),
            Data::Error(e) => Some(format!("{e:?}")),
            _ => None,
        }
    }
}

/// A sheet materialized as rows of nullable text cells, in sheet order.
#[derive(Debug, Clone)]
pub struct SheetData {
    pub rows: Vec<Vec<Option<String>>>,
    pub width: usize,
}

impl SheetData {
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col)?.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_sheet_data_cell_access() {
        let sheet = SheetData {
            rows: vec![
                vec![cell("state"), None],
                vec![cell("Alaska"), cell("AK")],
            ],
            width: 2,
        };

        assert_eq!(sheet.height(), 2);
        assert_eq!(sheet.cell(0, 0), Some("state"));
        assert_eq!(sheet.cell(0, 1), None);
        assert_eq!(sheet.cell(1, 1), Some("AK"));
        assert_eq!(sheet.cell(2, 0), None);
    }

    #[test]
    fn test_cell_to_string_whole_float() {
        assert_eq!(
            ExcelReader::cell_to_string(&Data::Float(20250101.0)),
            Some("20250101".to_string())
        );
        assert_eq!(
            ExcelReader::cell_to_string(&Data::Float(1.5)),
            Some("1.5".to_string())
        );
    }

    #[test]
    fn test_cell_to_string_empty_is_none() {
        assert_eq!(ExcelReader::cell_to_string(&Data::Empty), None);
    }
}
