mod csv;
mod file_utils;

pub use csv::to_csv_bytes;
pub use file_utils::{default_workbook_path, is_xlsx_file};
