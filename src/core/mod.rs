mod excel_reader;
pub mod normalizer;
mod processor;
pub mod splitter;

pub use excel_reader::{ExcelReader, SheetData};
pub use processor::{Processor, SHEETS_TO_PATHOGENS};
