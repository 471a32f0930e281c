mod csv_repository;
mod file_repository;
mod row;
mod staging;
mod traits;
mod workbook_repository;

pub use csv_repository::CsvAdvisorRepository;
pub use file_repository::{FileAdvisorRepository, FileFormat};
pub use traits::{AdvisorLoader, AdvisorWriter, LoadedRecords};
pub use workbook_repository::{WorkbookAdvisorLoader, WorkbookAdvisorWriter, SHEET_NAME};
