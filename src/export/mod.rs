//! Client-side file exports: CSV serialization and downloadable blobs.

pub mod csv;
pub mod download;

pub use self::{
    csv::{export_filename, to_csv, CsvRow},
    download::{filename_from_content_disposition, Download},
};
