//! Export error types.

use thiserror::Error;

/// Errors that can occur while rendering or writing a workbook.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Workbook construction or save failure.
    #[error("workbook error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Filesystem failure around the output path.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
