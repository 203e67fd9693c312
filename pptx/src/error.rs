use thiserror::Error;

/// Export failures surface to the caller as-is; there is no retry and the
/// on-disk result is undefined after a failure.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
}
