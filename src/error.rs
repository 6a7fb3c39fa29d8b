use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),

    #[error("No build directory found among: {0}")]
    BuildDirNotFound(String),

    #[error("No files added to {}", .0.display())]
    EmptyArchive(PathBuf),
}

impl Error {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::BuildDirNotFound(_) => 2,
            Error::EmptyArchive(_) => 3,
            _ => 1,
        }
    }
}
