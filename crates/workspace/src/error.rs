use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WorkspaceError>;

#[derive(Error, Debug)]
pub enum WorkspaceError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("XML error: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("Build description not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Unsupported build description: {}", .0.display())]
    Unsupported(PathBuf),
}
