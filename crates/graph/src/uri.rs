use crate::error::{GraphError, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::Path;
use url::Url;

/// Absolute `file://` reference to a source document
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentUri(Url);

impl DocumentUri {
    /// Build a URI from an absolute file path
    pub fn from_file_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        Url::from_file_path(path).map(Self).map_err(|()| {
            GraphError::invalid_path(format!("{} is not an absolute file path", path.display()))
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for DocumentUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DocumentUri {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
