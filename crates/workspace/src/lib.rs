//! # LSIF Workspace
//!
//! Discovers C# projects and their documents from a build description.
//!
//! ## Pipeline
//!
//! ```text
//! Build description (.sln / .csproj)
//!     │
//!     ├──> Solution parser
//!     │      └─> Project files
//!     │
//!     └──> Project loader
//!            ├─> SDK-style: scan *.cs (skip bin/, obj/, hidden)
//!            └─> Legacy: <Compile Include="..."/> items
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use lsif_workspace::Workspace;
//!
//! let workspace = Workspace::load("/path/to/App.sln")?;
//! for project in workspace.projects() {
//!     println!("{}: {} documents", project.name, project.documents.len());
//! }
//! # Ok::<(), lsif_workspace::WorkspaceError>(())
//! ```

mod error;
mod project;
mod scanner;
mod solution;

pub use error::{Result, WorkspaceError};
pub use project::Project;
pub use scanner::FileScanner;
pub use solution::{parse_solution, ProjectReference};

use std::path::{Path, PathBuf};

/// Projects described by one build description
#[derive(Debug, Clone)]
pub struct Workspace {
    description: PathBuf,
    projects: Vec<Project>,
}

impl Workspace {
    /// Load a `.sln` or `.csproj` file.
    ///
    /// The description itself must exist; projects it lists that are missing
    /// are logged and come back without documents.
    pub fn load(description: impl AsRef<Path>) -> Result<Self> {
        let description = description.as_ref();
        if !description.is_file() {
            return Err(WorkspaceError::NotFound(description.to_path_buf()));
        }
        let description = std::fs::canonicalize(description)?;
        let directory = description
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let extension = description
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let projects = match extension.as_deref() {
            Some("sln") => {
                let text = std::fs::read_to_string(&description)?;
                parse_solution(&text, &directory)
                    .into_iter()
                    .map(|reference| Project::load(reference.name, reference.path))
                    .collect()
            }
            Some("csproj") => {
                let name = description
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default();
                vec![Project::load(name, description.clone())]
            }
            _ => return Err(WorkspaceError::Unsupported(description)),
        };

        log::info!(
            "Loaded {} projects from {}",
            projects.len(),
            description.display()
        );

        Ok(Self {
            description,
            projects,
        })
    }

    /// Absolute path of the loaded build description
    #[must_use]
    pub fn description(&self) -> &Path {
        &self.description
    }

    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Total number of documents across all projects
    #[must_use]
    pub fn document_count(&self) -> usize {
        self.projects.iter().map(|p| p.documents.len()).sum()
    }
}
