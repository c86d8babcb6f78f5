use ignore::WalkBuilder;
use std::path::{Component, Path, PathBuf};

/// Finds the C# sources an SDK-style project compiles by default
pub struct FileScanner {
    root: PathBuf,
}

impl FileScanner {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// All `*.cs` files under the root, sorted.
    ///
    /// Build output (`bin/`, `obj/`) and hidden directories are skipped.
    /// Ignore files are not consulted since the build does not honor them.
    pub fn scan(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        let root = self.root.clone();
        let mut builder = WalkBuilder::new(&self.root);
        builder.standard_filters(false).hidden(true);
        builder.filter_entry(move |entry| !FileScanner::is_build_output(entry.path(), &root));

        for result in builder.build() {
            match result {
                Ok(entry) => {
                    let Some(file_type) = entry.file_type() else {
                        continue;
                    };
                    if !file_type.is_file() {
                        continue;
                    }

                    let path = entry.path();
                    if !Self::is_source_file(path) {
                        continue;
                    }

                    files.push(path.to_path_buf());
                }
                Err(e) => log::warn!("Failed to read entry: {e}"),
            }
        }

        files.sort();
        log::debug!("Found {} source files under {}", files.len(), self.root.display());
        files
    }

    fn is_source_file(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(SOURCE_EXTENSION))
    }

    fn is_build_output(path: &Path, root: &Path) -> bool {
        let Ok(relative) = path.strip_prefix(root) else {
            return false;
        };

        // only the project's own output folders
        let mut components = relative.components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) => {
                path.is_dir()
                    && BUILD_OUTPUT_DIRS
                        .iter()
                        .any(|dir| name.eq_ignore_ascii_case(dir))
            }
            _ => false,
        }
    }
}

const SOURCE_EXTENSION: &str = "cs";

const BUILD_OUTPUT_DIRS: &[&str] = &["bin", "obj"];
