use crate::error::{Result, WorkspaceError};
use crate::scanner::FileScanner;
use crate::solution::resolve;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// One C# project and the documents it compiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    /// Absolute path of the project file
    pub path: PathBuf,
    /// Source documents, sorted
    pub documents: Vec<PathBuf>,
}

impl Project {
    /// Read a project file and collect its documents.
    ///
    /// A project file that cannot be read or parsed yields no documents.
    pub fn load(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        let name = name.into();
        let path = path.into();

        let documents = std::fs::read_to_string(&path)
            .map_err(WorkspaceError::from)
            .and_then(|text| project_documents(&text, &path))
            .unwrap_or_else(|e| {
                log::warn!("Failed to load project {}: {e}", path.display());
                Vec::new()
            });

        log::debug!("Project {name} has {} documents", documents.len());
        Self {
            name,
            path,
            documents,
        }
    }
}

/// What a project file says about its sources
#[derive(Debug, Default, PartialEq, Eq)]
struct ProjectFile {
    sdk: bool,
    default_items_disabled: bool,
    /// Raw `Include` values of `<Compile>` items, in document order
    includes: Vec<String>,
}

impl ProjectFile {
    fn parse(text: &str) -> Result<Self> {
        let mut reader = Reader::from_str(text);
        reader.config_mut().trim_text(true);

        let mut file = Self::default();
        let mut depth = 0usize;
        let mut in_default_items = false;

        loop {
            match reader.read_event()? {
                Event::Start(ref element) => {
                    file.visit(element, depth == 0)?;
                    in_default_items = is_default_items_switch(element);
                    depth += 1;
                }
                Event::Empty(ref element) => {
                    file.visit(element, depth == 0)?;
                    in_default_items = false;
                }
                Event::Text(ref text) if in_default_items => {
                    if text.unescape()?.trim().eq_ignore_ascii_case("false") {
                        file.default_items_disabled = true;
                    }
                }
                Event::End(_) => {
                    in_default_items = false;
                    depth = depth.saturating_sub(1);
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(file)
    }

    fn visit(&mut self, element: &BytesStart, is_root: bool) -> Result<()> {
        if is_root && is_named(element, "Project") {
            self.sdk = attribute(element, "Sdk")?.is_some();
        } else if is_named(element, "Compile") {
            if let Some(include) = attribute(element, "Include")? {
                self.includes.push(include);
            }
        }
        Ok(())
    }
}

fn is_named(element: &BytesStart, name: &str) -> bool {
    element
        .local_name()
        .as_ref()
        .eq_ignore_ascii_case(name.as_bytes())
}

fn is_default_items_switch(element: &BytesStart) -> bool {
    is_named(element, "EnableDefaultCompileItems") || is_named(element, "EnableDefaultItems")
}

fn attribute(element: &BytesStart, name: &str) -> Result<Option<String>> {
    let Some(attribute) = element
        .try_get_attribute(name)
        .map_err(quick_xml::Error::from)?
    else {
        return Ok(None);
    };
    Ok(Some(attribute.unescape_value()?.into_owned()))
}

/// Documents a project compiles.
///
/// SDK-style projects pick up every source under the project directory
/// unless default items are disabled; explicit `<Compile Include>` items are
/// always added.
fn project_documents(text: &str, project_path: &Path) -> Result<Vec<PathBuf>> {
    let file = ProjectFile::parse(text)?;
    let project_dir = project_path.parent().unwrap_or_else(|| Path::new(""));
    let mut documents = BTreeSet::new();

    if file.sdk && !file.default_items_disabled {
        documents.extend(FileScanner::new(project_dir).scan());
    }

    for items in &file.includes {
        for include in items.split(';').map(str::trim).filter(|i| !i.is_empty()) {
            if include.contains('*') || include.contains("$(") {
                log::debug!("Skipping compile item pattern {include}");
                continue;
            }
            documents.insert(resolve(project_dir, include));
        }
    }

    Ok(documents.into_iter().collect())
}
