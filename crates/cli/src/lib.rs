use anyhow::{Context, Result};
use clap::Parser;
use lsif_code_structure::{CSharpDocument, CodeElement, StructureExtractor};
use lsif_graph::{DocumentUri, Graph, GraphBuilder};
use lsif_workspace::Workspace;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

fn print_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "lsif-client")]
#[command(about = "Emit an LSIF document graph for a C# solution", long_about = None)]
#[command(version)]
struct Cli {
    /// Solution (.sln) or project (.csproj) file
    build_description: PathBuf,
}

pub fn main_entry() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let graph = build_graph(
        &cli.build_description,
        &StructureExtractor::default(),
        &mut io::stderr().lock(),
    )?;

    let json = graph.serialize().context("Failed to serialize graph")?;
    print_stdout(&json)
}

/// Load a build description and add one vertex per document.
///
/// Each project's file path is written to `progress` as it is visited.
pub fn build_graph(
    description: &Path,
    extractor: &StructureExtractor,
    progress: &mut impl Write,
) -> Result<Graph> {
    let workspace = Workspace::load(description)
        .with_context(|| format!("Failed to load {}", description.display()))?;

    let mut builder = GraphBuilder::new();

    for project in workspace.projects() {
        writeln!(progress, "{}", project.path.display())?;

        for document in &project.documents {
            let uri = DocumentUri::from_file_path(document)
                .with_context(|| format!("Invalid document path {}", document.display()))?;
            builder.add_document(uri);

            log_structure(document, extractor);
        }
    }

    log::info!(
        "Added {} documents from {} projects",
        builder.len(),
        workspace.projects().len()
    );
    Ok(builder.build())
}

// TODO: attach extracted elements to the graph once range and result-set vertices exist
fn log_structure(document: &Path, extractor: &StructureExtractor) {
    let parsed = match CSharpDocument::from_file(document) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::warn!("Failed to read {}: {e}", document.display());
            return;
        }
    };

    let elements = extractor.extract(&parsed, &parsed, parsed.text());
    log_elements(document, &elements, 0);
}

fn log_elements(document: &Path, elements: &[CodeElement], depth: usize) {
    for element in elements {
        log::debug!(
            "{}: {:indent$}{element}",
            document.display(),
            "",
            indent = depth * 2
        );
        log_elements(document, element.children().unwrap_or_default(), depth + 1);
    }
}
