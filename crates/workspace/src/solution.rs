use regex::Regex;
use std::path::{Component, Path, PathBuf};
use std::sync::OnceLock;

/// Project entry listed in a solution file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectReference {
    pub name: String,
    /// Absolute path of the project file
    pub path: PathBuf,
}

fn project_line() -> &'static Regex {
    static PROJECT_LINE: OnceLock<Regex> = OnceLock::new();
    PROJECT_LINE.get_or_init(|| {
        Regex::new(r#"(?m)^\s*Project\("\{[^}]*\}"\)\s*=\s*"([^"]*)"\s*,\s*"([^"]*)""#)
            .expect("valid regex")
    })
}

/// C# project entries of a `.sln` file, in file order.
///
/// Solution folders and projects in other languages are skipped.
pub fn parse_solution(text: &str, solution_dir: &Path) -> Vec<ProjectReference> {
    project_line()
        .captures_iter(text)
        .filter_map(|captures| {
            let name = captures[1].trim();
            let relative = captures[2].trim();

            if !has_extension(relative, "csproj") {
                log::debug!("Skipping solution entry {name} ({relative})");
                return None;
            }

            Some(ProjectReference {
                name: name.to_string(),
                path: resolve(solution_dir, relative),
            })
        })
        .collect()
}

fn has_extension(path: &str, extension: &str) -> bool {
    path.rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case(extension))
}

/// Join a build-file path (which may use `\`) onto a base directory
pub(crate) fn resolve(base: &Path, relative: &str) -> PathBuf {
    let relative = relative.replace('\\', "/");
    normalize(&base.join(relative))
}

/// Lexically drop `.` and `..` components
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SOLUTION: &str = r#"
Microsoft Visual Studio Solution File, Format Version 12.00
# Visual Studio Version 17
Project("{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}") = "App", "src\App\App.csproj", "{11111111-1111-1111-1111-111111111111}"
EndProject
Project("{2150E333-8FDC-42A3-9474-1A3956D46DE8}") = "Solution Items", "Solution Items", "{22222222-2222-2222-2222-222222222222}"
EndProject
Project("{F2A71F9B-5D33-465A-A702-920D77279786}") = "Scripts", "tools\Scripts.fsproj", "{33333333-3333-3333-3333-333333333333}"
EndProject
Project("{9A19103F-16F7-4668-BE54-9A1E7A4F7556}") = "App.Tests", "tests\..\tests\App.Tests\App.Tests.csproj", "{44444444-4444-4444-4444-444444444444}"
EndProject
"#;

    #[test]
    fn lists_csharp_projects_in_order() {
        let projects = parse_solution(SOLUTION, Path::new("/repo"));

        assert_eq!(
            projects,
            vec![
                ProjectReference {
                    name: "App".to_string(),
                    path: PathBuf::from("/repo/src/App/App.csproj"),
                },
                ProjectReference {
                    name: "App.Tests".to_string(),
                    path: PathBuf::from("/repo/tests/App.Tests/App.Tests.csproj"),
                },
            ]
        );
    }

    #[test]
    fn empty_solution_has_no_projects() {
        assert!(parse_solution("Global\nEndGlobal\n", Path::new("/repo")).is_empty());
    }

    #[test]
    fn normalize_drops_dot_segments() {
        assert_eq!(
            normalize(Path::new("/a/./b/../c/d.cs")),
            PathBuf::from("/a/c/d.cs")
        );
    }
}
