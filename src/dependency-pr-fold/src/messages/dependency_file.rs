//! Updated dependency files.

use serde::{Deserialize, Serialize};

/// A file rewritten by a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyFile {
    /// Directory containing the file.
    pub directory: String,

    /// File name.
    pub name: String,

    /// Full replacement content.
    pub content: String,
}

impl DependencyFile {
    /// Returns the logical path of the file with forward slashes.
    ///
    /// `directory` and `name` are joined with a single separator unless one of
    /// them already supplies it at the junction. Backslashes become forward
    /// slashes. Nothing else is canonicalized.
    #[must_use]
    pub fn path(&self) -> String {
        let joined = if self.directory.is_empty() {
            self.name.clone()
        } else if self.name.is_empty()
            || ends_with_separator(&self.directory)
            || starts_with_separator(&self.name)
        {
            format!("{}{}", self.directory, self.name)
        } else {
            format!("{}/{}", self.directory, self.name)
        };

        joined.replace('\\', "/")
    }
}

fn ends_with_separator(value: &str) -> bool {
    value.ends_with('/') || value.ends_with('\\')
}

fn starts_with_separator(value: &str) -> bool {
    value.starts_with('/') || value.starts_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(directory: &str, name: &str) -> DependencyFile {
        DependencyFile {
            directory: directory.to_string(),
            name: name.to_string(),
            content: String::new(),
        }
    }

    #[test]
    fn joins_root_directory() {
        assert_eq!(
            file("/", "Directory.Packages.props").path(),
            "/Directory.Packages.props"
        );
    }

    #[test]
    fn inserts_separator_between_parts() {
        assert_eq!(file("/src/app", "app.csproj").path(), "/src/app/app.csproj");
    }

    #[test]
    fn normalizes_backslashes() {
        assert_eq!(file("src\\lib", "a.csproj").path(), "src/lib/a.csproj");
        assert_eq!(file("src\\lib\\", "a.csproj").path(), "src/lib/a.csproj");
    }

    #[test]
    fn equivalent_spellings_share_a_path() {
        assert_eq!(file("/", "x").path(), file("", "/x").path());
        assert_eq!(file("/src", "x").path(), file("\\src\\", "x").path());
    }

    #[test]
    fn preserves_case() {
        assert_ne!(file("/", "App.csproj").path(), file("/", "app.csproj").path());
    }
}
