use crate::directory::Directory;
use crate::dto::AddOutcome;
use crate::error::{CoreError, ImportError};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

pub const DEFAULT_FIELD_SEPARATOR: &str = ";";

pub trait TextSource {
    fn source_name(&self) -> &str;
    fn read_text(&self) -> Result<String, ImportError>;
}

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl TextSource for FileSource {
    fn source_name(&self) -> &str {
        &self.name
    }

    fn read_text(&self) -> Result<String, ImportError> {
        fs::read_to_string(&self.path).map_err(|source| ImportError::Read {
            path: self.path.clone(),
            source,
        })
    }
}

#[derive(Debug, Clone)]
pub struct InlineSource {
    text: String,
}

impl InlineSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TextSource for InlineSource {
    fn source_name(&self) -> &str {
        "inline"
    }

    fn read_text(&self) -> Result<String, ImportError> {
        Ok(self.text.clone())
    }
}

/// Splits on `\n` / `\r\n` after dropping the trailing run of line breaks.
/// Blank lines in the middle are kept.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.trim_end_matches(['\r', '\n']).lines().collect()
}

/// Feeds each line to [`Directory::add`] and keeps the successful outcomes in
/// input order. Missing fields are treated as empty strings and extra fields
/// are ignored.
pub fn import_lines<'a, I>(
    directory: &mut Directory,
    lines: I,
    field_separator: &str,
) -> Result<Vec<AddOutcome>, CoreError>
where
    I: IntoIterator<Item = &'a str>,
{
    if field_separator.is_empty() {
        return Err(CoreError::EmptyFieldSeparator);
    }

    let mut added = Vec::new();
    for (index, line) in lines.into_iter().enumerate() {
        let mut fields = line.split(field_separator);
        let name = fields.next().unwrap_or_default();
        let phone = fields.next().unwrap_or_default();
        let email = fields.next().unwrap_or_default();

        let outcome = directory.add(name, phone, email);
        if outcome.is_success() {
            added.push(outcome);
        } else {
            debug!(line = index + 1, "import line rejected");
        }
    }
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::{import_lines, split_lines, InlineSource, TextSource};
    use crate::directory::Directory;
    use crate::error::CoreError;

    #[test]
    fn split_lines_strips_trailing_breaks() {
        assert_eq!(split_lines("a\nb\n\n\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\r\nb\r\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert!(split_lines("").is_empty());
        assert!(split_lines("\n\n").is_empty());
    }

    #[test]
    fn import_keeps_only_successes() {
        let mut directory = Directory::new();
        let text = "A;+12125551234;a@x.com\nB;bad;b@x.com\n";
        let added = import_lines(&mut directory, split_lines(text), ";").expect("import");
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].data.name, "A");
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn import_tolerates_short_lines() {
        let mut directory = Directory::new();
        let lines = ["OnlyName", "Name;555-123-4567", ""];
        let added = import_lines(&mut directory, lines, ";").expect("import");
        assert!(added.is_empty());
        assert!(directory.is_empty());
    }

    #[test]
    fn import_ignores_extra_fields_and_preserves_order() {
        let mut directory = Directory::new();
        let lines = [
            "Zed;555-123-4567;zed@x.io;extra",
            "Amy;555-765-4321;amy@x.io",
        ];
        let added = import_lines(&mut directory, lines, ";").expect("import");
        let names: Vec<&str> = added.iter().map(|o| o.data.name.as_str()).collect();
        assert_eq!(names, vec!["Zed", "Amy"]);
        assert_eq!(added[0].data.email, "zed@x.io");
    }

    #[test]
    fn import_rejects_empty_separator() {
        let mut directory = Directory::new();
        let err = import_lines(&mut directory, ["a"], "").unwrap_err();
        assert_eq!(err, CoreError::EmptyFieldSeparator);
    }

    #[test]
    fn inline_source_returns_text() {
        let source = InlineSource::new("x");
        assert_eq!(source.source_name(), "inline");
        assert_eq!(source.read_text().expect("read"), "x");
    }
}
