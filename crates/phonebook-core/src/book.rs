use crate::directory::Directory;
use crate::domain::Contact;
use crate::dto::{AddOutcome, RemoveOutcome};
use crate::error::{CoreError, ImportError};
use crate::import::{import_lines, split_lines, TextSource, DEFAULT_FIELD_SEPARATOR};
use crate::report::ReportSink;
use crate::table::{render_table, TableLabels};
use std::collections::BTreeMap;
use tracing::debug;

/// A directory paired with the sink its operations report to.
pub struct PhoneBook<S> {
    directory: Directory,
    sink: S,
    field_separator: String,
    labels: TableLabels,
}

impl<S: ReportSink> PhoneBook<S> {
    pub fn new(sink: S) -> Self {
        Self {
            directory: Directory::new(),
            sink,
            field_separator: DEFAULT_FIELD_SEPARATOR.to_string(),
            labels: TableLabels::default(),
        }
    }

    pub fn with_directory(directory: Directory, sink: S) -> Self {
        Self {
            directory,
            ..Self::new(sink)
        }
    }

    pub fn with_field_separator(mut self, separator: &str) -> Result<Self, CoreError> {
        if separator.is_empty() {
            return Err(CoreError::EmptyFieldSeparator);
        }
        self.field_separator = separator.to_string();
        Ok(self)
    }

    pub fn with_labels(mut self, labels: TableLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn add(&mut self, name: &str, phone: &str, email: &str) -> AddOutcome {
        self.directory.add(name, phone, email)
    }

    /// Empty query returns the whole book without reporting anything.
    /// Otherwise every match is reported as `name, phone, email`.
    pub fn find(&mut self, query: &str) -> BTreeMap<String, Contact> {
        if query.is_empty() {
            return self.directory.show_all().clone();
        }
        let found = self.directory.search(query);
        for contact in found.values() {
            self.sink.emit(&contact.summary_line());
        }
        found
    }

    pub fn remove(&mut self, query: &str) -> RemoveOutcome {
        let outcome = self.directory.remove(query);
        self.sink.emit(&format!("Deleted {} contacts", outcome.deleted));
        outcome
    }

    pub fn import_from(
        &mut self,
        source: &dyn TextSource,
    ) -> Result<Vec<AddOutcome>, ImportError> {
        let text = source.read_text()?;
        let lines = split_lines(&text);
        debug!(source = source.source_name(), lines = lines.len(), "importing");
        let added = import_lines(&mut self.directory, lines, &self.field_separator)?;
        self.sink.emit(&format!("Added {} records", added.len()));
        Ok(added)
    }

    pub fn table_lines(&self) -> Vec<String> {
        render_table(&self.directory, &self.labels)
    }

    pub fn show_table(&mut self) {
        for line in self.table_lines() {
            self.sink.emit(&line);
        }
    }

    pub fn show_book(&self) -> &BTreeMap<String, Contact> {
        self.directory.show_all()
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn reset(&mut self) {
        self.directory.clear();
    }

    pub fn into_parts(self) -> (Directory, S) {
        (self.directory, self.sink)
    }
}
