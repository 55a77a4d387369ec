use crate::domain::Contact;
use crate::dto::{AddOutcome, AddStatus, RemoveOutcome};
use crate::error::CoreError;
use crate::rules::{is_valid_email, is_valid_phone};
use std::collections::BTreeMap;
use tracing::debug;

pub const DEFAULT_KEY_SEPARATOR: &str = "_";

pub fn contact_key(normalized_email: &str, name: &str, separator: &str) -> String {
    let mut key = String::with_capacity(normalized_email.len() + separator.len() + name.len());
    key.push_str(normalized_email);
    key.push_str(separator);
    key.push_str(name);
    key
}

/// In-memory contact store keyed by `email + separator + name`.
#[derive(Debug, Clone)]
pub struct Directory {
    entries: BTreeMap<String, Contact>,
    key_separator: String,
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

impl Directory {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            key_separator: DEFAULT_KEY_SEPARATOR.to_string(),
        }
    }

    pub fn with_key_separator(separator: &str) -> Result<Self, CoreError> {
        if separator.is_empty() {
            return Err(CoreError::EmptyKeySeparator);
        }
        Ok(Self {
            entries: BTreeMap::new(),
            key_separator: separator.to_string(),
        })
    }

    pub fn key_separator(&self) -> &str {
        &self.key_separator
    }

    /// Validates and stores a contact. An existing record under the same key
    /// is replaced. Nothing is stored when validation fails.
    pub fn add(&mut self, name: &str, phone: &str, email: &str) -> AddOutcome {
        let candidate = Contact::from_raw(name, phone, email);
        if !(is_valid_email(email) && is_valid_phone(phone)) {
            debug!(contact = name, phone, email, "contact rejected by validation");
            return AddOutcome::new(AddStatus::ValidationError, candidate);
        }

        let key = contact_key(&candidate.email, name, &self.key_separator);
        if self.entries.insert(key.clone(), candidate.clone()).is_some() {
            debug!(%key, "contact overwritten");
        }
        AddOutcome::new(AddStatus::Created, candidate)
    }

    pub fn show_all(&self) -> &BTreeMap<String, Contact> {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&Contact> {
        self.entries.get(key)
    }

    /// Records whose concatenated field text contains `query`. Matching is
    /// case-sensitive; an empty query matches everything.
    pub fn search(&self, query: &str) -> BTreeMap<String, Contact> {
        self.entries
            .iter()
            .filter(|(_, contact)| contact.search_text().contains(query))
            .map(|(key, contact)| (key.clone(), contact.clone()))
            .collect()
    }

    pub fn remove(&mut self, query: &str) -> RemoveOutcome {
        let matched = self.search(query);
        for key in matched.keys() {
            self.entries.remove(key);
        }
        RemoveOutcome {
            deleted: matched.len(),
            deleted_data: matched,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contacts(&self) -> impl Iterator<Item = &Contact> {
        self.entries.values()
    }
}
