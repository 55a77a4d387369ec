use crate::domain::{normalize_email, normalize_phone};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub clean_phone: String,
    pub email: String,
}

impl Contact {
    /// Builds a record from raw input. Normalization happens here whether or
    /// not the input is valid; validation is the caller's concern.
    pub fn from_raw(name: &str, phone: &str, email: &str) -> Self {
        Self {
            name: name.to_string(),
            phone: phone.to_string(),
            clean_phone: normalize_phone(phone),
            email: normalize_email(email),
        }
    }

    /// Field values concatenated in declaration order.
    pub fn search_text(&self) -> String {
        let mut text = String::with_capacity(
            self.name.len() + self.phone.len() + self.clean_phone.len() + self.email.len(),
        );
        text.push_str(&self.name);
        text.push_str(&self.phone);
        text.push_str(&self.clean_phone);
        text.push_str(&self.email);
        text
    }

    pub fn summary_line(&self) -> String {
        format!("{}, {}, {}", self.name, self.phone, self.email)
    }
}
