use crate::domain::Contact;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const STATUS_CREATED: u16 = 201;
pub const STATUS_VALIDATION_ERROR: u16 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum AddStatus {
    Created,
    ValidationError,
}

impl AddStatus {
    pub fn code(self) -> u16 {
        match self {
            AddStatus::Created => STATUS_CREATED,
            AddStatus::ValidationError => STATUS_VALIDATION_ERROR,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AddStatus::Created => "added",
            AddStatus::ValidationError => "error with data validation",
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, AddStatus::Created)
    }
}

impl From<AddStatus> for u16 {
    fn from(status: AddStatus) -> Self {
        status.code()
    }
}

impl TryFrom<u16> for AddStatus {
    type Error = String;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            STATUS_CREATED => Ok(AddStatus::Created),
            STATUS_VALIDATION_ERROR => Ok(AddStatus::ValidationError),
            other => Err(format!("unknown add status code: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOutcome {
    pub status: AddStatus,
    pub description: String,
    pub data: Contact,
}

impl AddOutcome {
    pub fn new(status: AddStatus, data: Contact) -> Self {
        Self {
            status,
            description: status.description().to_string(),
            data,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveOutcome {
    pub deleted: usize,
    pub deleted_data: BTreeMap<String, Contact>,
}
