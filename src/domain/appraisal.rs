use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AppraisalStatus {
    #[default]
    Draft,
    Completed,
}

impl AppraisalStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AppraisalStatus::Draft => "DRAFT",
            AppraisalStatus::Completed => "COMPLETED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AppraisalStatus::Draft => "Draft",
            AppraisalStatus::Completed => "Completed",
        }
    }
}

impl FromStr for AppraisalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(AppraisalStatus::Draft),
            "COMPLETED" => Ok(AppraisalStatus::Completed),
            other => Err(format!("unknown status {other:?}")),
        }
    }
}

impl fmt::Display for AppraisalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored appraisal, as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Appraisal {
    pub id: i64,
    #[serde(skip)]
    pub user_id: String,
    pub title: String,
    pub address: String,
    pub suburb: String,
    pub postcode: String,
    pub state: String,
    pub status: AppraisalStatus,
    pub data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated fields for a create or update.
#[derive(Debug, Clone, PartialEq)]
pub struct AppraisalInput {
    pub title: String,
    pub address: String,
    pub suburb: String,
    pub postcode: String,
    pub state: String,
    pub status: AppraisalStatus,
    pub data: Value,
    /// Client-chosen key for this capture; a create repeating it is not stored twice.
    pub form_key: Option<String>,
}

/// What a create did.
#[derive(Debug, Clone, PartialEq)]
pub enum Created {
    Fresh(Appraisal),
    /// The form key was already used; this is the record that first create made.
    Replayed(Appraisal),
}

impl Created {
    pub fn record(&self) -> &Appraisal {
        match self {
            Created::Fresh(record) | Created::Replayed(record) => record,
        }
    }

    pub fn into_record(self) -> Appraisal {
        match self {
            Created::Fresh(record) | Created::Replayed(record) => record,
        }
    }
}
