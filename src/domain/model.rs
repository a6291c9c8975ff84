use crate::utils::error::FormError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One user's contact info inside the repeatable list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordEntry {
    pub name: String,
    pub email: String,
    pub mobile: String,
}

impl RecordEntry {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        mobile: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            mobile: mobile.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Mobile => &self.mobile,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Mobile => &mut self.mobile,
        };
        *slot = value.into();
    }

    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Field {
    Name,
    Email,
    Mobile,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Mobile];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Mobile => "mobile",
        }
    }

    pub(crate) fn slot(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Mobile => 2,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "mobile" => Ok(Field::Mobile),
            _ => Err(FormError::InvalidField {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Field {
    type Error = FormError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Interaction state of a single field as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldState {
    Pristine,
    TouchedValid,
    TouchedInvalid,
}

/// Ordered entry values captured at submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub userinfo: Vec<RecordEntry>,
    pub captured_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(userinfo: Vec<RecordEntry>) -> Self {
        Self {
            userinfo,
            captured_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.userinfo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.userinfo.is_empty()
    }
}
