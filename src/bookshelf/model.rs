use crate::error::ShelfError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Available,
    CheckedOut,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Available => "available",
            Status::CheckedOut => "checked-out",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Status::Available),
            "checked-out" => Ok(Status::CheckedOut),
            other => Err(ShelfError::InvalidStatus(other.to_string())),
        }
    }
}

/// Publication year exactly as it was entered: a JSON number or free text.
/// Anything else found in a hand-edited file (`1965.0`, `null`) is kept
/// verbatim in `Other` so the rest of the catalog still loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Number(n) => write!(f, "{}", n),
            Year::Text(s) => f.write_str(s),
            Year::Other(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for Year {
    fn from(n: i64) -> Self {
        Year::Number(n)
    }
}

impl From<String> for Year {
    fn from(s: String) -> Self {
        Year::Text(s)
    }
}

impl From<&str> for Year {
    fn from(s: &str) -> Self {
        Year::Text(s.to_string())
    }
}

// Field order here is the on-disk key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub year: Year,
    pub status: Status,
}

impl Book {
    pub fn new(id: u64, title: String, author: String, year: Year) -> Self {
        Self {
            id,
            title,
            author,
            year,
            status: Status::default(),
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Title: {}, Author: {}, Year: {}, Status: {}",
            self.id, self.title, self.author, self.year, self.status
        )
    }
}
