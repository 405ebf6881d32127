use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
}

impl Person {
    pub fn new(first_name: &str, last_name: &str, date_of_birth: NaiveDate) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            date_of_birth,
        }
    }

    /// Panics if year/month/day is not a valid calendar date.
    pub fn born(first_name: &str, last_name: &str, year: i32, month: u32, day: u32) -> Self {
        Self::new(
            first_name,
            last_name,
            NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        )
    }
}

/// Projection target carrying only a first name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameTag {
    pub name: String,
}

/// Declared shape of the embedded status document. `message` and `code` are
/// parsed but drive no logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    pub success: bool,
    pub message: String,
    pub code: i64,
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MySecret {
    pub number: i64,
}

/// Lookup outcome; `secret` is `None` when the key is unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretReply {
    pub secret: Option<MySecret>,
}

/// One row of the secret store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretEntry {
    pub key: i64,
    pub number: i64,
}

pub const DEFAULT_SECRET_KEYS: [i64; 3] = [1, 293, 100000000];

impl SecretEntry {
    pub fn defaults() -> Vec<SecretEntry> {
        vec![
            SecretEntry {
                key: 1,
                number: 236429,
            },
            SecretEntry {
                key: 293,
                number: 333,
            },
        ]
    }
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub executed: Vec<String>,
}

impl RunReport {
    pub fn count(&self) -> usize {
        self.executed.len()
    }
}
