//! Newsletter record model.
//!
//! # Invariants
//! - `start_date`, `end_date` and `date_sent` are zero-padded `YYYY-MM-DD`
//!   dates.
//! - Window ordering (`start_date <= end_date`) is enforced by the store at
//!   insert time, not here.

use crate::model::date::parse_iso_date;
use crate::model::validation::ValidationError;
use serde::{Deserialize, Serialize};

const RECORD: &str = "newsletter";

/// One generated newsletter issue covering `start_date..=end_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNewsletter")]
pub struct Newsletter {
    pub content: String,
    pub start_date: String,
    pub end_date: String,
    pub date_sent: String,
}

#[derive(Deserialize)]
struct RawNewsletter {
    content: String,
    start_date: String,
    end_date: String,
    date_sent: String,
}

impl TryFrom<RawNewsletter> for Newsletter {
    type Error = ValidationError;

    fn try_from(raw: RawNewsletter) -> Result<Self, Self::Error> {
        Newsletter {
            content: raw.content,
            start_date: raw.start_date,
            end_date: raw.end_date,
            date_sent: raw.date_sent,
        }
        .validated()
    }
}

impl Newsletter {
    /// Returns `self` when all record invariants hold.
    pub fn validated(self) -> Result<Self, ValidationError> {
        self.validate()?;
        Ok(self)
    }

    /// Parses an untyped pipeline payload into a validated newsletter.
    ///
    /// # Errors
    /// - `ValidationError::Malformed` when a field is absent or not a string.
    /// - `ValidationError::InvalidDate` for an unparseable date.
    pub fn from_json(payload: &str) -> Result<Self, ValidationError> {
        let raw: RawNewsletter =
            serde_json::from_str(payload).map_err(|err| ValidationError::Malformed {
                record: RECORD,
                message: err.to_string(),
            })?;
        Newsletter::try_from(raw)
    }

    /// Checks record invariants without consuming the value.
    pub fn validate(&self) -> Result<(), ValidationError> {
        parse_iso_date("start_date", &self.start_date)?;
        parse_iso_date("end_date", &self.end_date)?;
        parse_iso_date("date_sent", &self.date_sent)?;
        Ok(())
    }
}
