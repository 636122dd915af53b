//! Paper record model.
//!
//! # Responsibility
//! - Define the shape of one evaluated paper.
//! - Reject structurally invalid papers at construction time.
//!
//! # Invariants
//! - `title`, `abstract_text` and `rationale` are non-empty (whitespace counts
//!   as content).
//! - `score` is finite and within `[0, 10]`.
//! - `date` and `date_run` are zero-padded `YYYY-MM-DD` dates.

use crate::model::date::parse_iso_date;
use crate::model::validation::ValidationError;
use serde::{Deserialize, Serialize};

const RECORD: &str = "paper";

/// Lowest accepted relevance score.
pub const MIN_SCORE: f64 = 0.0;
/// Highest accepted relevance score.
pub const MAX_SCORE: f64 = 10.0;

/// One paper evaluated by the curation pipeline.
///
/// Fields are public so callers can assemble values directly; the store
/// re-checks every value it is handed, so mutation after construction cannot
/// bypass validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPaper")]
pub struct Paper {
    pub title: String,
    /// Serialized as `abstract` to match the pipeline payloads.
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Publication date, `YYYY-MM-DD`.
    pub date: String,
    /// Date the evaluation ran, `YYYY-MM-DD`.
    pub date_run: String,
    /// Relevance score in `[0, 10]`. Integer scores are accepted as-is.
    pub score: f64,
    pub rationale: String,
    pub related: bool,
    pub cosine_similarity: f64,
    pub url: String,
    pub embedding_model: String,
}

/// Unvalidated wire shape; every field is required.
#[derive(Deserialize)]
struct RawPaper {
    title: String,
    #[serde(rename = "abstract")]
    abstract_text: String,
    date: String,
    date_run: String,
    score: f64,
    rationale: String,
    related: bool,
    cosine_similarity: f64,
    url: String,
    embedding_model: String,
}

impl TryFrom<RawPaper> for Paper {
    type Error = ValidationError;

    fn try_from(raw: RawPaper) -> Result<Self, Self::Error> {
        Paper {
            title: raw.title,
            abstract_text: raw.abstract_text,
            date: raw.date,
            date_run: raw.date_run,
            score: raw.score,
            rationale: raw.rationale,
            related: raw.related,
            cosine_similarity: raw.cosine_similarity,
            url: raw.url,
            embedding_model: raw.embedding_model,
        }
        .validated()
    }
}

impl Paper {
    /// Returns `self` when all record invariants hold.
    ///
    /// This is the typed construction path:
    /// `Paper { .. }.validated()?`.
    ///
    /// # Errors
    /// - The first violated invariant, in field declaration order.
    pub fn validated(self) -> Result<Self, ValidationError> {
        self.validate()?;
        Ok(self)
    }

    /// Parses an untyped pipeline payload into a validated paper.
    ///
    /// # Errors
    /// - `ValidationError::Malformed` when a field is absent or has the wrong
    ///   type (e.g. `"related": "yes"`).
    /// - Any record invariant violation otherwise.
    pub fn from_json(payload: &str) -> Result<Self, ValidationError> {
        let raw: RawPaper =
            serde_json::from_str(payload).map_err(|err| ValidationError::Malformed {
                record: RECORD,
                message: err.to_string(),
            })?;
        Paper::try_from(raw)
    }

    /// Checks record invariants without consuming the value.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)?;
        require_text("abstract", &self.abstract_text)?;
        parse_iso_date("date", &self.date)?;
        parse_iso_date("date_run", &self.date_run)?;
        check_score(self.score)?;
        require_text("rationale", &self.rationale)?;
        if !self.cosine_similarity.is_finite() {
            return Err(ValidationError::NonFiniteNumber {
                field: "cosine_similarity",
            });
        }
        Ok(())
    }
}

fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyField {
            record: RECORD,
            field,
        });
    }
    Ok(())
}

fn check_score(score: f64) -> Result<(), ValidationError> {
    if !score.is_finite() {
        return Err(ValidationError::NonFiniteNumber { field: "score" });
    }
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(ValidationError::ScoreOutOfRange { score });
    }
    Ok(())
}
