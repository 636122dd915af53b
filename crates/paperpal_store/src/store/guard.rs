//! Persistence-boundary checks.
//!
//! Runs on every insert regardless of how the record was built. Record fields
//! are public, so a value that passed construction may have been changed
//! since.

use crate::model::date::parse_iso_date;
use crate::model::newsletter::Newsletter;
use crate::model::paper::{Paper, MAX_SCORE, MIN_SCORE};
use crate::model::validation::ValidationError;

/// Checks a paper before it is written.
pub fn check_paper(paper: &Paper) -> Result<(), ValidationError> {
    for (field, value) in [
        ("title", paper.title.as_str()),
        ("abstract", paper.abstract_text.as_str()),
        ("rationale", paper.rationale.as_str()),
    ] {
        if value.is_empty() {
            return Err(ValidationError::EmptyField {
                record: "paper",
                field,
            });
        }
    }

    for (field, value) in [
        ("score", paper.score),
        ("cosine_similarity", paper.cosine_similarity),
    ] {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteNumber { field });
        }
    }
    if paper.score < MIN_SCORE || paper.score > MAX_SCORE {
        return Err(ValidationError::ScoreOutOfRange { score: paper.score });
    }

    parse_iso_date("date", &paper.date)?;
    parse_iso_date("date_run", &paper.date_run)?;
    Ok(())
}

/// Checks a newsletter before it is written, including window ordering.
pub fn check_newsletter(newsletter: &Newsletter) -> Result<(), ValidationError> {
    let start = parse_iso_date("start_date", &newsletter.start_date)?;
    let end = parse_iso_date("end_date", &newsletter.end_date)?;
    parse_iso_date("date_sent", &newsletter.date_sent)?;

    if start > end {
        return Err(ValidationError::DateOrder {
            start_date: newsletter.start_date.clone(),
            end_date: newsletter.end_date.clone(),
        });
    }
    Ok(())
}
