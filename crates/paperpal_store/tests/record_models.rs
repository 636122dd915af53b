use paperpal_store::{Newsletter, Paper, ValidationError};

fn sample_paper() -> Paper {
    Paper {
        title: "Attention Is All You Need".to_string(),
        abstract_text: "The dominant sequence transduction models...".to_string(),
        date: "2024-01-15".to_string(),
        date_run: "2024-01-16".to_string(),
        score: 8.5,
        rationale: "highly relevant".to_string(),
        related: true,
        cosine_similarity: 0.92,
        url: "https://arxiv.org/abs/1706.03762".to_string(),
        embedding_model: "text-embedding-3".to_string(),
    }
}

fn paper_json() -> serde_json::Value {
    serde_json::json!({
        "title": "Attention Is All You Need",
        "abstract": "The dominant sequence transduction models...",
        "date": "2024-01-15",
        "date_run": "2024-01-16",
        "score": 8.5,
        "rationale": "highly relevant",
        "related": true,
        "cosine_similarity": 0.92,
        "url": "https://arxiv.org/abs/1706.03762",
        "embedding_model": "text-embedding-3"
    })
}

#[test]
fn valid_paper_constructs() {
    let paper = sample_paper().validated().unwrap();
    assert_eq!(paper, sample_paper());
}

#[test]
fn score_bounds_are_inclusive() {
    for score in [0.0, 10.0, 5.0] {
        let mut paper = sample_paper();
        paper.score = score;
        assert!(paper.validated().is_ok(), "score {score} should be accepted");
    }
}

#[test]
fn out_of_range_score_fails_construction() {
    for score in [-0.1, -5.0, 10.01, 11.0, 100.0] {
        let mut paper = sample_paper();
        paper.score = score;
        let err = paper.validated().unwrap_err();
        assert_eq!(err, ValidationError::ScoreOutOfRange { score });
        assert_eq!(err.field(), Some("score"));
    }
}

#[test]
fn non_finite_score_fails_construction() {
    let mut paper = sample_paper();
    paper.score = f64::NAN;
    assert_eq!(
        paper.validated().unwrap_err(),
        ValidationError::NonFiniteNumber { field: "score" }
    );
}

#[test]
fn empty_title_fails_construction() {
    let mut paper = sample_paper();
    paper.title = String::new();
    let err = paper.validated().unwrap_err();
    assert_eq!(
        err,
        ValidationError::EmptyField {
            record: "paper",
            field: "title",
        }
    );
    assert_eq!(err.to_string(), "paper is missing required field: title");
}

#[test]
fn whitespace_title_is_content_but_empty_title_is_not() {
    let mut paper = sample_paper();
    paper.title = " ".to_string();
    assert!(paper.clone().validated().is_ok());

    paper.title = String::new();
    assert_eq!(paper.validated().unwrap_err().field(), Some("title"));
}

#[test]
fn url_and_embedding_model_may_be_empty() {
    let mut paper = sample_paper();
    paper.url = String::new();
    paper.embedding_model = String::new();
    assert!(paper.validated().is_ok());
}

#[test]
fn paper_from_json_accepts_integer_score() {
    let mut value = paper_json();
    value["score"] = serde_json::json!(7);
    let paper = Paper::from_json(&value.to_string()).unwrap();
    assert_eq!(paper.score, 7.0);
    assert_eq!(paper.abstract_text, "The dominant sequence transduction models...");
}

#[test]
fn paper_from_json_reports_missing_field() {
    let mut value = paper_json();
    value.as_object_mut().unwrap().remove("url");

    let err = Paper::from_json(&value.to_string()).unwrap_err();
    match err {
        ValidationError::Malformed { record, message } => {
            assert_eq!(record, "paper");
            assert!(message.contains("missing field `url`"), "{message}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn paper_from_json_rejects_wrong_semantic_types() {
    for (field, bad) in [
        ("score", serde_json::json!("high")),
        ("related", serde_json::json!("yes")),
        ("cosine_similarity", serde_json::json!(null)),
        ("title", serde_json::json!(42)),
    ] {
        let mut value = paper_json();
        value[field] = bad;
        let err = Paper::from_json(&value.to_string()).unwrap_err();
        assert!(
            matches!(err, ValidationError::Malformed { .. }),
            "field {field} should be rejected as malformed, got {err}"
        );
    }
}

#[test]
fn paper_from_json_rejects_out_of_range_score() {
    let mut value = paper_json();
    value["score"] = serde_json::json!(12);
    let err = Paper::from_json(&value.to_string()).unwrap_err();
    assert_eq!(err, ValidationError::ScoreOutOfRange { score: 12.0 });
}

#[test]
fn paper_serializes_abstract_under_wire_name() {
    let json = serde_json::to_value(sample_paper()).unwrap();
    assert_eq!(json, paper_json());

    let decoded: Paper = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, sample_paper());
}

#[test]
fn deserialize_rejects_invalid_paper() {
    let mut value = paper_json();
    value["score"] = serde_json::json!(-1);
    let err = serde_json::from_value::<Paper>(value).unwrap_err();
    assert!(
        err.to_string().contains("score must be between 0 and 10"),
        "unexpected error: {err}"
    );
}

#[test]
fn malformed_paper_dates_fail_construction() {
    for bad in ["2024/01/01", "Jan 1 2024"] {
        let mut paper = sample_paper();
        paper.date_run = bad.to_string();
        let err = paper.validated().unwrap_err();
        assert_eq!(err.field(), Some("date_run"));
        assert!(err.to_string().contains("'YYYY-MM-DD'"));
    }
}

#[test]
fn newsletter_from_json_parses_valid_payload() {
    let newsletter = Newsletter::from_json(
        r#"{"content":"weekly digest","start_date":"2024-01-01","end_date":"2024-01-07","date_sent":"2024-01-08"}"#,
    )
    .unwrap();
    assert_eq!(newsletter.content, "weekly digest");
    assert_eq!(newsletter.date_sent, "2024-01-08");
}

#[test]
fn newsletter_from_json_reports_missing_field() {
    let err = Newsletter::from_json(
        r#"{"content":"weekly digest","start_date":"2024-01-01","end_date":"2024-01-07"}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("missing field `date_sent`"), "{err}");
}

#[test]
fn newsletter_construction_rejects_bad_date() {
    let newsletter = Newsletter {
        content: "digest".to_string(),
        start_date: "2024-01-01".to_string(),
        end_date: "2024-01-07".to_string(),
        date_sent: "Jan 8 2024".to_string(),
    };
    let err = newsletter.validated().unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidDate {
            field: "date_sent",
            value: "Jan 8 2024".to_string(),
        }
    );
}

#[test]
fn newsletter_construction_leaves_window_order_to_store() {
    let newsletter = Newsletter {
        content: "digest".to_string(),
        start_date: "2024-02-01".to_string(),
        end_date: "2024-01-01".to_string(),
        date_sent: "2024-02-02".to_string(),
    };
    assert!(newsletter.validated().is_ok());
}
