use serde_json::json;

use super::*;

fn valid_match() -> Value {
    json!({ "file1": "A.java", "file2": "B.java", "start1": 0, "end1": 5, "start2": 2, "end2": 7, "tokens": 10 })
}

#[test]
fn parses_valid_report() {
    let report = ComparisonReport::from_value(&json!({
        "id1": "s1", "id2": "s2", "similarity": 0.8, "matches": [valid_match()]
    }))
    .unwrap();

    assert_eq!(report.id1, "s1");
    assert_eq!(report.id2, "s2");
    assert_eq!(report.similarity, 0.8);
    assert_eq!(
        report.matches,
        vec![MatchRecord {
            file1: "A.java".into(),
            file2: "B.java".into(),
            start1: 0,
            end1: 5,
            start2: 2,
            end2: 7,
            tokens: 10,
        }]
    );
}

#[test]
fn parses_from_json_text_and_ignores_extra_fields() {
    let txt = r#"{"id1":"a","id2":"b","similarity":1,"matches":[],"extra":true}"#;
    let report = ComparisonReport::from_json_str(txt).unwrap();
    assert_eq!(report.similarity, 1.0);
    assert!(report.matches.is_empty());
}

#[test]
fn missing_match_field_reports_index() {
    let mut broken = valid_match();
    broken.as_object_mut().unwrap().remove("end2");
    let err = ComparisonReport::from_value(&json!({
        "id1": "s1", "id2": "s2", "similarity": 0.5, "matches": [valid_match(), broken]
    }))
    .unwrap_err();

    match err {
        ComparisonError::Validation { index, reason } => {
            assert_eq!(index, 1);
            assert!(reason.contains("end2"), "{reason}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn non_numeric_and_negative_fields_are_rejected() {
    for (key, bad) in [("start1", json!("3")), ("tokens", json!(-1)), ("end1", json!(2.5)), ("file2", json!(4))] {
        let mut m = valid_match();
        m[key] = bad;
        let err = ComparisonReport::from_value(&json!({
            "id1": "s1", "id2": "s2", "similarity": 0.5, "matches": [m]
        }))
        .unwrap_err();
        assert!(matches!(err, ComparisonError::Validation { index: 0, .. }), "{key}: {err:?}");
    }
}

#[test]
fn inverted_range_is_rejected() {
    let mut m = valid_match();
    m["start2"] = json!(9);
    let err = ComparisonReport::from_value(&json!({
        "id1": "s1", "id2": "s2", "similarity": 0.5, "matches": [m]
    }))
    .unwrap_err();
    assert!(err.to_string().contains("start2"));
}

#[test]
fn empty_range_is_accepted() {
    let mut m = valid_match();
    m["start1"] = json!(5);
    let report = ComparisonReport::from_value(&json!({
        "id1": "s1", "id2": "s2", "similarity": 0.5, "matches": [m]
    }))
    .unwrap();
    assert_eq!(report.matches[0].start1, 5);
}

#[test]
fn report_level_fields_are_checked() {
    let cases = [
        json!([]),
        json!({ "id2": "s2", "similarity": 0.5, "matches": [] }),
        json!({ "id1": "s1", "id2": "s2", "similarity": "high", "matches": [] }),
        json!({ "id1": "s1", "id2": "s2", "similarity": 0.5 }),
    ];
    for case in cases {
        let err = ComparisonReport::from_value(&case).unwrap_err();
        assert!(matches!(err, ComparisonError::Report(_)), "{case}: {err:?}");
    }
}

#[test]
fn invalid_json_text_is_a_json_error() {
    let err = ComparisonReport::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, ComparisonError::Json(_)));
}

#[test]
fn whole_float_indices_are_accepted() {
    let mut m = valid_match();
    m["end1"] = json!(5.0);
    m["tokens"] = json!(10.0);
    let report = ComparisonReport::from_value(&json!({
        "id1": "s1", "id2": "s2", "similarity": 0.5, "matches": [m]
    }))
    .unwrap();
    assert_eq!(report.matches[0].end1, 5);
    assert_eq!(report.matches[0].tokens, 10);
}

#[test]
fn non_numeric_index_names_the_problem() {
    let mut m = valid_match();
    m["start1"] = json!("3");
    let err = ComparisonReport::from_value(&json!({
        "id1": "s1", "id2": "s2", "similarity": 0.5, "matches": [valid_match(), valid_match(), m]
    }))
    .unwrap_err();
    match err {
        ComparisonError::Validation { index, reason } => {
            assert_eq!(index, 2);
            assert!(reason.contains("invalid type"), "{reason}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn missing_report_field_is_named() {
    let err = ComparisonReport::from_value(&json!({ "id1": "s1", "similarity": 0.5, "matches": [] })).unwrap_err();
    assert!(err.to_string().contains("id2"), "{err}");
}
