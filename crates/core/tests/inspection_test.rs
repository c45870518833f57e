//! Single-line inspection over small constructed geometry documents.

use serde_json::json;
use spacediff_core::inspect::inspect_line;
use spacediff_core::layout::LineTarget;
use spacediff_core::model::SpacingReport;
use spacediff_core::{MatchParams, SpacingError};

fn two_word_report() -> SpacingReport {
    serde_json::from_value(json!({
        "base": {"pages": [{"words": [
            {"text": "Hello", "x": 100.0, "y": 700.0, "width": 30.0},
            {"text": "World", "x": 140.0, "y": 700.0, "width": 30.0}
        ]}]},
        "candidate": {"pages": [{"words": [
            {"text": "Hello", "x": 100.0, "y": 700.0, "width": 30.0},
            {"text": "World", "x": 145.0, "y": 700.0, "width": 30.0}
        ]}]}
    }))
    .unwrap()
}

#[test]
fn single_gap_delta_is_candidate_minus_baseline() {
    let report = two_word_report();
    let inspection =
        inspect_line(&report, LineTarget::Index(1), &MatchParams::default()).unwrap();

    assert_eq!(inspection.y, 700.0);
    assert_eq!(inspection.word_count, 2);

    assert_eq!(inspection.word_deltas.len(), 2);
    assert_eq!(inspection.word_deltas[0].dx, 0.0);
    assert_eq!(inspection.word_deltas[1].text, "World");
    assert_eq!(inspection.word_deltas[1].dx, 5.0);

    assert_eq!(inspection.gap_deltas.len(), 1);
    let gap = inspection.gap_deltas[0];
    assert_eq!(gap.base, 10.0);
    assert_eq!(gap.cand, 15.0);
    assert_eq!(gap.delta, 5.0);
    assert_eq!(gap.share, 1.0);
    assert_eq!(gap.prev_width, 30.0);

    assert_eq!(inspection.total_extra, 5.0);
}

#[test]
fn resolves_line_by_y_under_tolerance() {
    let report = two_word_report();
    let inspection =
        inspect_line(&report, LineTarget::Y(700.3), &MatchParams::default()).unwrap();
    assert_eq!(inspection.y, 700.0);

    let err = inspect_line(&report, LineTarget::Y(705.0), &MatchParams::default()).unwrap_err();
    assert!(matches!(err, SpacingError::NoBaselineLine { .. }));
}

#[test]
fn out_of_range_index_names_valid_bounds() {
    let report: SpacingReport = serde_json::from_value(json!({
        "base": {"pages": [{"words": [
            {"text": "a", "x": 0.0, "y": 100.0, "width": 5.0},
            {"text": "b", "x": 0.0, "y": 112.0, "width": 5.0},
            {"text": "c", "x": 0.0, "y": 124.0, "width": 5.0}
        ]}]},
        "candidate": {"pages": [{"words": [
            {"text": "a", "x": 0.0, "y": 100.0, "width": 5.0},
            {"text": "b", "x": 0.0, "y": 112.0, "width": 5.0},
            {"text": "c", "x": 0.0, "y": 124.0, "width": 5.0}
        ]}]}
    }))
    .unwrap();

    let err = inspect_line(&report, LineTarget::Index(5), &MatchParams::default()).unwrap_err();
    match err {
        SpacingError::LineIndexOutOfRange { index, max } => {
            assert_eq!(index, 5);
            assert_eq!(max, 3);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn word_count_mismatch_is_fatal_and_names_both_counts() {
    let report: SpacingReport = serde_json::from_value(json!({
        "base": {"pages": [{"words": [
            {"text": "one", "x": 100.0, "y": 700.0, "width": 20.0},
            {"text": "two", "x": 130.0, "y": 700.0, "width": 20.0},
            {"text": "three", "x": 160.0, "y": 700.0, "width": 30.0}
        ]}]},
        "candidate": {"pages": [{"words": [
            {"text": "one", "x": 100.0, "y": 700.0, "width": 20.0},
            {"text": "twothree", "x": 130.0, "y": 700.0, "width": 50.0}
        ]}]}
    }))
    .unwrap();

    let err = inspect_line(&report, LineTarget::Index(1), &MatchParams::default()).unwrap_err();
    match err {
        SpacingError::WordCountMismatch { y, base, cand } => {
            assert_eq!(y, 700.0);
            assert_eq!(base, 3);
            assert_eq!(cand, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn candidate_matched_by_nearest_key_under_loose_tolerance() {
    let report: SpacingReport = serde_json::from_value(json!({
        "base": {"pages": [{"words": [
            {"text": "solo", "x": 100.0, "y": 700.0, "width": 20.0}
        ]}]},
        "candidate": {"pages": [{"words": [
            {"text": "solo", "x": 101.0, "y": 701.2, "width": 20.0}
        ]}]}
    }))
    .unwrap();

    let inspection =
        inspect_line(&report, LineTarget::Index(1), &MatchParams::default()).unwrap();
    assert_eq!(inspection.word_count, 1);
    assert_eq!(inspection.word_deltas[0].dx, 1.0);
    assert!(inspection.gap_deltas.is_empty());
    assert_eq!(inspection.total_extra, 0.0);
}

#[test]
fn unmatched_candidate_line_is_fatal() {
    let report: SpacingReport = serde_json::from_value(json!({
        "base": {"pages": [{"words": [
            {"text": "solo", "x": 100.0, "y": 700.0, "width": 20.0}
        ]}]},
        "candidate": {"pages": [{"words": [
            {"text": "solo", "x": 100.0, "y": 710.0, "width": 20.0}
        ]}]}
    }))
    .unwrap();

    let err = inspect_line(&report, LineTarget::Index(1), &MatchParams::default()).unwrap_err();
    assert!(matches!(err, SpacingError::NoCandidateLine { .. }));
}
