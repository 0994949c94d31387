//! End-to-end scenarios exercising the engine the way the dashboard does:
//! fixtures come in as JSON, flow through the feed prefilter, the filter
//! criteria, the sorter, and the stats reducer, and every tier shown along
//! the way must agree with the classifier.

use chrono::{DateTime, TimeZone, Utc};
use pirs_engine::{
    AppState, RiskCriteria, RiskRecord, SortField, SortOrder, SortSpec, Tier, classify_by_score, compute_alert_stats,
    filter_risks, sort_risks,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
}

fn fixture() -> Vec<RiskRecord> {
    serde_json::from_str(
        r#"[
        {
            "id": "RISK-001",
            "title": "Unauthorized excavation near KP 42",
            "location": "Segment B-7",
            "category": "Third Party Damage",
            "type": "excavation",
            "riskScore": 9.0,
            "pof": 4,
            "cof": 5,
            "status": "active",
            "priority": "critical",
            "timestamp": "2025-03-01T10:30:00Z",
            "createdAt": "2025-03-01T10:30:00Z",
            "updatedAt": "2025-03-01T11:45:00Z"
        },
        {
            "id": "RISK-002",
            "title": "Heavy vehicle crossing on ROW",
            "location": "Segment C-2",
            "category": "Mechanical Damage",
            "type": "vehicle",
            "riskScore": 6.0,
            "status": "investigating",
            "priority": "high",
            "timestamp": "2025-03-01T09:00:00Z",
            "createdAt": "2025-03-01T09:00:00Z",
            "updatedAt": "2025-03-01T11:45:00Z"
        },
        {
            "id": "RISK-003",
            "title": "Minor ground movement",
            "location": "Segment A-4",
            "category": "Geohazard",
            "type": "ground",
            "riskScore": 3.0,
            "status": "monitoring",
            "priority": "low",
            "timestamp": "2025-03-01T08:00:00Z",
            "createdAt": "2025-02-20T08:00:00Z",
            "updatedAt": "2025-02-28T16:00:00Z"
        }
    ]"#,
    )
    .unwrap()
}

/// Three open records scoring 9, 6, and 3 split one per tier, and the high
/// filter isolates the first.
#[test]
fn test_feed_scenario_stats_and_high_filter() {
    let records = fixture();

    let stats = compute_alert_stats(&records);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.high, 1);
    assert_eq!(stats.medium, 1);
    assert_eq!(stats.low, 1);

    let criteria = RiskCriteria {
        risk_level: Some(Tier::High),
        ..RiskCriteria::default()
    };
    let high = filter_risks(&records, &criteria, now());
    assert_eq!(high.len(), 1);
    assert_eq!(high[0].id.as_str(), "RISK-001");
}

/// Stats counts and per-record classification are two code paths over the
/// same thresholds; they must never disagree, whatever the scores.
#[test]
fn test_stats_agree_with_classifier_over_fixture() {
    let records = fixture();
    let stats = compute_alert_stats(&records);

    let count_tier = |tier: Tier| {
        records
            .iter()
            .filter(|r| classify_by_score(r.risk_score).tier == tier)
            .count()
    };
    assert_eq!(stats.high, count_tier(Tier::High));
    assert_eq!(stats.medium, count_tier(Tier::Medium));
    assert_eq!(stats.low, count_tier(Tier::Low));
}

/// Sorting by score descending, records with equal scores keep their input
/// order (stable sort); a follow-up toggle flips the direction.
#[test]
fn test_sort_then_toggle() {
    let mut records = fixture();
    let mut spec = SortSpec {
        field: SortField::RiskScore,
        order: SortOrder::Desc,
    };
    sort_risks(&mut records, spec);
    let ids: Vec<_> = records.iter().map(|r| r.id.as_str().to_string()).collect();
    assert_eq!(ids, ["RISK-001", "RISK-002", "RISK-003"]);

    spec.toggle(SortField::RiskScore);
    sort_risks(&mut records, spec);
    let ids: Vec<_> = records.iter().map(|r| r.id.as_str().to_string()).collect();
    assert_eq!(ids, ["RISK-003", "RISK-002", "RISK-001"]);
}

/// The default app state drives the feed: open statuses only, last 24 hours,
/// everything else wide open.
#[test]
fn test_app_state_feed_defaults() {
    let mut records = fixture();
    // An archived record never reaches the feed regardless of score.
    let mut archived = records[0].clone();
    archived.id = "RISK-999".parse().unwrap();
    archived.status = "archived".parse().unwrap();
    records.push(archived);
    // Neither does an open record older than the default window.
    let mut stale = records[1].clone();
    stale.id = "RISK-998".parse().unwrap();
    stale.timestamp = Utc.with_ymd_and_hms(2025, 2, 1, 9, 0, 0).unwrap();
    records.push(stale);

    let state = AppState::default();
    let feed = state.filtered_alerts(&records, now());
    let ids: Vec<_> = feed.iter().map(|r| r.id.as_str().to_string()).collect();
    assert_eq!(ids, ["RISK-001", "RISK-002", "RISK-003"]);
}

/// Matrix ordinals come from the record when present and fall back to the
/// score-derived values when absent, and the two matrix composites stay
/// independent displays.
#[test]
fn test_matrix_views_over_fixture() {
    use pirs_engine::classify::matrix;

    let records = fixture();

    // RISK-001 carries explicit ordinals.
    assert_eq!(records[0].matrix_pof(), 4);
    assert_eq!(records[0].matrix_cof(), 5);
    assert_eq!(matrix::cell_tier(4, 5), Tier::Critical);

    // RISK-002 has none; score 6 derives P4/C4.
    assert_eq!(records[1].matrix_pof(), 4);
    assert_eq!(records[1].matrix_cof(), 4);
    assert_eq!(matrix::cell_tier(4, 4), Tier::High);
    assert_eq!(matrix::headline_tier(4, 4), Tier::Critical);
}
