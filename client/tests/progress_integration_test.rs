//! Integration tests for progress loading against a mock backend

mod common;

use chrono::NaiveDate;
use common::TestBackend;
use nutrition_tracker_client::services::{ProgressService, ProgressSummary};
use nutrition_tracker_shared::progress::{GoalBalance, GoalPolicy, TimeRange};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[tokio::test]
async fn test_weekly_progress_end_to_end() {
    let backend = TestBackend::new().await;
    let today = d(2026, 10, 15);

    Mock::given(method("GET"))
        .and(path(format!("/user/{}/start-date", backend.user)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"start_date": null})))
        .mount(&backend.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/progress/raw"))
        .and(query_param("start", "2026-09-16"))
        .and(query_param("end", "2026-10-14"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "calories": [
                {"timestamp": "2026-09-16T09:00:00", "calories": 700},
                {"timestamp": "2026-10-14T20:00:00", "calories": 900}
            ],
            "exercise": []
        })))
        .expect(1)
        .mount(&backend.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/goal"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"goal": 2000})))
        .mount(&backend.server)
        .await;

    let view = ProgressService::load(
        &backend.client,
        &GoalPolicy::default(),
        backend.user,
        TimeRange::Weekly,
        today,
    )
    .await;

    assert_eq!(view.points.len(), 5);
    assert_eq!(view.points[0].value, 700.0);
    assert_eq!(view.points[4].value, 900.0);
    assert_eq!(view.points[4].label, "Oct 14 - Oct 14");
    assert!(matches!(view.summary, ProgressSummary::MultiDay(_)));
}

#[tokio::test]
async fn test_backend_down_degrades_to_empty_view() {
    let client = common::unreachable_client();

    let view = ProgressService::load(
        &client,
        &GoalPolicy::default(),
        uuid::Uuid::nil(),
        TimeRange::Daily,
        d(2026, 10, 15),
    )
    .await;

    assert!(view.is_empty());
    assert_eq!(view.summary, ProgressSummary::Empty);
}

#[tokio::test]
async fn test_server_error_degrades_to_empty_view() {
    let backend = TestBackend::new().await;

    Mock::given(method("GET"))
        .and(path("/progress/raw"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&backend.server)
        .await;

    let view = ProgressService::load(
        &backend.client,
        &GoalPolicy::default(),
        backend.user,
        TimeRange::single_day(d(2026, 10, 10)),
        d(2026, 10, 15),
    )
    .await;

    assert!(view.is_empty());
}

#[tokio::test]
async fn test_single_day_drill_down() {
    let backend = TestBackend::new().await;
    let date = d(2026, 10, 14);

    Mock::given(method("GET"))
        .and(path("/progress/raw"))
        .and(query_param("start", "2026-10-14"))
        .and(query_param("end", "2026-10-14"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "calories": [
                {"timestamp": "2026-10-14T07:45:00", "calories": 350, "meal_type": "breakfast"},
                {"timestamp": "2026-10-14T19:10:00", "calories": 820, "meal_type": "Dinner"}
            ]
        })))
        .mount(&backend.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/goal"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"goal": 2000})))
        .mount(&backend.server)
        .await;

    let view = ProgressService::load(
        &backend.client,
        &GoalPolicy::default(),
        backend.user,
        TimeRange::single_day(date),
        d(2026, 10, 15),
    )
    .await;

    assert_eq!(view.points.len(), 2);
    let ProgressSummary::SingleDate(summary) = view.summary else {
        panic!("expected single-date summary");
    };
    assert_eq!(summary.total, 1170.0);
    assert_eq!(summary.difference, Some(830.0));
    assert_eq!(summary.balance, Some(GoalBalance::Remaining));
}
