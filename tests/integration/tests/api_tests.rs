//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance (the server applies migrations on start)
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use homestay_core::Gender;
use integration_tests::{
    assert_error, assert_json, assert_status, check_test_env, days_ago, days_from_now,
    fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

async fn server() -> Option<TestServer> {
    if !check_test_env().await {
        return None;
    }
    Some(TestServer::start().await.expect("Failed to start server"))
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let Some(server) = server().await else { return };
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let Some(server) = server().await else { return };
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Schedule Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_schedule() {
    let Some(server) = server().await else { return };
    let host_id = seed_host(&server.pool, "Taro", "Tanaka").await.unwrap();

    let request = NewSchedule::new(host_id, days_from_now(10), days_from_now(20));
    let response = server.post("/api/v1/host/schedules", &request).await.unwrap();
    let created: ScheduleBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.host_id, host_id);
    assert_eq!(created.duration_days, 10);
    assert!(!created.is_primary_occupant);

    let response = server
        .get(&format!("/api/v1/host/schedules/{}", created.id))
        .await
        .unwrap();
    let fetched: ScheduleBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.start_date, created.start_date);
}

#[tokio::test]
async fn test_primary_occupant_attributes_are_derived() {
    let Some(server) = server().await else { return };
    let host_id = seed_host(&server.pool, "Hanako", "Suzuki").await.unwrap();
    let student_id = seed_student(&server.pool, "Emma", "Smith", Gender::Female)
        .await
        .unwrap();

    let mut request =
        NewSchedule::new(host_id, days_from_now(5), days_from_now(35)).primary_occupant(student_id);
    request.gender = Some("male".to_string());
    request.nationality = Some("France".to_string());

    let response = server.post("/api/v1/host/schedules", &request).await.unwrap();
    let created: ScheduleBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.student_id, Some(student_id));
    assert_eq!(created.gender.as_deref(), Some("female"));
    assert_eq!(created.nationality.as_deref(), Some("Japan"));
}

#[tokio::test]
async fn test_primary_occupant_requires_student() {
    let Some(server) = server().await else { return };
    let host_id = seed_host(&server.pool, "Ken", "Sato").await.unwrap();

    let mut request = NewSchedule::new(host_id, days_from_now(5), days_from_now(10));
    request.is_primary_occupant = true;

    let response = server.post("/api/v1/host/schedules", &request).await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "MISSING_STUDENT_FOR_PRIMARY_OCCUPANT");
}

#[tokio::test]
async fn test_omitted_is_rook_means_primary_occupant() {
    let Some(server) = server().await else { return };
    let host_id = seed_host(&server.pool, "Mei", "Ito").await.unwrap();

    let body = json!({
        "host_id": host_id,
        "start_date": days_from_now(5),
        "end_date": days_from_now(10),
    });
    let response = server.post("/api/v1/host/schedules", &body).await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "MISSING_STUDENT_FOR_PRIMARY_OCCUPANT");
}

#[tokio::test]
async fn test_touching_boundary_overlaps() {
    let Some(server) = server().await else { return };
    let host_id = seed_host(&server.pool, "Yuki", "Ito").await.unwrap();

    let first = NewSchedule::new(host_id, days_from_now(30), days_from_now(39));
    let response = server.post("/api/v1/host/schedules", &first).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let second = NewSchedule::new(host_id, days_from_now(39), days_from_now(44));
    let response = server.post("/api/v1/host/schedules", &second).await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "SCHEDULE_OVERLAP");

    let third = NewSchedule::new(host_id, days_from_now(40), days_from_now(44));
    let response = server.post("/api/v1/host/schedules", &third).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

#[tokio::test]
async fn test_invalid_schedule_dates() {
    let Some(server) = server().await else { return };
    let host_id = seed_host(&server.pool, "Mai", "Kato").await.unwrap();

    let reversed = NewSchedule::new(host_id, days_from_now(20), days_from_now(10));
    let response = server.post("/api/v1/host/schedules", &reversed).await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_RANGE");

    let past = NewSchedule::new(host_id, days_ago(3), days_from_now(10));
    let response = server.post("/api/v1/host/schedules", &past).await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "PAST_START_DATE");
}

#[tokio::test]
async fn test_unknown_references() {
    let Some(server) = server().await else { return };

    let request = NewSchedule::new(i64::from(i32::MAX), days_from_now(5), days_from_now(10));
    let response = server.post("/api/v1/host/schedules", &request).await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_HOST");

    let host_id = seed_host(&server.pool, "Jun", "Mori").await.unwrap();
    let request = NewSchedule::new(host_id, days_from_now(5), days_from_now(10))
        .primary_occupant(i64::from(i32::MAX));
    let response = server.post("/api/v1/host/schedules", &request).await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_STUDENT");

    let response = server.get("/api/v1/host/schedules/999999999").await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_SCHEDULE");
}

#[tokio::test]
async fn test_update_and_delete_schedule() {
    let Some(server) = server().await else { return };
    let host_id = seed_host(&server.pool, "Aoi", "Kimura").await.unwrap();

    let request = NewSchedule::new(host_id, days_from_now(10), days_from_now(20));
    let response = server.post("/api/v1/host/schedules", &request).await.unwrap();
    let created: ScheduleBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/host/schedules/{}", created.id);

    let response = server
        .put(&path, &json!({ "end_date": days_from_now(25), "is_extendable": true }))
        .await
        .unwrap();
    let updated: ScheduleBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.duration_days, 15);
    assert!(updated.is_extendable);

    let response = server.delete(&path).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_list_host_schedules() {
    let Some(server) = server().await else { return };
    let host_id = seed_host(&server.pool, "Sora", "Hayashi").await.unwrap();

    for (start, end) in [(50, 60), (10, 20)] {
        let request = NewSchedule::new(host_id, days_from_now(start), days_from_now(end));
        let response = server.post("/api/v1/host/schedules", &request).await.unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server
        .get(&format!("/api/v1/host/{host_id}/schedules"))
        .await
        .unwrap();
    let listing: HostSchedulesBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(listing.host_id, host_id);
    assert_eq!(listing.host_name, "Sora Hayashi");
    assert_eq!(listing.schedules.len(), 2);
    assert!(listing.schedules[0].start_date < listing.schedules[1].start_date);
}

// ============================================================================
// Occupancy Tests
// ============================================================================

#[tokio::test]
async fn test_occupancy_for_host_on_date() {
    let Some(server) = server().await else { return };
    let host_id = seed_host(&server.pool, "Riku", "Yamada").await.unwrap();
    let student_id = seed_student(&server.pool, "Lucas", "Martin", Gender::Male)
        .await
        .unwrap();

    let request =
        NewSchedule::new(host_id, days_from_now(10), days_from_now(20)).primary_occupant(student_id);
    let response = server.post("/api/v1/host/schedules", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get(&format!(
            "/api/v1/host/occupancy?date={}&host_id={host_id}",
            days_from_now(20)
        ))
        .await
        .unwrap();
    let occupancy: HostOccupancyBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(occupancy.host_name, "Riku Yamada");
    assert_eq!(occupancy.occupancy_count, 1);
    assert_eq!(occupancy.schedules[0].student_name.as_deref(), Some("Lucas Martin"));
    // Seeded students have no leaving date
    assert_eq!(occupancy.schedules[0].student_stay_days, None);
    assert_eq!(occupancy.schedules[0].gender.as_deref(), Some("male"));

    let response = server
        .get(&format!(
            "/api/v1/host/occupancy?date={}&host_id={host_id}",
            days_from_now(21)
        ))
        .await
        .unwrap();
    let occupancy: HostOccupancyBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(occupancy.occupancy_count, 0);
}

#[tokio::test]
async fn test_occupancy_range_for_host() {
    let Some(server) = server().await else { return };
    let host_id = seed_host(&server.pool, "Nao", "Inoue").await.unwrap();

    let request = NewSchedule::new(host_id, days_from_now(10), days_from_now(20));
    let response = server.post("/api/v1/host/schedules", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get(&format!(
            "/api/v1/host/occupancy/range?start_date={}&end_date={}&host_id={host_id}",
            days_from_now(15),
            days_from_now(30)
        ))
        .await
        .unwrap();
    let report: RangeBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(report.period.start_date, days_from_now(15));
    assert_eq!(report.daily_occupancy.len(), 16);
    assert_eq!(report.daily_occupancy[0].total_occupancy, 1);
    assert_eq!(report.daily_occupancy[15].total_occupancy, 0);
    assert_eq!(report.host_summary.len(), 1);
    assert_eq!(report.host_summary[0].total_days, 6);
}

#[tokio::test]
async fn test_occupancy_query_errors() {
    let Some(server) = server().await else { return };

    let response = server.get("/api/v1/host/occupancy").await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_QUERY_PARAMETER");

    let response = server.get("/api/v1/host/occupancy?date=invalid-date").await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_DATE");

    let response = server
        .get("/api/v1/host/occupancy/range?start_date=2024-01-25&end_date=2024-01-10")
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_RANGE");
}
