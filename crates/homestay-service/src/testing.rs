//! In-memory repositories and fixtures for service and router tests

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use homestay_core::traits::{HostRepository, RepoResult, ScheduleRepository, StudentRepository};
use homestay_core::{
    DomainError, FixedClock, Gender, Host, HostStatus, RecordId, Schedule, SchedulePolicy,
    Student, ValidatedSchedule,
};

use crate::services::{ServiceContext, ServiceContextBuilder};

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn host(id: i64, first_name: &str, last_name: &str) -> Host {
    Host {
        id: RecordId::new(id),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        phone: None,
        address: "1-2-3 Shibuya, Tokyo".to_string(),
        status: HostStatus::Great,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn student(id: i64, first_name: &str, last_name: &str, gender: Gender) -> Student {
    Student {
        id: RecordId::new(id),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        gender,
        arrival_date: date("2024-01-01"),
        leaving_date: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[derive(Default)]
pub struct InMemorySchedules {
    rows: Mutex<Vec<Schedule>>,
    next_id: AtomicI64,
}

#[async_trait]
impl ScheduleRepository for InMemorySchedules {
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Schedule>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|s| s.id == id).cloned())
    }

    async fn find_by_host(&self, host_id: RecordId) -> RepoResult<Vec<Schedule>> {
        let rows = self.rows.lock().unwrap();
        let mut found: Vec<_> = rows.iter().filter(|s| s.host_id == host_id).cloned().collect();
        found.sort_by_key(|s| (s.start_date, s.id));
        Ok(found)
    }

    async fn find_overlapping(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        host_id: Option<RecordId>,
    ) -> RepoResult<Vec<Schedule>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|s| s.start_date <= end && s.end_date >= start)
            .filter(|s| host_id.is_none_or(|h| s.host_id == h))
            .cloned()
            .collect())
    }

    async fn create(&self, schedule: &ValidatedSchedule) -> RepoResult<Schedule> {
        let id = RecordId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let now = Utc::now();
        let created = Schedule::from_validated(id, schedule, now, now);
        self.rows.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: RecordId, schedule: &ValidatedSchedule) -> RepoResult<Schedule> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(DomainError::ScheduleNotFound(id))?;
        *row = Schedule::from_validated(id, schedule, row.created_at, Utc::now());
        Ok(row.clone())
    }

    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|s| s.id != id);
        if rows.len() == before {
            return Err(DomainError::ScheduleNotFound(id));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryHosts {
    rows: Vec<Host>,
}

impl InMemoryHosts {
    pub fn with(rows: Vec<Host>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl HostRepository for InMemoryHosts {
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Host>> {
        Ok(self.rows.iter().find(|h| h.id == id).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryStudents {
    rows: Vec<Student>,
}

impl InMemoryStudents {
    pub fn with(rows: Vec<Student>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudents {
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Student>> {
        Ok(self.rows.iter().find(|s| s.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[RecordId]) -> RepoResult<Vec<Student>> {
        Ok(self.rows.iter().filter(|s| ids.contains(&s.id)).cloned().collect())
    }
}

/// Context with two hosts, two students and "today" pinned to `today`
///
/// Emma (10) stays 2024-01-01..2024-03-31; Lucas (11) has no leaving date.
///
/// Contexts sharing `schedules` see each other's writes.
pub fn context_on(
    today: NaiveDate,
    policy: SchedulePolicy,
    schedules: Arc<InMemorySchedules>,
) -> ServiceContext {
    ServiceContextBuilder::new()
        .schedule_repo(schedules)
        .host_repo(Arc::new(InMemoryHosts::with(vec![
            host(1, "Taro", "Tanaka"),
            host(2, "Hanako", "Suzuki"),
        ])))
        .student_repo(Arc::new(InMemoryStudents::with(vec![
            Student {
                leaving_date: Some(date("2024-03-31")),
                ..student(10, "Emma", "Smith", Gender::Female)
            },
            student(11, "Lucas", "Martin", Gender::Male),
        ])))
        .clock(Arc::new(FixedClock(today)))
        .policy(policy)
        .build()
        .unwrap()
}

pub fn context_with_policy(policy: SchedulePolicy) -> ServiceContext {
    context_on(date("2024-01-01"), policy, Arc::default())
}

pub fn context() -> ServiceContext {
    context_with_policy(SchedulePolicy::default())
}
