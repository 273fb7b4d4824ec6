//! Occupancy service
//!
//! Answers "how many students does each host have" for a day or a period.

use chrono::NaiveDate;
use homestay_core::entities::{Host, Schedule, Student};
use homestay_core::{
    occupancy_for_date, occupancy_for_range, DateRange, DomainError, OccupancyReport, RecordId,
    StudentLookup,
};
use tracing::{debug, instrument};

use crate::dto::{
    DailyOccupancyResponse, OccupancyResponse, RangeOccupancyResponse,
    SingleHostOccupancyResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Occupancy service
pub struct OccupancyService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> OccupancyService<'a> {
    /// Create a new OccupancyService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Occupancy on a single date
    ///
    /// With `host_id` the response describes that host only, including when
    /// it has nobody staying.
    #[instrument(skip(self))]
    pub async fn occupancy_for_date(
        &self,
        date: NaiveDate,
        host_id: Option<RecordId>,
    ) -> ServiceResult<OccupancyResponse> {
        let host = self.require_host(host_id).await?;

        let schedules = self
            .ctx
            .schedule_repo()
            .find_overlapping(date, date, host_id)
            .await?;
        let students = self.load_students(&schedules).await?;

        let lookup: &dyn StudentLookup = &students;
        let report = occupancy_for_date(date, &schedules, host_id, Some(lookup));
        debug!(total = report.total_occupancy(), "Occupancy computed");

        Ok(match (report, host) {
            (OccupancyReport::Host(day), Some(host)) => {
                OccupancyResponse::Host(SingleHostOccupancyResponse::new(day, &host))
            }
            (OccupancyReport::All(daily), _) => {
                OccupancyResponse::All(DailyOccupancyResponse::from(daily))
            }
            (OccupancyReport::Host(day), None) => {
                // Only reachable with a host filter, which always loads the host
                return Err(DomainError::HostNotFound(day.host.host_id).into());
            }
        })
    }

    /// Day-by-day occupancy over `[start_date, end_date]`
    #[instrument(skip(self))]
    pub async fn occupancy_for_range(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        host_id: Option<RecordId>,
    ) -> ServiceResult<RangeOccupancyResponse> {
        let period = DateRange::new(start_date, end_date)?;
        let max_days = self.ctx.policy().max_occupancy_range_days;
        if period.len_days() > i64::from(max_days) {
            return Err(DomainError::RangeTooLong {
                start: start_date,
                end: end_date,
                max_days,
            }
            .into());
        }
        self.require_host(host_id).await?;

        let schedules = self
            .ctx
            .schedule_repo()
            .find_overlapping(start_date, end_date, host_id)
            .await?;
        let students = self.load_students(&schedules).await?;

        let lookup: &dyn StudentLookup = &students;
        let report = occupancy_for_range(start_date, end_date, &schedules, host_id, Some(lookup))?;
        debug!(days = report.daily_occupancy.len(), "Range occupancy computed");

        Ok(RangeOccupancyResponse::from(report))
    }

    async fn require_host(&self, host_id: Option<RecordId>) -> ServiceResult<Option<Host>> {
        let Some(host_id) = host_id else {
            return Ok(None);
        };
        let host = self
            .ctx
            .host_repo()
            .find_by_id(host_id)
            .await?
            .ok_or(DomainError::HostNotFound(host_id))?;
        Ok(Some(host))
    }

    /// Students referenced by `schedules`, fetched in one query
    async fn load_students(&self, schedules: &[Schedule]) -> ServiceResult<Vec<Student>> {
        let mut ids: Vec<RecordId> = schedules.iter().filter_map(|s| s.student_id).collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        ids.sort_unstable();
        ids.dedup();
        Ok(self.ctx.student_repo().find_by_ids(&ids).await?)
    }
}
