//! Occupancy aggregation over a set of schedules
//!
//! Hosts are reported in ascending ID order and schedule summaries in
//! ascending `(start_date, id)` order. Empty input is a valid, empty report.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::entities::{Schedule, Student};
use crate::error::DomainError;
use crate::traits::StudentLookup;
use crate::value_objects::{DateRange, Gender, RecordId};

/// One schedule as shown in occupancy reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSummary {
    pub schedule_id: RecordId,
    pub host_id: RecordId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_primary_occupant: bool,
    pub student_id: Option<RecordId>,
    pub student_name: Option<String>,
    /// Whole stay of the student in days, when their leaving date is known
    pub student_stay_days: Option<i64>,
    pub gender: Option<Gender>,
    pub nationality: Option<String>,
}

impl ScheduleSummary {
    fn from_schedule(schedule: &Schedule, students: Option<&dyn StudentLookup>) -> Self {
        let student = schedule
            .student_id
            .and_then(|id| students?.find_student(id));

        Self {
            schedule_id: schedule.id,
            host_id: schedule.host_id,
            start_date: schedule.start_date,
            end_date: schedule.end_date,
            is_primary_occupant: schedule.is_primary_occupant,
            student_id: schedule.student_id,
            student_name: student.map(Student::full_name),
            student_stay_days: student.and_then(Student::stay_duration),
            gender: schedule.gender.or(student.map(|s| s.gender)),
            nationality: schedule.nationality.clone(),
        }
    }
}

/// Occupants of one host on one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostOccupancy {
    pub host_id: RecordId,
    pub occupancy_count: usize,
    pub schedules: Vec<ScheduleSummary>,
}

/// Occupancy of every host on one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyOccupancy {
    pub date: NaiveDate,
    pub total_occupancy: usize,
    pub host_count: usize,
    pub occupancy_by_host: Vec<HostOccupancy>,
}

/// Occupancy of a single host on one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostDayOccupancy {
    pub date: NaiveDate,
    pub host: HostOccupancy,
}

/// Result of a single-date query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OccupancyReport {
    All(DailyOccupancy),
    Host(HostDayOccupancy),
}

impl OccupancyReport {
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::All(daily) => daily.date,
            Self::Host(host) => host.date,
        }
    }

    pub fn total_occupancy(&self) -> usize {
        match self {
            Self::All(daily) => daily.total_occupancy,
            Self::Host(host) => host.host.occupancy_count,
        }
    }
}

/// Per-host count within a day of a range report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCount {
    pub host_id: RecordId,
    pub occupancy_count: usize,
}

/// One day of a range report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayOccupancy {
    pub date: NaiveDate,
    pub total_occupancy: usize,
    pub host_count: usize,
    pub hosts: Vec<HostCount>,
}

/// Per-host totals over a range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRangeSummary {
    pub host_id: RecordId,
    /// Days within the range on which the host had any occupant
    pub total_days: usize,
    pub schedules: Vec<ScheduleSummary>,
}

/// Result of a date-range query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeOccupancyReport {
    pub period: DateRange,
    /// One entry per day of the period, ascending
    pub daily_occupancy: Vec<DayOccupancy>,
    pub host_summary: Vec<HostRangeSummary>,
}

/// Occupancy on `date`, optionally for one host only
///
/// With a host filter the single host's entry is returned even when it has
/// no occupants.
pub fn occupancy_for_date(
    date: NaiveDate,
    schedules: &[Schedule],
    host_filter: Option<RecordId>,
    students: Option<&dyn StudentLookup>,
) -> OccupancyReport {
    let mut by_host: BTreeMap<RecordId, Vec<&Schedule>> = BTreeMap::new();
    for schedule in schedules
        .iter()
        .filter(|s| matches_host(s, host_filter) && s.is_active_on(date))
    {
        by_host.entry(schedule.host_id).or_default().push(schedule);
    }

    if let Some(host_id) = host_filter {
        let selected = by_host.remove(&host_id).unwrap_or_default();
        return OccupancyReport::Host(HostDayOccupancy {
            date,
            host: host_occupancy(host_id, selected, students),
        });
    }

    let occupancy_by_host: Vec<HostOccupancy> = by_host
        .into_iter()
        .map(|(host_id, selected)| host_occupancy(host_id, selected, students))
        .collect();

    OccupancyReport::All(DailyOccupancy {
        date,
        total_occupancy: occupancy_by_host.iter().map(|h| h.occupancy_count).sum(),
        host_count: occupancy_by_host.len(),
        occupancy_by_host,
    })
}

/// Day-by-day occupancy over `[start, end]`, optionally for one host only
pub fn occupancy_for_range(
    start: NaiveDate,
    end: NaiveDate,
    schedules: &[Schedule],
    host_filter: Option<RecordId>,
    students: Option<&dyn StudentLookup>,
) -> Result<RangeOccupancyReport, DomainError> {
    let period = DateRange::new(start, end)?;

    let mut tally = DayTally::default();
    let mut by_host: BTreeMap<RecordId, Vec<&Schedule>> = BTreeMap::new();
    if let Some(host_id) = host_filter {
        by_host.insert(host_id, Vec::new());
    }

    for schedule in schedules.iter().filter(|s| matches_host(s, host_filter)) {
        let Some(clipped) = schedule.range().intersection(&period) else {
            continue;
        };
        tally.add_stay(schedule.host_id, &clipped);
        by_host.entry(schedule.host_id).or_default().push(schedule);
    }

    let daily_occupancy = period.days().map(|date| tally.day(date)).collect();

    let host_summary = by_host
        .into_iter()
        .map(|(host_id, mut selected)| {
            sort_schedules(&mut selected);
            HostRangeSummary {
                host_id,
                total_days: tally.occupied_days(host_id),
                schedules: summarize(&selected, students),
            }
        })
        .collect();

    Ok(RangeOccupancyReport {
        period,
        daily_occupancy,
        host_summary,
    })
}

fn matches_host(schedule: &Schedule, host_filter: Option<RecordId>) -> bool {
    host_filter.is_none_or(|host_id| schedule.host_id == host_id)
}

fn sort_schedules(schedules: &mut [&Schedule]) {
    schedules.sort_by_key(|s| (s.start_date, s.id));
}

fn summarize(schedules: &[&Schedule], students: Option<&dyn StudentLookup>) -> Vec<ScheduleSummary> {
    schedules
        .iter()
        .map(|s| ScheduleSummary::from_schedule(s, students))
        .collect()
}

fn host_occupancy(
    host_id: RecordId,
    mut selected: Vec<&Schedule>,
    students: Option<&dyn StudentLookup>,
) -> HostOccupancy {
    sort_schedules(&mut selected);
    HostOccupancy {
        host_id,
        occupancy_count: selected.len(),
        schedules: summarize(&selected, students),
    }
}

/// Per-day, per-host occupant counts
#[derive(Debug, Default)]
struct DayTally {
    days: BTreeMap<NaiveDate, BTreeMap<RecordId, usize>>,
}

impl DayTally {
    fn add_stay(&mut self, host_id: RecordId, range: &DateRange) {
        for date in range.days() {
            *self.days.entry(date).or_default().entry(host_id).or_default() += 1;
        }
    }

    fn day(&self, date: NaiveDate) -> DayOccupancy {
        let hosts: Vec<HostCount> = self
            .days
            .get(&date)
            .map(|counts| {
                counts
                    .iter()
                    .map(|(&host_id, &occupancy_count)| HostCount {
                        host_id,
                        occupancy_count,
                    })
                    .collect()
            })
            .unwrap_or_default();

        DayOccupancy {
            date,
            total_occupancy: hosts.iter().map(|h| h.occupancy_count).sum(),
            host_count: hosts.len(),
            hosts,
        }
    }

    fn occupied_days(&self, host_id: RecordId) -> usize {
        self.days
            .values()
            .filter(|counts| counts.contains_key(&host_id))
            .count()
    }
}
