use crate::model::{Commit, DistributionBucket, Summary};
use crate::util::{percentage, weekday_name, WEEKDAYS};
use crate::worktime::WorkHours;
use chrono::{Datelike, NaiveDate, Timelike};
use std::collections::HashSet;

/// Commits split by the work-time predicate.
#[derive(Debug)]
pub struct Analysis<'a> {
    hours: WorkHours,
    commits: &'a [Commit],
    work_time: Vec<&'a Commit>,
    non_work_time: Vec<&'a Commit>,
}

/// `None` when there is nothing to analyze.
pub fn analyze<'a>(commits: &'a [Commit], hours: &WorkHours) -> Option<Analysis<'a>> {
    if commits.is_empty() {
        return None;
    }

    let (work_time, non_work_time): (Vec<&Commit>, Vec<&Commit>) =
        commits.iter().partition(|c| hours.contains(&c.timestamp));

    Some(Analysis {
        hours: *hours,
        commits,
        work_time,
        non_work_time,
    })
}

impl<'a> Analysis<'a> {
    pub fn hours(&self) -> &WorkHours {
        &self.hours
    }

    pub fn non_work_time(&self) -> &[&'a Commit] {
        &self.non_work_time
    }

    /// Distinct calendar dates, in each commit's own offset.
    pub fn non_work_time_days(&self) -> usize {
        self.non_work_time
            .iter()
            .map(|c| c.timestamp.date_naive())
            .collect::<HashSet<NaiveDate>>()
            .len()
    }

    pub fn summary(&self) -> Summary {
        let total = self.commits.len();
        Summary {
            total_commits: total,
            work_time_commits: self.work_time.len(),
            non_work_time_commits: self.non_work_time.len(),
            non_work_time_days: self.non_work_time_days(),
            work_time_percentage: percentage(self.work_time.len(), total),
            non_work_time_percentage: percentage(self.non_work_time.len(), total),
        }
    }

    pub fn hourly_distribution(&self) -> Vec<DistributionBucket> {
        hourly_distribution(self.commits, &self.hours)
    }

    pub fn weekday_distribution(&self) -> Vec<DistributionBucket> {
        weekday_distribution(self.commits, &self.hours)
    }
}

/// 24 buckets, `00:00` through `23:00`.
pub fn hourly_distribution(commits: &[Commit], hours: &WorkHours) -> Vec<DistributionBucket> {
    let mut buckets: Vec<DistributionBucket> = (0..24)
        .map(|h| DistributionBucket {
            label: format!("{h:02}:00"),
            total: 0,
            non_work_time: 0,
        })
        .collect();

    for commit in commits {
        let bucket = &mut buckets[commit.timestamp.hour() as usize];
        bucket.total += 1;
        if !hours.contains(&commit.timestamp) {
            bucket.non_work_time += 1;
        }
    }

    buckets
}

/// 7 buckets, Monday through Sunday.
pub fn weekday_distribution(commits: &[Commit], hours: &WorkHours) -> Vec<DistributionBucket> {
    let mut buckets: Vec<DistributionBucket> = WEEKDAYS
        .iter()
        .map(|d| DistributionBucket {
            label: weekday_name(*d).to_string(),
            total: 0,
            non_work_time: 0,
        })
        .collect();

    for commit in commits {
        let bucket = &mut buckets[commit.timestamp.weekday().num_days_from_monday() as usize];
        bucket.total += 1;
        if !hours.contains(&commit.timestamp) {
            bucket.non_work_time += 1;
        }
    }

    buckets
}
