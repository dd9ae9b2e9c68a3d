use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// A commit as read from `git log`, timestamp kept in the author's offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub hash: String,
    pub timestamp: DateTime<FixedOffset>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_commits: usize,
    pub work_time_commits: usize,
    pub non_work_time_commits: usize,
    pub non_work_time_days: usize,
    pub work_time_percentage: f64,
    pub non_work_time_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub work_start_hour: u32,
    pub work_end_hour: u32,
    pub work_days: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionBucket {
    pub label: String,
    pub total: usize,
    pub non_work_time: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffHoursCommit {
    pub hash: String,
    pub timestamp: String,
    pub weekday: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkHoursReport {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub commit_limit: usize,
    pub summary: Summary,
    pub config: ReportConfig,
    pub hourly_distribution: Vec<DistributionBucket>,
    pub weekday_distribution: Vec<DistributionBucket>,
    pub non_work_time_commits: Vec<OffHoursCommit>,
}
