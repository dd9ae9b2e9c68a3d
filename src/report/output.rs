use super::aggregate::Analysis;
use crate::error::Result;
use crate::model::{
    DistributionBucket, OffHoursCommit, ReportConfig, WorkHoursReport, SCHEMA_VERSION,
};
use crate::util::{local_timestamp, short_hash, weekday_name};
use chrono::{Datelike, Utc};
use console::style;
use std::fs;
use std::path::Path;

const BAR_WIDTH: usize = 40;
const LISTED_COMMITS: usize = 20;

pub fn build_report(analysis: &Analysis, repository_path: String, commit_limit: usize) -> WorkHoursReport {
    let hours = analysis.hours();

    let mut off_hours: Vec<_> = analysis.non_work_time().to_vec();
    off_hours.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    WorkHoursReport {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path,
        commit_limit,
        summary: analysis.summary(),
        config: ReportConfig {
            work_start_hour: hours.start_hour,
            work_end_hour: hours.end_hour,
            work_days: hours.work_days(),
        },
        hourly_distribution: analysis.hourly_distribution(),
        weekday_distribution: analysis.weekday_distribution(),
        non_work_time_commits: off_hours
            .into_iter()
            .map(|c| OffHoursCommit {
                hash: short_hash(&c.hash),
                timestamp: local_timestamp(&c.timestamp),
                weekday: weekday_name(c.timestamp.weekday()).to_string(),
                message: c.message.clone(),
            })
            .collect(),
    }
}

pub fn write_report(report: &WorkHoursReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json + "\n")?;
    Ok(())
}

pub fn output_json(report: &WorkHoursReport) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

pub fn output_summary(report: &WorkHoursReport) {
    let s = &report.summary;
    let c = &report.config;

    println!("{}", style("Work Hours Summary").bold());
    println!("{}", "─".repeat(50));
    println!(
        "Work time: {} {:02}:00-{:02}:00",
        style(c.work_days.join(", ")).dim(),
        c.work_start_hour,
        c.work_end_hour
    );
    println!("Total commits: {}", style(s.total_commits).cyan());
    println!(
        "Work time commits: {} ({:.2}%)",
        style(s.work_time_commits).green(),
        s.work_time_percentage
    );
    println!(
        "Non-work time commits: {} ({:.2}%)",
        style(s.non_work_time_commits).yellow(),
        s.non_work_time_percentage
    );
    println!(
        "Days with non-work time commits: {}",
        style(s.non_work_time_days).yellow()
    );
}

pub fn output_hourly_table(buckets: &[DistributionBucket]) {
    output_distribution("Commits by Hour", "Hour", buckets);
}

pub fn output_weekday_table(buckets: &[DistributionBucket]) {
    output_distribution("Commits by Weekday", "Weekday", buckets);
}

fn output_distribution(title: &str, column: &str, buckets: &[DistributionBucket]) {
    let max = buckets.iter().map(|b| b.total).max().unwrap_or(0).max(1);

    println!("\n{}", style(title).bold());
    println!("{}", "─".repeat(30 + BAR_WIDTH));
    println!(
        "{:<10} {:>7} {:>9}  {}",
        style(column).bold(),
        style("Total").bold(),
        style("Off-hours").bold(),
        style("Activity").bold()
    );

    for bucket in buckets {
        let (work, off) = bar_widths(bucket, max);
        println!(
            "{:<10} {:>7} {:>9}  {}{}",
            bucket.label,
            bucket.total,
            bucket.non_work_time,
            style("█".repeat(work)).green(),
            style("█".repeat(off)).yellow()
        );
    }
}

/// Work and off-hours segment widths, scaled so `max` fills `BAR_WIDTH`.
fn bar_widths(bucket: &DistributionBucket, max: usize) -> (usize, usize) {
    let total = bucket.total * BAR_WIDTH / max;
    let off = bucket.non_work_time * BAR_WIDTH / max;
    (total.saturating_sub(off), off)
}

pub fn output_non_work_commits(report: &WorkHoursReport) {
    let commits = &report.non_work_time_commits;
    if commits.is_empty() {
        println!("\nNo commits outside work hours.");
        return;
    }

    println!("\n{}", style("Recent Non-work Time Commits").bold());
    println!("{}", "─".repeat(80));
    for c in commits.iter().take(LISTED_COMMITS) {
        println!(
            "{} {} {:<9} {}",
            style(&c.hash).yellow(),
            style(&c.timestamp).dim(),
            c.weekday,
            c.message
        );
    }
    if commits.len() > LISTED_COMMITS {
        println!("\n... and {} more", commits.len() - LISTED_COMMITS);
    }
}
