use super::{
    analyze, build_report, output_hourly_table, output_json, output_non_work_commits,
    output_summary, output_weekday_table, write_report,
};
use crate::cli::RunArgs;
use crate::git::{fetch_commits, GitLog};
use anyhow::Context;
use std::path::Path;
use tracing::{error, info, warn};

pub fn exec(args: RunArgs) -> anyhow::Result<()> {
    let hours = args.work_hours().context("Invalid work hours")?;

    let git = GitLog::new(args.repo.as_ref(), args.timeout);
    // Keep the spinner off stderr when the caller wants machine output.
    let commits = fetch_commits(&git, args.limit, !args.json);

    let Some(analysis) = analyze(&commits, &hours) else {
        warn!("No commits to analyze, skipping report");
        if !args.json {
            println!("No commits found");
        }
        return Ok(());
    };

    let report = build_report(&analysis, repository_path(git.repo()), args.limit);

    if args.json {
        output_json(&report)?;
    } else {
        output_summary(&report);
        output_hourly_table(&report.hourly_distribution);
        output_weekday_table(&report.weekday_distribution);
        output_non_work_commits(&report);
    }

    match write_report(&report, &args.output) {
        Ok(()) => {
            info!("Report written to {}", args.output.display());
            if !args.json {
                println!("\nReport written to {}", args.output.display());
            }
        }
        Err(e) => error!("Failed to write report to {}: {e}", args.output.display()),
    }

    Ok(())
}

fn repository_path(repo: Option<&Path>) -> String {
    let path = match repo {
        Some(p) => p.to_path_buf(),
        None => match std::env::current_dir() {
            Ok(p) => p,
            Err(_) => return ".".to_string(),
        },
    };
    path.canonicalize()
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}
