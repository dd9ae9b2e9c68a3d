pub mod aggregate;
pub mod exec;
pub mod output;

pub use aggregate::{analyze, hourly_distribution, weekday_distribution, Analysis};
pub use exec::exec;
pub use output::{
    build_report, output_hourly_table, output_json, output_non_work_commits, output_summary,
    output_weekday_table, write_report,
};
