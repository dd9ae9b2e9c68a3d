pub mod log;

pub use log::{fetch_commits, parse_git_date, parse_log, parse_log_line, GitLog};
