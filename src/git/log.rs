use crate::error::{OffhoursError, Result};
use crate::model::Commit;
use chrono::{DateTime, FixedOffset};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, error, warn};

/// `hash|author date (ISO)|subject`
pub const LOG_FORMAT: &str = "--pretty=format:%H|%ai|%s";
const FIELD_SEPARATOR: char = '|';
const GIT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Runs `git log` against one repository with a hard timeout.
pub struct GitLog {
    repo: Option<PathBuf>,
    timeout: Duration,
}

impl GitLog {
    /// Bind to the repository at `repo`, or the current dir if `None`
    pub fn new<P: AsRef<Path>>(repo: Option<P>, timeout: Duration) -> Self {
        Self {
            repo: repo.map(|p| p.as_ref().to_path_buf()),
            timeout,
        }
    }

    pub fn repo(&self) -> Option<&Path> {
        self.repo.as_deref()
    }

    fn git(&self) -> Command {
        let mut cmd = Command::new("git");
        if let Some(repo) = &self.repo {
            cmd.arg("-C").arg(repo);
        }
        // stderr is matched against git's untranslated messages.
        cmd.env("LC_ALL", "C");
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }

    /// Raw output of `git log` for the `limit` most recent commits.
    pub fn log(&self, limit: usize, progress: bool) -> Result<String> {
        let mut cmd = self.git();
        cmd.arg("log")
            .arg(format!("--max-count={limit}"))
            .arg("--no-show-signature")
            .arg(LOG_FORMAT);
        debug!("{cmd:?}");

        let pb = if progress {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            pb.set_message("Reading commit history...");
            pb
        } else {
            ProgressBar::hidden()
        };

        let mut child = cmd.spawn()?;
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let status = self.wait(&mut child, &pb);
        pb.finish_and_clear();
        let status = status?;

        let stdout = join(stdout)?;
        let stderr = join(stderr)?;

        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr).trim().to_string();
            if stderr.contains("not a git repository") {
                let location = self
                    .repo
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| ".".to_string());
                return Err(OffhoursError::NotARepository(location));
            }
            return Err(OffhoursError::GitCommand { status, stderr });
        }

        Ok(String::from_utf8_lossy(&stdout).into_owned())
    }

    fn wait(&self, child: &mut Child, pb: &ProgressBar) -> Result<ExitStatus> {
        let deadline = Instant::now() + self.timeout;
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(status);
            }
            if Instant::now() >= deadline {
                // Already-exited races are fine to ignore here.
                let _ = child.kill();
                let _ = child.wait();
                return Err(OffhoursError::Timeout(self.timeout));
            }
            pb.tick();
            thread::sleep(POLL_INTERVAL);
        }
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<std::io::Result<Vec<u8>>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            pipe.read_to_end(&mut buf)?;
        }
        Ok(buf)
    })
}

fn join(handle: JoinHandle<std::io::Result<Vec<u8>>>) -> Result<Vec<u8>> {
    let bytes = handle
        .join()
        .map_err(|_| std::io::Error::other("pipe reader panicked"))??;
    Ok(bytes)
}

pub fn parse_git_date(input: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_str(input, GIT_DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(input))
        .map_err(|e| OffhoursError::InvalidDate(format!("'{input}': {e}")))
}

/// Parse one `hash|date|message` line. The message may itself contain `|`.
pub fn parse_log_line(line: &str) -> Result<Commit> {
    let mut fields = line.splitn(3, FIELD_SEPARATOR);
    let hash = fields.next().unwrap_or("").trim();
    let date = fields
        .next()
        .ok_or_else(|| OffhoursError::Parse(format!("expected hash|date|message, got '{line}'")))?
        .trim();
    let message = fields.next().unwrap_or("").trim();

    if hash.is_empty() {
        return Err(OffhoursError::Parse(format!("missing commit hash in '{line}'")));
    }

    Ok(Commit {
        hash: hash.to_string(),
        timestamp: parse_git_date(date)?,
        message: message.to_string(),
    })
}

pub fn parse_log(output: &str) -> Vec<Commit> {
    let mut commits = Vec::new();
    for (index, line) in output.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_log_line(line) {
            Ok(commit) => commits.push(commit),
            Err(e) => warn!("Skipping log line {}: {e}", index + 1),
        }
    }
    commits
}

/// Best effort: any failure is logged and yields no commits.
pub fn fetch_commits(git: &GitLog, limit: usize, progress: bool) -> Vec<Commit> {
    match git.log(limit, progress) {
        Ok(output) if output.trim().is_empty() => {
            warn!("git log produced no output");
            Vec::new()
        }
        Ok(output) => {
            let commits = parse_log(&output);
            debug!("Parsed {} commits", commits.len());
            commits
        }
        Err(e) => {
            error!("Failed to read commit history: {e}");
            Vec::new()
        }
    }
}
