//! Logging Configuration
//!
//! Every run gets its own session directory under the data dir:
//! `app.log` for application records, `ai.log` for records whose target starts
//! with `ai::`. Library crates log through the `log` facade; the subscriber
//! bridges those records.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use regex::Regex;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::{filter_fn, EnvFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

pub const LOG_LEVEL_ENV: &str = "PATENTPRO_LOG_LEVEL";
const SESSION_DIR_PATTERN: &str = r"^\d{8}T\d{6}$";
const MAX_LOG_SESSIONS: usize = 50;
const LOG_RETENTION_DAYS: i64 = 7;
const AI_TARGET_PREFIX: &str = "ai::";
const NOISY_DEPENDENCIES: &[&str] = &["hyper", "hyper_util", "reqwest", "rustls", "h2"];

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: LevelFilter,
    /// Console output follows `level`; otherwise the console only shows warnings.
    pub verbose_console: bool,
    pub session_log_dir: Option<PathBuf>,
}

impl LogConfig {
    pub fn new(cli_level: Option<&str>, is_debug: bool) -> Self {
        let explicit = cli_level.is_some() || std::env::var(LOG_LEVEL_ENV).is_ok();
        let level = resolve_default_level(cli_level, is_debug);
        let session_log_dir = logs_root().and_then(|root| create_session_log_dir(&root));

        Self {
            level,
            verbose_console: is_debug || explicit,
            session_log_dir,
        }
    }
}

fn resolve_default_level(cli_level: Option<&str>, is_debug: bool) -> LevelFilter {
    let fallback = if is_debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let requested = cli_level
        .map(str::to_string)
        .or_else(|| std::env::var(LOG_LEVEL_ENV).ok());

    match requested {
        Some(val) => parse_log_level(&val).unwrap_or_else(|| {
            eprintln!(
                "Warning: Invalid log level '{}', falling back to default",
                val
            );
            fallback
        }),
        None => fallback,
    }
}

pub fn parse_log_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_lowercase().as_str() {
        "trace" => Some(LevelFilter::TRACE),
        "debug" => Some(LevelFilter::DEBUG),
        "info" => Some(LevelFilter::INFO),
        "warn" => Some(LevelFilter::WARN),
        "error" => Some(LevelFilter::ERROR),
        "off" => Some(LevelFilter::OFF),
        _ => None,
    }
}

pub fn logs_root() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("patentpro").join("logs"))
}

pub fn create_session_log_dir(logs_root: &Path) -> Option<PathBuf> {
    let timestamp = Local::now().format("%Y%m%dT%H%M%S").to_string();
    let session_dir = logs_root.join(timestamp);

    if let Err(e) = std::fs::create_dir_all(&session_dir) {
        eprintln!("Warning: Failed to create log session directory: {}", e);
        return None;
    }

    Some(session_dir)
}

fn open_log_file(dir: &Path, name: &str) -> Result<Mutex<File>> {
    let path = dir.join(name);
    let file = File::options()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    Ok(Mutex::new(file))
}

fn is_ai_target(target: &str) -> bool {
    target.starts_with(AI_TARGET_PREFIX)
}

pub fn init_logging(config: &LogConfig) -> Result<()> {
    let mut directives = config.level.to_string().to_lowercase();
    for dependency in NOISY_DEPENDENCIES {
        directives.push_str(&format!(",{}=warn", dependency));
    }
    let env_filter = EnvFilter::try_new(&directives)
        .with_context(|| format!("Invalid log filter: {}", directives))?;

    let console_level = if config.verbose_console {
        config.level
    } else {
        LevelFilter::WARN.min(config.level)
    };
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.verbose_console)
        .with_filter(console_level);

    let (app_layer, ai_layer) = match &config.session_log_dir {
        Some(dir) => {
            let app_layer = fmt::layer()
                .with_ansi(false)
                .with_thread_ids(true)
                .with_writer(open_log_file(dir, "app.log")?)
                .with_filter(filter_fn(|metadata| !is_ai_target(metadata.target())));
            let ai_layer = fmt::layer()
                .with_ansi(false)
                .with_thread_ids(true)
                .with_writer(open_log_file(dir, "ai.log")?)
                .with_filter(filter_fn(|metadata| is_ai_target(metadata.target())));
            (Some(app_layer), Some(ai_layer))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(app_layer)
        .with(ai_layer)
        .try_init()
        .context("Failed to install log subscriber")?;

    tracing::debug!(
        "Logging initialized: level={}, session_log_dir={:?}",
        config.level,
        config.session_log_dir
    );
    Ok(())
}

/// A `YYYYMMDDTHHMMSS` directory under the logs root.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LogSession {
    name: String,
    started: NaiveDateTime,
}

async fn list_sessions(logs_root: &Path) -> std::io::Result<Vec<LogSession>> {
    let pattern = Regex::new(SESSION_DIR_PATTERN)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let mut entries = tokio::fs::read_dir(logs_root).await?;
    let mut sessions = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_type().await?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if !pattern.is_match(&name) {
            continue;
        }
        if let Ok(started) = NaiveDateTime::parse_from_str(&name, "%Y%m%dT%H%M%S") {
            sessions.push(LogSession { name, started });
        }
    }

    Ok(sessions)
}

/// Oldest sessions beyond `max_sessions`, restricted to those past retention.
fn expired_sessions(
    mut sessions: Vec<LogSession>,
    max_sessions: usize,
    now: NaiveDateTime,
) -> Vec<LogSession> {
    let excess = sessions.len().saturating_sub(max_sessions);
    if excess == 0 {
        return Vec::new();
    }

    let threshold = now - chrono::Duration::days(LOG_RETENTION_DAYS);
    sessions.sort_by_key(|session| session.started);
    sessions.truncate(excess);
    sessions.retain(|session| session.started < threshold);
    sessions
}

/// Removes expired session directories and returns how many were removed.
pub async fn cleanup_log_sessions(
    logs_root: &Path,
    max_sessions: usize,
) -> std::io::Result<usize> {
    let sessions = list_sessions(logs_root).await?;
    let expired = expired_sessions(sessions, max_sessions, Local::now().naive_local());

    let mut removed = 0;
    for session in &expired {
        match tokio::fs::remove_dir_all(logs_root.join(&session.name)).await {
            Ok(()) => removed += 1,
            Err(e) => tracing::warn!("Failed to remove log session {}: {}", session.name, e),
        }
    }

    if removed > 0 {
        tracing::debug!("Removed {} expired log session(s)", removed);
    }
    Ok(removed)
}

pub fn spawn_log_cleanup_task() {
    let Some(root) = logs_root() else {
        return;
    };
    tokio::spawn(async move {
        if let Err(e) = cleanup_log_sessions(&root, MAX_LOG_SESSIONS).await {
            tracing::warn!("Failed to cleanup old log sessions: {}", e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_levels_case_insensitively() {
        assert_eq!(parse_log_level(" Debug "), Some(LevelFilter::DEBUG));
        assert_eq!(parse_log_level("OFF"), Some(LevelFilter::OFF));
        assert_eq!(parse_log_level("verbose"), None);
    }

    #[test]
    fn cli_level_beats_debug_flag() {
        assert_eq!(resolve_default_level(Some("warn"), true), LevelFilter::WARN);
    }

    #[test]
    fn ai_targets_are_split_out() {
        assert!(is_ai_target("ai::gemini"));
        assert!(!is_ai_target("patentpro_core::agentic"));
    }

    fn session(name: &str) -> LogSession {
        LogSession {
            name: name.to_string(),
            started: NaiveDateTime::parse_from_str(name, "%Y%m%dT%H%M%S").expect("timestamp"),
        }
    }

    #[test]
    fn only_old_sessions_beyond_the_limit_expire() {
        let now = session("20240110T120000").started;
        let sessions = vec![
            session("20240109T000000"),
            session("20240101T000000"),
            session("20240102T000000"),
            session("20240108T000000"),
        ];

        let expired = expired_sessions(sessions, 1, now);
        assert_eq!(
            expired,
            vec![session("20240101T000000"), session("20240102T000000")]
        );
    }

    #[test]
    fn sessions_within_the_limit_never_expire() {
        let now = session("20240110T120000").started;
        let sessions = vec![session("20200101T000000"), session("20200102T000000")];
        assert!(expired_sessions(sessions, 2, now).is_empty());
    }

    #[tokio::test]
    async fn cleanup_reports_removed_sessions() {
        let root = std::env::temp_dir().join(format!("patentpro-logs-{}", uuid::Uuid::new_v4()));
        let current = Local::now().format("%Y%m%dT%H%M%S").to_string();
        for name in ["20200101T000000", "20200102T000000", current.as_str(), "notes"] {
            std::fs::create_dir_all(root.join(name)).expect("create session dir");
        }

        let removed = cleanup_log_sessions(&root, 1)
            .await
            .expect("cleanup succeeds");

        assert_eq!(removed, 2);
        assert!(!root.join("20200101T000000").exists());
        assert!(root.join(&current).exists());
        assert!(root.join("notes").exists());

        let _ = std::fs::remove_dir_all(&root);
    }
}
