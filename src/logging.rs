use crate::config::LogSettings;
use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::fmt::format::{Format, Json, JsonFields};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("blogql={}", level)
}

/// Daily-rolled, non-blocking writer for `log_path`; creates its directory.
fn file_writer(log_path: &Path) -> (NonBlocking, WorkerGuard) {
    let dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let _ = std::fs::create_dir_all(dir);

    let file_name = log_path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("blogql.log"));
    tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, file_name))
}

fn json_layer<S>(writer: NonBlocking) -> fmt::Layer<S, JsonFields, Format<Json>, NonBlocking> {
    fmt::layer().with_writer(writer).with_ansi(false).json()
}

/// Install the global subscriber.
///
/// Human-readable events go to stderr; when `settings.file` is set, JSON
/// events are also written to a daily-rotated file next to it. `RUST_LOG`
/// takes precedence over the verbosity flag.
///
/// Keep the returned guard alive for the life of the process, otherwise
/// buffered file output is lost.
pub fn init(settings: &LogSettings) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(settings.verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    let Some(log_path) = settings.file.as_deref() else {
        subscriber.init();
        return None;
    };

    let (writer, guard) = file_writer(log_path);
    subscriber.with(json_layer(writer)).init();
    Some(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_directive_follows_verbosity() {
        assert_eq!(default_directive(false), "blogql=info");
        assert_eq!(default_directive(true), "blogql=debug");
        assert!(EnvFilter::try_new(default_directive(true)).is_ok());
    }

    #[test]
    fn test_file_layer_writes_json_events() {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = temp_dir.path().join("logs");
        let (writer, guard) = file_writer(&log_dir.join("blogql.log"));
        assert!(log_dir.is_dir());

        let subscriber = tracing_subscriber::registry().with(json_layer(writer));
        tracing::subscriber::with_default(subscriber, || {
            let store = crate::storage::Store::default();
            let _ = store.create_user(crate::storage::NewUser {
                name: "apple".to_string(),
                email: "apple@a.com".to_string(),
                age: None,
            });
        });
        // flushes the background writer
        drop(guard);

        let entries: Vec<_> = std::fs::read_dir(&log_dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        assert_eq!(entries.len(), 1);
        let name = entries[0].file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("blogql.log"));

        let content = std::fs::read_to_string(&entries[0]).unwrap();
        let line: serde_json::Value = serde_json::from_str(content.lines().next().unwrap()).unwrap();
        assert_eq!(line["level"], "WARN");
        assert_eq!(line["fields"]["message"], "Rejected user with duplicate email");
        assert_eq!(line["fields"]["email"], "apple@a.com");
    }
}
