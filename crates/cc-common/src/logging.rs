use std::{panic, path::PathBuf, sync::OnceLock};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt::writer::BoxMakeWriter};

pub const LOG_DIR_ENV: &str = "CC_LOG_DIR";
pub const LOG_BACKTRACE_ENV: &str = "CC_LOG_INCLUDE_BACKTRACE";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Routes panics to `tracing`; `CC_LOG_INCLUDE_BACKTRACE=1` keeps the default hook too.
pub fn install_tracing_panic_hook(app_name: &'static str) {
    static INSTALLED: OnceLock<()> = OnceLock::new();

    INSTALLED.get_or_init(|| {
        let default_hook = panic::take_hook();
        let include_backtrace = is_truthy(std::env::var(LOG_BACKTRACE_ENV).ok().as_deref());

        panic::set_hook(Box::new(move |info| {
            let thread = std::thread::current();
            let location = info
                .location()
                .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()));
            let payload = info.payload();
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "non-string panic payload".into());

            tracing::error!(
                application = app_name,
                thread_name = thread.name().unwrap_or("unnamed"),
                location = location.as_deref().unwrap_or("unknown"),
                panic_message = %message,
                "panic captured"
            );

            if include_backtrace {
                default_hook(info);
            }
        }));
    });
}

/// `RUST_LOG` filter (default `info`); writes to `<CC_LOG_DIR>/<app>.log` when
/// set, stderr otherwise.
pub fn init_tracing_subscriber(app_name: &'static str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);

    let writer = log_dir(std::env::var_os(LOG_DIR_ENV).map(PathBuf::from))
        .and_then(|dir| rotating_file_writer(dir, app_name))
        .unwrap_or_else(|| BoxMakeWriter::new(std::io::stderr));

    let _ = builder.with_writer(writer).try_init();
}

fn rotating_file_writer(dir: PathBuf, app_name: &'static str) -> Option<BoxMakeWriter> {
    if let Err(err) = std::fs::create_dir_all(&dir) {
        eprintln!(
            "failed to create {LOG_DIR_ENV} {}: {err}; logging to stderr",
            dir.display()
        );
        return None;
    }

    let appender = tracing_appender::rolling::daily(dir, format!("{app_name}.log"));
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);
    let _ = LOG_GUARD.set(guard);
    Some(BoxMakeWriter::new(non_blocking))
}

fn log_dir(raw: Option<PathBuf>) -> Option<PathBuf> {
    raw.filter(|dir| !dir.as_os_str().is_empty())
}

fn is_truthy(value: Option<&str>) -> bool {
    value.is_some_and(|v| {
        let v = v.trim();
        v == "1" || v.eq_ignore_ascii_case("true")
    })
}
