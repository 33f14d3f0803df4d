use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Level used when `RUST_LOG` does not apply.
pub fn default_level(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

/// Initialise logging. In debug mode the level defaults to `debug` and can be
/// overridden via the `RUST_LOG` environment variable; otherwise it is forced
/// to `info`. When `log_file` is given, output is also appended to that file.
///
/// Calling this more than once keeps the first subscriber.
pub fn init(debug: bool, log_file: Option<PathBuf>) {
    // Ignore `RUST_LOG` unless debug logging was asked for so a stray variable
    // in the user's environment cannot make the launcher verbose.
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level(true)))
    } else {
        EnvFilter::new(default_level(false))
    };

    let file_layer = log_file.and_then(|path| {
        let file_name = path.file_name()?.to_owned();
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        let appender = tracing_appender::rolling::never(dir, file_name);
        Some(fmt::layer().with_ansi(false).with_writer(appender))
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .try_init();
}
