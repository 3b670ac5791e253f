//! Tracing initialization: the fmt layer's full format (level, target, span, fields) to stderr,
//! tee'd into an append-only log file when a path is given. Stdout stays free for command output.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::FmtSpan, fmt::writer::MakeWriterExt, fmt::MakeWriter, layer::SubscriberExt,
    util::SubscriberInitExt, EnvFilter, Registry,
};

/// Installs the global tracing subscriber, writing to stderr.
///
/// Level comes from `RUST_LOG` (e.g. `info`, `botapi_core=debug`); defaults to `info`.
/// Load `.env` before calling this, otherwise `RUST_LOG` from that file is not seen.
pub fn init_tracing(log_file_path: Option<&str>) -> anyhow::Result<()> {
    init_tracing_with(log_file_path, io::stderr)
}

/// Same as [`init_tracing`] with a custom console writer.
pub fn init_tracing_with<W>(log_file_path: Option<&str>, console: W) -> anyhow::Result<()>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true)
        .with_level(true)
        .with_file(false)
        .with_line_number(false);

    match log_file_path {
        Some(path) => {
            let file = Arc::new(open_log_file(Path::new(path))?);
            Registry::default()
                .with(env_filter)
                .with(fmt_layer.with_writer(console.and(file)))
                .try_init()
        }
        None => Registry::default()
            .with(env_filter)
            .with(fmt_layer.with_writer(console))
            .try_init(),
    }
    .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}

/// Opens `path` for appending, creating parent directories as needed.
fn open_log_file(path: &Path) -> io::Result<std::fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
