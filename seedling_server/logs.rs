use std::env;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, prelude::*};

const LOG_FILE_PREFIX: &str = "seedling.log";
const DEFAULT_LOG_DIR: &str = "logs";
const DEFAULT_FILTER: &str = "info,seedling=debug,seedling_app=debug,seedling_db=debug,seedling_web=debug";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Installs the global subscriber: stdout plus a daily file under
/// `SEEDLING_LOG_DIR` (default `logs/`). `RUST_LOG` overrides the filter.
///
/// File output stops when the returned guard is dropped.
pub fn setup_logging() -> WorkerGuard {
    let log_dir = env::var("SEEDLING_LOG_DIR").unwrap_or_else(|_| DEFAULT_LOG_DIR.to_string());
    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let layers: Vec<BoxedLayer> = vec![
        output_layer(std::io::stdout, true),
        output_layer(file_writer, false),
    ];

    tracing_subscriber::registry()
        .with(layers.with_filter(filter))
        .init();

    guard
}

fn output_layer<W>(writer: W, ansi: bool) -> BoxedLayer
where
    W: for<'w> fmt::MakeWriter<'w> + Send + Sync + 'static,
{
    fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_thread_ids(true)
        .with_target(true)
        .boxed()
}
