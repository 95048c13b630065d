use std::io::stderr;

use botapi::prelude::*;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr subscriber. The returned guard flushes the writer on drop.
pub fn init() -> Result<WorkerGuard> {
    let format_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (stderr, stderr_guard) = tracing_appender::non_blocking(stderr());
    let format_layer = tracing_subscriber::fmt::layer()
        .with_writer(stderr)
        .without_time()
        .with_filter(format_filter);

    tracing_subscriber::Registry::default().with(format_layer).try_init()?;
    Ok(stderr_guard)
}
