use tracing::subscriber::SetGlobalDefaultError;
use tracing::Subscriber;
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    EnvFilter, Layer,
};

use crate::config::{LogConfig, LogFormat};

/// Builds the diagnostic subscriber around an injected writer.
///
/// The runtime returns responses over its own API, so whatever `writer`
/// points at must never be the channel the response travels on.
pub fn subscriber<W>(config: &LogConfig, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = match config.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(writer)
            .with_ansi(false)
            .boxed(),
        LogFormat::Text => fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(false)
            .without_time()
            .boxed(),
    };

    tracing_subscriber::registry().with(filter).with(fmt_layer)
}

/// Installs the process-wide subscriber on stderr.
pub fn init(config: &LogConfig) -> Result<(), SetGlobalDefaultError> {
    tracing::subscriber::set_global_default(subscriber(config, std::io::stderr))?;
    warn_if_filter_rejected(config);

    Ok(())
}

/// Reports a log level directive that [`subscriber`] replaced with `info`.
pub(crate) fn warn_if_filter_rejected(config: &LogConfig) {
    if let Err(e) = EnvFilter::try_new(&config.level) {
        tracing::warn!(
            directive = %config.level,
            error = %e,
            "rejected log filter, falling back to info"
        );
    }
}
