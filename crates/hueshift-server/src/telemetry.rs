use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

const DEFAULT_FILTER: &str = "hueshift_server=info,tower_http=info";

/// Install the global tracing subscriber: compact console output filtered by `RUST_LOG`.
pub fn init_tracing() {
    let console_fmt = tracing_subscriber::fmt::layer()
        .event_format(Format::default().compact().with_target(false));

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(console_fmt)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_targets_this_crate() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
        let target = format!("{}=info", env!("CARGO_CRATE_NAME"));
        assert!(DEFAULT_FILTER.split(',').any(|d| d == target));
    }
}
