use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "clinic_fixtures=info";
const VERBOSE_FILTER: &str = "clinic_fixtures=debug,info";

/// 未設定 RUST_LOG 時使用的過濾規則
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    }
}

/// 日誌寫到 stderr，stdout 只留給輸出的 fixtures
pub fn init_cli_logger(verbose: bool) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .without_time()
                .compact(),
        )
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_follows_verbosity() {
        assert_eq!(default_filter(false), "clinic_fixtures=info");
        assert!(default_filter(true).starts_with("clinic_fixtures=debug"));
    }

    #[test]
    fn test_second_init_reports_error() {
        let _ = init_cli_logger(false);
        // 同一個行程只能有一個全域 subscriber
        assert!(init_cli_logger(true).is_err());
    }
}
