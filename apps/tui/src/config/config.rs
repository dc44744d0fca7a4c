use dotenv::dotenv;
use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Input files and logging settings for a dashboard session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub news_path: PathBuf,
    pub zones_path: PathBuf,
    pub log_file: Option<PathBuf>,
    pub debug: bool,
}

impl DashboardConfig {
    pub const DEFAULT_NEWS_FILE: &'static str = "noticias.json";
    pub const DEFAULT_ZONES_FILE: &'static str = "zonas.json";

    /// Builds the configuration from the environment, loading `.env` first.
    pub fn from_env() -> Self {
        // Load environment variables from .env file
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            news_path: non_empty("NEWS_FILE")
                .map_or_else(|| PathBuf::from(Self::DEFAULT_NEWS_FILE), PathBuf::from),
            zones_path: non_empty("ZONES_FILE")
                .map_or_else(|| PathBuf::from(Self::DEFAULT_ZONES_FILE), PathBuf::from),
            log_file: non_empty("AGRO_LOG_FILE").map(PathBuf::from),
            debug: non_empty("DEBUG").is_some_and(|value| value != "0"),
        }
    }
}

/// Installs the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `warn`, or `debug` in debug mode.
/// Output goes to the configured log file so the terminal UI stays clean,
/// and to stderr when no file is configured.
pub fn init_logging(config: &DashboardConfig) -> color_eyre::eyre::Result<()> {
    let default_level = if config.debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_line_number(true);

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.with_ansi(false).with_writer(Mutex::new(file)).init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = DashboardConfig::from_lookup(|_| None);

        assert_eq!(config.news_path, PathBuf::from("noticias.json"));
        assert_eq!(config.zones_path, PathBuf::from("zonas.json"));
        assert_eq!(config.log_file, None);
        assert!(!config.debug);
    }

    #[test]
    fn environment_overrides_paths() {
        let config = DashboardConfig::from_lookup(lookup_from(&[
            ("NEWS_FILE", "data/n.json"),
            ("ZONES_FILE", " "),
            ("AGRO_LOG_FILE", "/tmp/agro.log"),
            ("DEBUG", "1"),
        ]));

        assert_eq!(config.news_path, PathBuf::from("data/n.json"));
        assert_eq!(config.zones_path, PathBuf::from("zonas.json"));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/agro.log")));
        assert!(config.debug);
    }

    #[test]
    fn debug_zero_is_off() {
        let config = DashboardConfig::from_lookup(lookup_from(&[("DEBUG", "0")]));
        assert!(!config.debug);
    }
}
