use super::Config;

/// Config written to disk on first run
pub fn defaults() -> Config {
    Config::default()
}
