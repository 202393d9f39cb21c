use log::LevelFilter;
use once_cell::sync::Lazy;
use std::str::FromStr;

static CONF: Lazy<Config> = Lazy::new(|| {
    let log_level = std::env::var("RANDVAR_LOG_LEVEL")
        .ok()
        .and_then(|l| LevelFilter::from_str(&l).ok())
        .unwrap_or(LevelFilter::Info);

    let seed = std::env::var("RANDVAR_SEED")
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok());

    Config { log_level, seed }
});

pub(crate) struct Config {
    #[cfg_attr(not(test), allow(dead_code))]
    pub log_level: LevelFilter,
    /// fixed seed for the default uniform source, entropy seeded when unset
    pub seed: Option<u64>,
}

impl Config {
    pub fn get() -> &'static Config {
        Lazy::force(&CONF)
    }
}
